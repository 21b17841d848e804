use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use skip_core::timestamp::parse_timestamp;
use skip_core::{DateRange, FilterSpec, SizeCategory, SizeConstraint};

use super::ui::OutputFormat;

/// Defines the top-level interface for the skips CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "skips")]
#[command(version, about = "Browse and filter the skip hire catalog.")]
pub struct SkipsCli {
    /// Path to the JSON skip catalog.
    #[arg(short, long, global = true, env = "SKIPS_CATALOG", default_value = "skips.json")]
    pub catalog: PathBuf,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: SkipsCliCommand,
}

/// Defines the available subcommands of the skips CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum SkipsCliCommand {
    /// List skips matching the given filters.
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// URL query parameter (can be repeated), e.g. --param skipSize=small,medium
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
        /// Page to show (1-based)
        #[arg(long)]
        page: Option<u32>,
        /// Skips per page
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Show availability statistics for the catalog.
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
        /// Compute stats over the filtered skips instead of the whole catalog
        #[arg(long)]
        filtered: bool,
    },
    /// Get a skip by ID, with its price breakdown.
    Get {
        /// Skip ID (e.g. 17933)
        id: u64,
    },
    /// Show the size category bands and preset sizes.
    Categories,
}

/// Filter flags shared by the listing commands. Each maps to one filter field.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct FilterArgs {
    /// Exact size in cubic yards (can be repeated)
    #[arg(long = "size", value_name = "YARDS")]
    pub sizes: Vec<u32>,
    /// Size category, expanded to its preset sizes (can be repeated)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<SizeCategory>,
    #[arg(long)]
    pub min_size: Option<u32>,
    #[arg(long)]
    pub max_size: Option<u32>,
    #[arg(long)]
    pub hire_period_days: Option<u32>,
    /// Minimum price including VAT
    #[arg(long)]
    pub min_price: Option<Decimal>,
    /// Maximum price including VAT
    #[arg(long)]
    pub max_price: Option<Decimal>,
    #[arg(long)]
    pub postcode: Option<String>,
    #[arg(long)]
    pub area: Option<String>,
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub forbidden: Option<bool>,
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub allowed_on_road: Option<bool>,
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub allows_heavy_waste: Option<bool>,
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub has_transport_cost: Option<bool>,
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub has_per_tonne_cost: Option<bool>,
    #[arg(long, value_parser = parse_timestamp_arg, value_name = "TIMESTAMP")]
    pub created_from: Option<DateTime<FixedOffset>>,
    #[arg(long, value_parser = parse_timestamp_arg, value_name = "TIMESTAMP")]
    pub created_to: Option<DateTime<FixedOffset>>,
    #[arg(long, value_parser = parse_timestamp_arg, value_name = "TIMESTAMP")]
    pub updated_from: Option<DateTime<FixedOffset>>,
    #[arg(long, value_parser = parse_timestamp_arg, value_name = "TIMESTAMP")]
    pub updated_to: Option<DateTime<FixedOffset>>,
}

impl FilterArgs {
    /// Overlay the flags that were given onto `spec`.
    pub fn apply_to(&self, mut spec: FilterSpec) -> FilterSpec {
        if let Some(size) = self.size_constraint() {
            spec.size = Some(size);
        }

        overlay(&mut spec.min_size, self.min_size);
        overlay(&mut spec.max_size, self.max_size);
        overlay(&mut spec.hire_period_days, self.hire_period_days);
        overlay(&mut spec.min_price, self.min_price);
        overlay(&mut spec.max_price, self.max_price);
        overlay(&mut spec.postcode, self.postcode.clone());
        overlay(&mut spec.area, self.area.clone());
        overlay(&mut spec.forbidden, self.forbidden);
        overlay(&mut spec.allowed_on_road, self.allowed_on_road);
        overlay(&mut spec.allows_heavy_waste, self.allows_heavy_waste);
        overlay(&mut spec.has_transport_cost, self.has_transport_cost);
        overlay(&mut spec.has_per_tonne_cost, self.has_per_tonne_cost);

        if self.created_from.is_some() || self.created_to.is_some() {
            spec.created_at = Some(DateRange::new(self.created_from, self.created_to));
        }
        if self.updated_from.is_some() || self.updated_to.is_some() {
            spec.updated_at = Some(DateRange::new(self.updated_from, self.updated_to));
        }

        spec
    }

    pub fn to_filter_spec(&self) -> FilterSpec {
        self.apply_to(FilterSpec::new())
    }

    fn size_constraint(&self) -> Option<SizeConstraint> {
        let mut sizes = self.sizes.clone();
        for category in &self.categories {
            sizes.extend_from_slice(category.preset_sizes());
        }

        match sizes.as_slice() {
            [] => None,
            [size] => Some(SizeConstraint::Exact(*size)),
            _ => Some(SizeConstraint::AnyOf(sizes)),
        }
    }
}

fn overlay<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

fn parse_timestamp_arg(value: &str) -> Result<DateTime<FixedOffset>, String> {
    parse_timestamp(value)
        .map_err(|e| format!("expected an RFC 3339 timestamp or YYYY-MM-DD: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn parse(args: &[&str]) -> SkipsCli {
        SkipsCli::try_parse_from(std::iter::once("skips").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_list_flags_to_spec() {
        let cli = parse(&[
            "list",
            "--size",
            "8",
            "--max-price",
            "300",
            "--has-transport-cost",
            "false",
            "--created-from",
            "2025-04-01",
        ]);

        let SkipsCliCommand::List { filters, .. } = cli.command else {
            panic!("expected list command");
        };
        let spec = filters.to_filter_spec();

        assert_eq!(spec.size, Some(SizeConstraint::Exact(8)));
        assert_eq!(spec.max_price, Some(Decimal::from(300)));
        assert_eq!(spec.has_transport_cost, Some(false));
        assert_matches!(
            &spec.created_at,
            Some(range) if range.from.is_some() && range.to.is_none()
        );
        assert_eq!(spec.active_constraints(), 4);
    }

    #[test]
    fn test_categories_expand_to_presets() {
        let cli = parse(&["stats", "--category", "small", "--size", "5", "--filtered"]);

        let SkipsCliCommand::Stats { filters, filtered } = cli.command else {
            panic!("expected stats command");
        };

        assert!(filtered);
        assert_eq!(filters.to_filter_spec().size, Some(SizeConstraint::AnyOf(vec![5, 4, 6])));
    }

    #[test]
    fn test_flags_override_base_spec() {
        let filters = FilterArgs {
            postcode: Some("IP1".to_string()),
            ..FilterArgs::default()
        };
        let base = FilterSpec::new().with_postcode("NR32").with_area("Lowestoft");

        let spec = filters.apply_to(base);

        assert_eq!(spec.postcode.as_deref(), Some("IP1"));
        assert_eq!(spec.area.as_deref(), Some("Lowestoft"));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let args = ["skips", "list", "--category", "huge"];
        assert!(SkipsCli::try_parse_from(args).is_err());

        let args = ["skips", "list", "--created-to", "soon"];
        assert!(SkipsCli::try_parse_from(args).is_err());

        let args = ["skips", "list", "--forbidden", "maybe"];
        assert!(SkipsCli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_global_options() {
        let cli = parse(&["--catalog", "/tmp/skips.json", "-f", "json", "get", "17933"]);

        assert_eq!(cli.catalog, PathBuf::from("/tmp/skips.json"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.command, SkipsCliCommand::Get { id: 17933 });
    }
}
