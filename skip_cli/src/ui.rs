use std::fmt;

use clap::ValueEnum;
use console::style;
use iso_currency::Currency;
use rust_decimal::Decimal;
use serde::Serialize;
use skip_core::{FilterResult, FilterStats, Page, PriceBreakdown, SizeCategory, SkipRecord};

/// Catalog prices are always quoted in pounds sterling.
const CURRENCY: Currency = Currency::GBP;

/// How command results are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(message: &str) {
    eprintln!("{}", style(message).bold());
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn info(message: &str) {
    eprintln!("{}", style(message).dim());
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), style(message).red());
}

pub fn error_with_details(message: &str, details: &str) {
    error(message);
    eprintln!("  {}", style(details).dim());
}

pub fn debug(message: &str) {
    log::debug!("{}", message);
}

/// Writes any serializable value as pretty JSON to stdout.
pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error_with_details("Couldn't serialize output", &e.to_string()),
    }
}

/// Formats an amount with the currency symbol, rounded to minor units.
pub fn format_money(amount: Decimal) -> String {
    let precision = CURRENCY.exponent().unwrap_or(2) as usize;
    format!("{}{:.*}", CURRENCY.symbol(), precision, amount.round_dp(precision as u32))
}

fn format_optional_cost(cost: Option<Decimal>) -> String {
    match cost {
        Some(amount) => format_money(amount),
        None => style("n/a").dim().to_string(),
    }
}

fn yes_no(value: bool) -> String {
    if value {
        style("yes").green().to_string()
    } else {
        style("no").red().to_string()
    }
}

fn location(skip: &SkipRecord) -> String {
    if skip.area.is_empty() {
        skip.postcode.clone()
    } else {
        format!("{} ({})", skip.postcode, skip.area)
    }
}

pub fn pretty_output_skip_page(result: &FilterResult, page: &Page<&&SkipRecord>) {
    if page.items.is_empty() {
        println!("{}", style("No skips match the current filters").dim());
    }

    for skip in &page.items {
        let breakdown = PriceBreakdown::for_skip(skip);
        println!(
            "{} {} yard skip, {} days, {} {}",
            style(format!("#{}", skip.id)).cyan(),
            style(skip.size).bold(),
            skip.hire_period_days,
            style(format_money(breakdown.total)).green(),
            style(location(skip)).dim(),
        );
    }

    println!();
    println!(
        "Page {} of {} ({} of {} skips match)",
        page.page,
        page.total_pages.max(1),
        result.matched_count,
        result.total_count,
    );
}

pub fn pretty_output_skip_single(skip: &SkipRecord, breakdown: &PriceBreakdown) {
    println!("{}", style(format!("Skip #{}", skip.id)).bold().cyan());
    println!("  {:<20} {} yards", "Size", skip.size);
    println!("  {:<20} {}", "Category", skip_core::classify_size(skip.size));
    println!("  {:<20} {} days", "Hire period", skip.hire_period_days);
    println!("  {:<20} {}", "Location", location(skip));
    println!("  {:<20} {}", "Forbidden", yes_no(skip.forbidden));
    println!("  {:<20} {}", "Allowed on road", yes_no(skip.allowed_on_road));
    println!("  {:<20} {}", "Allows heavy waste", yes_no(skip.allows_heavy_waste));
    println!("  {:<20} {}", "Created", skip.created_at.to_rfc3339());
    println!("  {:<20} {}", "Updated", skip.updated_at.to_rfc3339());
    if let Some(url) = &skip.image_url {
        println!("  {:<20} {}", "Image", url);
    }

    println!();
    println!("{}", style("Price").bold());
    println!("  {:<20} {}", "Before VAT", format_money(breakdown.base));
    println!(
        "  {:<20} {} ({}%)",
        "VAT",
        format_money(breakdown.vat_amount),
        breakdown.vat_rate.normalize()
    );
    println!("  {:<20} {}", "Total", style(format_money(breakdown.total)).green());
    println!("  {:<20} {}", "Transport", format_optional_cost(breakdown.transport_cost));
    println!("  {:<20} {}", "Per tonne", format_optional_cost(breakdown.per_tonne_cost));
}

pub fn pretty_output_stats(stats: &FilterStats) {
    println!("{}", style("Size categories").bold());
    for (category, count) in stats.size_categories.iter() {
        println!("  {:<14} {}", category.to_string(), count);
    }

    println!();
    println!("{}", style("Price range").bold());
    println!("  {:<14} {}", "Min", format_money(stats.price_range.min));
    println!("  {:<14} {}", "Max", format_money(stats.price_range.max));
    println!("  {:<14} {}", "Average", format_money(stats.price_range.average));

    println!();
    println!("{}", style("Postcodes").bold());
    output_values(&stats.available_postcodes);

    println!();
    println!("{}", style("Areas").bold());
    output_values(&stats.available_areas);
}

fn output_values(values: &[String]) {
    if values.is_empty() {
        println!("  {}", style("none").dim());
    } else {
        println!("  {}", values.join(", "));
    }
}

pub fn pretty_output_categories(categories: &[SizeCategory]) {
    for category in categories {
        let band = category.band();
        let range = match band.max {
            Some(max) => format!("{}-{} yards", band.min, max),
            None => format!("{}+ yards", band.min),
        };
        let presets: Vec<String> = category
            .preset_sizes()
            .iter()
            .map(|size| size.to_string())
            .collect();

        println!(
            "{:<14} {:<14} presets: {}",
            style(category.as_str()).bold(),
            range,
            presets.join(", ")
        );
    }
}
