use std::path::Path;

use serde::Serialize;
use skip_core::{FilterSpec, Page, PageRequest, SkipRecord, paginate};

use super::parse_query_params;
use crate::cli::FilterArgs;
use crate::errors::CliError;
use crate::files::load_catalog;
use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SkipListing<'a> {
    #[serde(flatten)]
    page: &'a Page<&'a &'a SkipRecord>,
    total_count: usize,
    matched_count: usize,
    applied_spec: &'a FilterSpec,
}

/// Lists one page of skips matching the query parameters and filter flags.
///
/// Flags take precedence over the same filter given as a query parameter.
pub fn list_skips(
    catalog_path: &Path,
    filters: &FilterArgs,
    params: &[String],
    page: Option<u32>,
    per_page: Option<u32>,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Listing skips");
    let query = parse_query_params(params)?;
    let catalog = load_catalog(catalog_path)?;

    let spec = filters.apply_to(query.to_filter_spec());
    let default_request = query.page();
    let request = PageRequest::new(
        page.unwrap_or(default_request.page),
        per_page.unwrap_or(default_request.per_page),
    );

    let result = catalog.filter(&spec);
    let page = paginate(&result.matched, request);

    ui::success(&format!(
        "Found {} of {} skips with {} active filters",
        result.matched_count,
        result.total_count,
        spec.active_constraints(),
    ));
    if page.items.is_empty() && result.matched_count > 0 {
        ui::warning(&format!(
            "Page {} is past the last page ({})",
            page.page, page.total_pages
        ));
    }

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_skip_page(&result, &page),
        OutputFormat::Json => ui::json_output(&SkipListing {
            page: &page,
            total_count: result.total_count,
            matched_count: result.matched_count,
            applied_spec: &result.applied_spec,
        }),
    }

    Ok(())
}
