use std::path::Path;

use skip_core::compute_stats;

use crate::cli::FilterArgs;
use crate::errors::CliError;
use crate::files::load_catalog;
use crate::ui::{self, OutputFormat};

/// Shows the statistics that populate the filter controls.
///
/// By default these cover the whole catalog, so every option stays
/// selectable. `filtered` narrows them to the skips matching `filters`.
pub fn show_stats(
    catalog_path: &Path,
    filters: &FilterArgs,
    filtered: bool,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Computing catalog statistics");
    let catalog = load_catalog(catalog_path)?;
    let spec = filters.to_filter_spec();

    let stats = if filtered {
        let result = catalog.filter(&spec);
        ui::success(&format!(
            "Computed statistics for {} of {} skips",
            result.matched_count, result.total_count
        ));
        compute_stats(result.matched.iter().copied())
    } else {
        if !spec.is_empty() {
            ui::warning("Filter flags are ignored unless --filtered is given");
        }
        ui::success(&format!("Computed statistics for {} skips", catalog.len()));
        catalog.stats()
    };

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_stats(&stats),
        OutputFormat::Json => ui::json_output(&stats),
    }

    Ok(())
}
