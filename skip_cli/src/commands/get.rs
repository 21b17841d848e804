use std::path::Path;

use serde::Serialize;
use skip_core::{PriceBreakdown, SkipId, SkipRecord};

use crate::errors::CliError;
use crate::files::load_catalog;
use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
struct SkipDetail<'a> {
    #[serde(flatten)]
    skip: &'a SkipRecord,
    price: PriceBreakdown,
}

/// Gets a single skip by ID along with its price breakdown.
pub fn get_skip(catalog_path: &Path, id: u64, output_format: OutputFormat) -> Result<(), CliError> {
    ui::header("Getting skip by ID");
    let catalog = load_catalog(catalog_path)?;

    let Some(skip) = catalog.get(SkipId::new(id)) else {
        ui::error(&format!("Couldn't find skip with ID '{}'", id));
        return Err(CliError::NotFoundError);
    };

    ui::success(&format!("Found skip with ID '{}'", id));
    let price = PriceBreakdown::for_skip(skip);

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_skip_single(skip, &price),
        OutputFormat::Json => ui::json_output(&SkipDetail { skip, price }),
    }

    Ok(())
}
