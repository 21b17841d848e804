use std::path::Path;

use skip_core::{Catalog, CatalogError};

use crate::errors::CliError;
use crate::ui;

/// Loads and validates the catalog at `path`, reporting failures to the user.
pub fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    ui::debug(&format!("Loading catalog from {}", path.display()));

    match Catalog::from_file(path) {
        Ok(catalog) => {
            ui::debug(&format!("Loaded {} skips", catalog.len()));
            Ok(catalog)
        }
        Err(CatalogError::IoError(path, e)) => {
            ui::error_with_details(
                &format!("Couldn't read catalog at {}", path.display()),
                &e.to_string(),
            );
            ui::info("Pass --catalog or set SKIPS_CATALOG to point at a catalog file");
            Err(CliError::CatalogError)
        }
        Err(e) => {
            ui::error_with_details("Catalog is invalid", &e.to_string());
            Err(CliError::CatalogError)
        }
    }
}
