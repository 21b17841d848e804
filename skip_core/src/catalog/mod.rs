//! The skip catalog: the validated collection every query runs over

mod validation;

pub use validation::{ValidationError, ValidationErrorType, ValidationResult};

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use log::{debug, info};
use serde_json::Value;

use crate::{FilterResult, FilterSpec, FilterStats, SkipId, SkipRecord, compute_stats, filter_skips};

/// Defines the errors you might encounter loading a catalog.
#[derive(Debug)]
pub enum CatalogError {
    IoError(PathBuf, io::Error),
    ParseError(String),
    ValidationError(Vec<ValidationError>),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::IoError(path, error) => write!(
                f,
                "Catalog file at {} could not be read: {}",
                path.display(),
                error
            ),
            CatalogError::ParseError(error) => write!(f, "Catalog could not be parsed: {}", error),
            CatalogError::ValidationError(errors) => {
                write!(f, "Catalog has {} invalid entries:", errors.len())?;
                for error in errors {
                    write!(f, "\n  - {}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::IoError(_, error) => Some(error),
            _ => None,
        }
    }
}

/// A validated, ordered collection of skips with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    skips: Vec<SkipRecord>,
}

impl Catalog {
    /// Validates records and builds a catalog, keeping their order.
    pub fn from_records(skips: Vec<SkipRecord>) -> Result<Self, CatalogError> {
        let mut errors = Vec::new();
        let mut seen: HashSet<SkipId> = HashSet::new();

        for skip in &skips {
            if let Err(mut skip_errors) = skip.validate() {
                errors.append(&mut skip_errors);
            }
            if !seen.insert(skip.id) {
                errors.push(ValidationError::duplicate_id(skip.id));
            }
        }

        if !errors.is_empty() {
            return Err(CatalogError::ValidationError(errors));
        }

        debug!("Built catalog with {} skips", skips.len());
        Ok(Self { skips })
    }

    /// Parses a JSON catalog: either an array of skips or `{ "skips": [...] }`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let list = match value {
            Value::Array(_) => value,
            Value::Object(mut object) => object.remove("skips").ok_or_else(|| {
                CatalogError::ParseError("expected an array or an object with 'skips'".to_string())
            })?,
            _ => {
                return Err(CatalogError::ParseError(
                    "expected an array or an object with 'skips'".to_string(),
                ));
            }
        };

        let skips: Vec<SkipRecord> =
            serde_json::from_value(list).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        Self::from_records(skips)
    }

    /// Reads and parses a JSON catalog file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        info!("Loading catalog from {}", path.display());
        let json =
            fs::read_to_string(path).map_err(|e| CatalogError::IoError(path.to_path_buf(), e))?;
        Self::from_json_str(&json)
    }

    pub fn skips(&self) -> &[SkipRecord] {
        &self.skips
    }

    pub fn get(&self, id: SkipId) -> Option<&SkipRecord> {
        self.skips.iter().find(|skip| skip.id == id)
    }

    pub fn len(&self) -> usize {
        self.skips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skips.is_empty()
    }

    /// Filter the whole catalog.
    pub fn filter(&self, spec: &FilterSpec) -> FilterResult<'_> {
        filter_skips(&self.skips, spec)
    }

    /// Statistics over the whole catalog, ignoring any filter.
    pub fn stats(&self) -> FilterStats {
        compute_stats(&self.skips)
    }
}
