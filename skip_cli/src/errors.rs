use std::fmt;

/// Failures that end a command. Details are reported to the user before
/// the error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliError {
    CatalogError,
    InputError,
    NotFoundError,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::CatalogError => write!(f, "Failed to load the skip catalog"),
            CliError::InputError => write!(f, "Invalid command input"),
            CliError::NotFoundError => write!(f, "Requested skip was not found"),
        }
    }
}

impl std::error::Error for CliError {}
