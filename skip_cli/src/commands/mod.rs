mod categories;
mod get;
mod list;
mod stats;

pub use categories::list_categories;
pub use get::get_skip;
pub use list::list_skips;
pub use stats::show_stats;

use skip_core::QueryParams;
use skip_core::filter::split_assignment;

use crate::errors::CliError;
use crate::ui;

/// Reads `key=value` assignments into URL query state, rejecting anything
/// the listing page wouldn't understand.
pub fn parse_query_params(assignments: &[String]) -> Result<QueryParams, CliError> {
    let mut params = QueryParams::default();

    for assignment in assignments {
        let (key, value) = split_assignment(assignment).map_err(|e| {
            ui::error(&format!("Invalid query parameter: {}", e));
            CliError::InputError
        })?;

        params.parse_pair(key, value).map_err(|e| {
            ui::error(&format!("Invalid query parameter: {}", e));
            CliError::InputError
        })?;
    }

    Ok(params)
}
