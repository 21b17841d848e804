//! Distinct location values offered by the location filters

use std::collections::HashSet;

/// Distinct values in first-seen order. Empty strings are skipped when
/// `skip_empty` is set.
pub fn execute<'a, I>(values: I, skip_empty: bool) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| !(skip_empty && value.is_empty()))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
