use std::collections::HashSet;

use thiserror::Error;

use crate::core::signature::Signature;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid column type '{entry}': '{character}' is not a digit")]
    NonDigit { entry: String, character: char },
}

/// Parse `--types` shorthand entries into the set of signatures to report.
///
/// Each entry is a contiguous digit string with one digit per alignment row,
/// e.g. `"001"` selects columns where the last row differs from the first
/// two. The shorthand cannot express labels above 9; a column with more than
/// ten distinct bases can simply never match an entry.
///
/// # Errors
///
/// Returns `FilterError::NonDigit` if an entry contains a non-digit
/// character. Validation happens before any alignment input is read.
pub fn parse_type_filters(entries: &[String]) -> Result<HashSet<Signature>, FilterError> {
    let mut accepted = HashSet::new();

    for entry in entries {
        let mut labels = Vec::with_capacity(entry.len());
        for character in entry.chars() {
            let label = character
                .to_digit(10)
                .ok_or_else(|| FilterError::NonDigit {
                    entry: entry.clone(),
                    character,
                })?;
            labels.push(label);
        }
        accepted.insert(Signature(labels));
    }

    Ok(accepted)
}
