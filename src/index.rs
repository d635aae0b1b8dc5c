//! Row parsing and key index construction

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::error::BadColumnError;

/// Insertion-order-preserving map from join key to comparable value.
///
/// Built in one full pass over the first input. Insertion order is what makes
/// the trailing "not found in file 2" rows deterministic.
pub type KeyIndex = IndexMap<String, String, FxBuildHasher>;

/// Validate a 1-based column position against a row's field count
fn check_column(column: usize, field_count: usize) -> Result<(), BadColumnError> {
    if column == 0 || column > field_count {
        return Err(BadColumnError {
            column,
            field_count,
        });
    }
    Ok(())
}

/// Split one line and extract the key and comparable fields.
///
/// Both column positions are validated against this row's actual field count;
/// no quoting or escaping semantics apply to the split.
pub(crate) fn parse_row(
    line: &str,
    delimiter: char,
    key_column: usize,
    comparable_column: usize,
) -> Result<(String, String), BadColumnError> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    check_column(key_column, fields.len())?;
    check_column(comparable_column, fields.len())?;
    Ok((
        fields[key_column - 1].to_string(),
        fields[comparable_column - 1].to_string(),
    ))
}

/// Build a [`KeyIndex`] from a sequence of delimited lines.
///
/// Empty lines are skipped; an empty input yields an empty index. If the same
/// key appears more than once, the last occurrence wins.
pub fn build_index<I>(
    lines: I,
    key_column: usize,
    comparable_column: usize,
    delimiter: char,
) -> Result<KeyIndex, BadColumnError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut index = KeyIndex::default();
    for line in lines {
        let line = line.as_ref();
        if line.is_empty() {
            continue;
        }
        let (key, value) = parse_row(line, delimiter, key_column, comparable_column)?;
        index.insert(key, value);
    }
    Ok(index)
}
