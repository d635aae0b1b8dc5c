//! Error types for the comparison engine

use thiserror::Error;

/// A requested 1-based column position does not exist in a row's field list.
///
/// Raised while indexing the first input or while streaming the second; the
/// first bad row aborts the whole comparison. Column positions are 1-based,
/// so position 0 is out of range by definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column {column} is out of range for a row with {field_count} field(s)")]
pub struct BadColumnError {
    /// The offending 1-based column position
    pub column: usize,
    /// Number of fields the row actually split into
    pub field_count: usize,
}

/// Errors surfaced by the result serializers
#[derive(Debug, Error)]
pub enum CompareError {
    #[error(transparent)]
    BadColumn(#[from] BadColumnError),

    #[error("failed to write comparison output")]
    Io(#[from] std::io::Error),

    #[error("failed to encode comparison output as JSON")]
    Json(#[from] serde_json::Error),
}
