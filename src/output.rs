//! Result serialization for comparison output

use std::io::Write;

use crate::compare::ComparisonRow;
use crate::error::{BadColumnError, CompareError};

/// Header line for CSV output
pub const CSV_HEADER: &str = "key,file1_value,file2_value";

/// Serialize classified rows as CSV to a sink.
///
/// Emits the fixed three-column header followed by one comma-joined line per
/// row, each CRLF-terminated. Output is always comma-delimited with no
/// quoting, regardless of the delimiter used to parse the inputs.
///
/// All lines are staged in memory and written in one append once the whole
/// row sequence has succeeded; if any row carries an error, the sink is left
/// untouched and the error is returned. Returns the number of data rows
/// written.
pub fn write_comparison_csv<W, I>(sink: &mut W, rows: I) -> Result<usize, CompareError>
where
    W: Write,
    I: IntoIterator<Item = Result<ComparisonRow, BadColumnError>>,
{
    let mut staged = String::from(CSV_HEADER);
    staged.push_str("\r\n");
    let mut count = 0;
    for row in rows {
        let row = row?;
        staged.push_str(&row.key);
        staged.push(',');
        staged.push_str(&row.file1_value);
        staged.push(',');
        staged.push_str(&row.file2_value);
        staged.push_str("\r\n");
        count += 1;
    }
    sink.write_all(staged.as_bytes())?;
    Ok(count)
}

/// Serialize classified rows as a pretty-printed JSON array to a sink.
///
/// Same staging rule as the CSV writer: the rows are fully collected before
/// anything reaches the sink, so a mid-stream error never leaves partial
/// output behind. Returns the number of rows written.
pub fn write_comparison_json<W, I>(sink: &mut W, rows: I) -> Result<usize, CompareError>
where
    W: Write,
    I: IntoIterator<Item = Result<ComparisonRow, BadColumnError>>,
{
    let rows = rows
        .into_iter()
        .collect::<Result<Vec<ComparisonRow>, BadColumnError>>()?;
    serde_json::to_writer_pretty(&mut *sink, &rows)?;
    sink.write_all(b"\n")?;
    Ok(rows.len())
}
