//! Join and classification engine for keyed table comparison

use std::io::Write;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::config::{Config, OutputFormat};
use crate::error::{BadColumnError, CompareError};
use crate::index::{self, parse_row, KeyIndex};
use crate::output;

/// Marker emitted when a key exists only in the second input
pub const NOT_FOUND_IN_FILE1: &str = "notFoundInFile1";

/// Marker emitted when a key exists only in the first input
pub const NOT_FOUND_IN_FILE2: &str = "notFoundInFile2";

/// One classified result row: a join key and the comparable value seen in
/// each input. Either value slot may hold a sentinel marker instead of a
/// real field when unmatched reporting is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub key: String,
    pub file1_value: String,
    pub file2_value: String,
}

impl ComparisonRow {
    /// Create a new comparison row
    pub fn new(
        key: impl Into<String>,
        file1_value: impl Into<String>,
        file2_value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            file1_value: file1_value.into(),
            file2_value: file2_value.into(),
        }
    }
}

/// Main comparison engine
pub struct Comparator {
    config: Config,
}

impl Comparator {
    /// Create a new comparator with configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the key index for a line sequence using the configured delimiter.
    ///
    /// Column positions are 1-based. Duplicate keys overwrite silently.
    pub fn build_index<I>(
        &self,
        lines: I,
        key_column: usize,
        comparable_column: usize,
    ) -> Result<KeyIndex, BadColumnError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        index::build_index(lines, key_column, comparable_column, self.config.delimiter)
    }

    /// Compare two line sequences by key.
    ///
    /// The first sequence is fully indexed up front, so a bad column position
    /// in it fails here, before any row exists. The second sequence is only
    /// consumed as the returned [`Comparison`] is driven; a bad column there
    /// surfaces as an `Err` item, after which the iterator is exhausted.
    pub fn compare<I, J>(
        &self,
        file1: I,
        file2: J,
        key_column: usize,
        comparable_column: usize,
    ) -> Result<Comparison<J::IntoIter>, BadColumnError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        let index = self.build_index(file1, key_column, comparable_column)?;
        Ok(Comparison {
            index,
            file2: file2.into_iter(),
            delimiter: self.config.delimiter,
            report_unmatched: self.config.report_unmatched,
            key_column,
            comparable_column,
            state: State::Streaming,
        })
    }

    /// Compare two line sequences and serialize the results to a sink in the
    /// configured output format.
    ///
    /// Output is staged in memory and written only if the whole comparison
    /// succeeds, so the sink never observes partial results. Returns the
    /// number of data rows written.
    pub fn write_results<W, I, J>(
        &self,
        sink: &mut W,
        file1: I,
        file2: J,
        key_column: usize,
        comparable_column: usize,
    ) -> Result<usize, CompareError>
    where
        W: Write,
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        let rows = self.compare(file1, file2, key_column, comparable_column)?;
        match self.config.output_format {
            OutputFormat::Csv => output::write_comparison_csv(sink, rows),
            OutputFormat::Json => output::write_comparison_json(sink, rows),
        }
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Streaming,
    Draining,
    Done,
}

/// Lazy classified-row sequence produced by [`Comparator::compare`].
///
/// Yields rows derived from the second input in source order, then (when
/// unmatched reporting is on) one trailing row per key left in the index, in
/// the first input's insertion order. Probed keys are removed from the index
/// whether or not they produce a row.
#[derive(Debug)]
pub struct Comparison<I> {
    index: KeyIndex,
    file2: I,
    delimiter: char,
    report_unmatched: bool,
    key_column: usize,
    comparable_column: usize,
    state: State,
}

impl<I> Iterator for Comparison<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<ComparisonRow, BadColumnError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Streaming => {
                    let Some(line) = self.file2.next() else {
                        self.state = if self.report_unmatched {
                            State::Draining
                        } else {
                            State::Done
                        };
                        continue;
                    };
                    let line = line.as_ref();
                    if line.is_empty() {
                        continue;
                    }
                    let parsed =
                        parse_row(line, self.delimiter, self.key_column, self.comparable_column);
                    let (key, file2_value) = match parsed {
                        Ok(parsed) => parsed,
                        Err(err) => {
                            self.state = State::Done;
                            return Some(Err(err));
                        }
                    };
                    // shift_remove keeps the remaining keys in insertion
                    // order for the trailing pass
                    match self.index.shift_remove(key.as_str()) {
                        Some(file1_value) if file1_value != file2_value => {
                            return Some(Ok(ComparisonRow {
                                key,
                                file1_value,
                                file2_value,
                            }));
                        }
                        Some(_) => {} // values agree, never reported
                        None if self.report_unmatched => {
                            return Some(Ok(ComparisonRow::new(
                                key,
                                NOT_FOUND_IN_FILE1,
                                file2_value,
                            )));
                        }
                        None => {}
                    }
                }
                State::Draining => match self.index.shift_remove_index(0) {
                    Some((key, file1_value)) => {
                        return Some(Ok(ComparisonRow::new(key, file1_value, NOT_FOUND_IN_FILE2)));
                    }
                    None => self.state = State::Done,
                },
                State::Done => return None,
            }
        }
    }
}

impl<I> FusedIterator for Comparison<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}
