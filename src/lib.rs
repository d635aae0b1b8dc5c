//! csvcompare - Key-based comparison of delimited text tables
//!
//! Compares two sequences of delimited lines by a shared key column and
//! reports, per key, whether a designated comparable column's value differs.
//! The first input is fully indexed in memory; the second is streamed
//! through a lazy classified-row iterator. Values are compared as opaque
//! strings.

pub mod compare;
pub mod config;
pub mod error;
pub mod index;
pub mod output;

pub use compare::{
    Comparator, Comparison, ComparisonRow, NOT_FOUND_IN_FILE1, NOT_FOUND_IN_FILE2,
};
pub use config::{Config, OutputFormat};
pub use error::{BadColumnError, CompareError};
pub use index::KeyIndex;
