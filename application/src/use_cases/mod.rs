//! Use cases built on top of the logging ports.

pub mod filter_records;

pub use filter_records::{FilteredRecords, RecordQuery};
