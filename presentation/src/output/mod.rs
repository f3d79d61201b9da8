//! Output formatting for decoded records.

pub mod console;
