//! Port definitions (interfaces) for the application layer.
//!
//! Ports define the contracts that adapters must implement.

pub mod entry_writer;
pub mod logger;

pub use entry_writer::EntryWriter;
pub use logger::Logger;
