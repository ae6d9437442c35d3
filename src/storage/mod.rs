//! Result storage backends.

pub mod csv;

pub use csv::{CsvExporter, CSV_HEADERS};
