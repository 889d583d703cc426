//! Report output formatting.
//!
//! - [`csv`] - CSV rendering of a report batch
//! - [`terminal`] - field formatting helpers

mod csv;
mod terminal;

// Re-export public functions
pub use csv::print_report;
pub use terminal::{escape_csv_field, format_field};
