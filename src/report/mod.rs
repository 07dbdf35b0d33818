//! Reporting.
//!
//! Console output for humans watching the run, CSV export for everything
//! downstream.

mod console;
mod csv;

// Re-export public API
pub use self::csv::write_csv;
pub use console::{print_record, print_summary};
