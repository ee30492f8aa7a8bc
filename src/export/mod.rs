//! Export module for Spendwise
//!
//! Expenses can be exported as CSV for spreadsheets.

pub mod csv;

pub use csv::{default_export_filename, expenses_to_csv, export_expenses_csv, CSV_HEADER};
