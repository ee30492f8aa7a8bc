//! Spendwise - terminal personal finance tracker
//!
//! This library provides the core of the Spendwise application: recording
//! expenses, income, monthly category budgets and savings goals, and the
//! aggregations computed over them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, income, budgets, savings goals)
//! - `storage`: Persisted collections over a key-value store
//! - `reports`: Summaries, filters, budget status and planning figures
//! - `export`: CSV export
//! - `cli`, `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwise::config::{paths::SpendwisePaths, settings::Settings};
//! use spendwise::storage::Storage;
//!
//! let paths = SpendwisePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths)?;
//! let summary = spendwise::reports::summarize_now(storage.expenses.all());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{SpendwiseError, SpendwiseResult};
