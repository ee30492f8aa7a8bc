//! Configuration module for Spendwise
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendwisePaths;
pub use settings::Settings;
