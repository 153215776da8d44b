//! Configuration module for the expense ledger
//!
//! This module provides configuration management including:
//! - Base/data directory resolution and file locations
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
