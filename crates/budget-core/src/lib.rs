//! # Budget Core
//!
//! Core library for Budget - a personal command-line budget tracker backed by
//! a single JSON file on local disk.
//!
//! This crate provides the entry data model, the store abstraction, and the
//! flat-file store implementation independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **store**: Store trait and the JSON flat-file implementation
//! - **period**: Year-month periods for date-based filtering
//! - **error**: Error types shared by all core operations
//! - **fs**: Atomic full-file replacement utilities

pub mod error;
pub mod fs;
pub mod period;
pub mod store;

pub use error::{BudgetError, Result};
pub use period::Period;
pub use store::{BudgetEntry, EntryPatch, JsonFileStore, Store};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
