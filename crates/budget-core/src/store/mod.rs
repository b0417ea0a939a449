//! Entry store: data model, store trait, and backends.
//!
//! All access to the persisted entry collection goes through the [`Store`]
//! trait. The only shipped backend is [`JsonFileStore`], a single JSON file
//! rewritten wholesale on every mutation.

mod json_file;
mod traits;
mod types;

pub use json_file::JsonFileStore;
pub use traits::Store;
pub use types::{BudgetEntry, EntryPatch};
