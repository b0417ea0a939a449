//! Store trait definition.
//!
//! The `Store` trait is the seam between the command surface and the backing
//! medium. Swapping the flat file for another backend (embedded database,
//! remote store) requires no caller changes.

use crate::error::Result;
use crate::period::Period;

use super::types::{BudgetEntry, EntryPatch};

/// Entry store interface.
///
/// Every operation is a single load-mutate-store transaction over the full
/// collection. Insertion order is preserved across all operations.
///
/// Missing-store policy: reads treat an absent store as an empty collection;
/// `update` and `delete` return [`crate::BudgetError::NoSavedEntries`]
/// because their target cannot exist.
pub trait Store {
    /// Append an entry to the collection.
    ///
    /// Creates the store on first save. No duplicate-title check is
    /// performed.
    fn save(&self, entry: BudgetEntry) -> Result<()>;

    /// Patch the first entry whose title equals `title`.
    ///
    /// When no entry matches, the collection is rewritten unchanged and no
    /// error is raised.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NoSavedEntries` if the store does not exist.
    fn update(&self, title: &str, patch: &EntryPatch) -> Result<()>;

    /// Remove every entry whose title equals `title`.
    ///
    /// Idempotent once the store exists: deleting an absent title is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NoSavedEntries` if the store does not exist.
    fn delete(&self, title: &str) -> Result<()>;

    /// Return the full collection in insertion order.
    fn list(&self) -> Result<Vec<BudgetEntry>>;

    /// Return the entries belonging to `period`, order preserved.
    ///
    /// Dateless recurring entries match every period.
    fn list_by_period(&self, period: Period) -> Result<Vec<BudgetEntry>> {
        let mut entries = self.list()?;
        entries.retain(|entry| entry.matches_period(period));
        Ok(entries)
    }

    /// Sum the amounts of the full collection.
    ///
    /// Currencies are summed as raw numbers; an empty or absent store sums
    /// to zero.
    fn total_expense(&self) -> Result<f64> {
        Ok(self.list()?.iter().map(|entry| entry.amount).sum())
    }

    /// Sum the amounts of the entries belonging to `period`.
    fn total_expense_by_period(&self, period: Period) -> Result<f64> {
        Ok(self
            .list_by_period(period)?
            .iter()
            .map(|entry| entry.amount)
            .sum())
    }
}
