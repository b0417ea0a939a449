//! JSON output formatting for entries.

use budget_core::BudgetEntry;

/// Convert entries to a JSON array for output.
///
/// Entries serialize with their on-disk field names, so `--json` output is
/// interchangeable with the store file format.
pub fn entries_json(entries: &[BudgetEntry]) -> serde_json::Value {
    serde_json::json!(entries)
}
