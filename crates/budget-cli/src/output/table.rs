//! Table and plain-text output formatting for entries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use budget_core::BudgetEntry;

const HEADERS: [&str; 5] = ["Title", "Amount", "Currency", "Date", "Recurring"];

/// Build display rows for a list of entries.
pub fn entry_rows(entries: &[BudgetEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|entry| {
            vec![
                entry.title.clone(),
                format!("{:.2}", entry.amount),
                entry.currency.clone(),
                entry
                    .date
                    .map(|date| date.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                if entry.recurring { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect()
}

/// Render entries as a bordered table.
pub fn render_table(entries: &[BudgetEntry]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(HEADERS);

    for row in entry_rows(entries) {
        table.add_row(row);
    }

    // Right-align the amount column
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table.to_string()
}

/// Render entries as stable tab-separated lines, one per entry, no header.
pub fn render_plain(entries: &[BudgetEntry]) -> String {
    entry_rows(entries)
        .iter()
        .map(|row| format!("{}\n", row.join("\t")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entries() -> Vec<BudgetEntry> {
        vec![
            BudgetEntry::new("Rent", 1200.0, "CAD", true),
            BudgetEntry::new("Groceries", 250.5, "CAD", false)
                .with_date(NaiveDate::from_ymd_opt(2021, 1, 15).unwrap()),
        ]
    }

    #[test]
    fn test_rows_format_amount_and_date() {
        let rows = entry_rows(&entries());
        assert_eq!(rows[0], ["Rent", "1200.00", "CAD", "-", "yes"]);
        assert_eq!(rows[1], ["Groceries", "250.50", "CAD", "2021-01-15", "no"]);
    }

    #[test]
    fn test_plain_output_is_one_line_per_entry() {
        let plain = render_plain(&entries());
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Rent\t1200.00\tCAD\t-\tyes");
    }

    #[test]
    fn test_table_contains_headers_and_titles() {
        let table = render_table(&entries());
        assert!(table.contains("Title"));
        assert!(table.contains("Rent"));
        assert!(table.contains("Groceries"));
    }

    #[test]
    fn test_plain_output_empty_for_no_entries() {
        assert_eq!(render_plain(&[]), "");
    }
}
