//! Output formatting helpers for the CLI.
//!
//! Entries render as a table on a TTY, as stable tab-separated lines for
//! pipes and scripts, or as JSON when `--json` is given.

mod json;
mod table;

pub use json::entries_json;
pub use table::{entry_rows, render_plain, render_table};

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Tab-separated lines, stable for logs and scripts
    #[default]
    Plain,
    /// Bordered table (TTY only)
    Table,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` overrides everything; `--format` forces a mode; otherwise a
    /// table is used on a TTY and plain output elsewhere.
    pub fn resolve(json_flag: bool, format_flag: Option<&str>, is_tty: bool) -> anyhow::Result<Self> {
        if json_flag {
            return Ok(Self::Json);
        }
        match format_flag {
            Some("plain") => Ok(Self::Plain),
            Some("table") => Ok(Self::Table),
            Some(other) => Err(anyhow::anyhow!(
                "Unknown format \"{}\" (expected table or plain)",
                other
            )),
            None => {
                if is_tty {
                    Ok(Self::Table)
                } else {
                    Ok(Self::Plain)
                }
            }
        }
    }
}

/// Print a list of entries in the given mode.
pub fn print_entry_list(
    entries: &[budget_core::BudgetEntry],
    mode: OutputMode,
    quiet: bool,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&entries_json(entries))?);
        }
        OutputMode::Plain => {
            print!("{}", render_plain(entries));
        }
        OutputMode::Table => {
            if entries.is_empty() {
                if !quiet {
                    println!("No entries.");
                }
                return Ok(());
            }
            println!("{}", render_table(entries));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_is_exclusive() {
        let mode = OutputMode::resolve(true, Some("table"), true).unwrap();
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_format_flag_forces_mode() {
        assert_eq!(
            OutputMode::resolve(false, Some("plain"), true).unwrap(),
            OutputMode::Plain
        );
        assert_eq!(
            OutputMode::resolve(false, Some("table"), false).unwrap(),
            OutputMode::Table
        );
    }

    #[test]
    fn test_tty_defaults_to_table() {
        assert_eq!(
            OutputMode::resolve(false, None, true).unwrap(),
            OutputMode::Table
        );
        assert_eq!(
            OutputMode::resolve(false, None, false).unwrap(),
            OutputMode::Plain
        );
    }

    #[test]
    fn test_unknown_format_errors() {
        assert!(OutputMode::resolve(false, Some("yaml"), true).is_err());
    }
}
