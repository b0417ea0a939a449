use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use budget_core::{Period, VERSION};

/// Budget - a personal command-line budget tracker
#[derive(Parser)]
#[command(name = "budget")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file
    #[arg(short, long, global = true, env = "BUDGET_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a budget entry
    Add(AddArgs),

    /// Update an existing entry by title
    Update(UpdateArgs),

    /// Delete every entry with the given title
    Delete(DeleteArgs),

    /// List saved entries
    List(ListArgs),

    /// Show the total expense balance
    Balance(BalanceArgs),
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Title of the entry
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Amount of the entry (signed)
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amount: f64,

    /// Currency of the entry
    #[arg(value_name = "CURRENCY")]
    pub currency: String,

    /// Whether the entry occurs every month (true/false)
    #[arg(value_name = "RECURRING", action = clap::ArgAction::Set)]
    pub recurring: bool,

    /// Date of the entry (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Longer description of the entry
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for the `update` command
#[derive(Args)]
pub struct UpdateArgs {
    /// Title of the entry to be updated
    #[arg(value_name = "ENTRY")]
    pub entry: String,

    /// New title of the entry
    #[arg(long)]
    pub title: Option<String>,

    /// New amount of the entry
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// New currency of the entry
    #[arg(long)]
    pub currency: Option<String>,

    /// New date of the entry (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// New recurring option of the entry
    #[arg(long)]
    pub recurring: Option<bool>,

    /// New description of the entry
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Title of the entry to be deleted
    #[arg(value_name = "ENTRY")]
    pub entry: String,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only list entries from the given month (YYYY-MM)
    #[arg(long, value_name = "YYYY-MM")]
    pub year_month: Option<Period>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `balance` command
#[derive(Args)]
pub struct BalanceArgs {
    /// Currency label for the balance line (display only, no conversion)
    #[arg(long)]
    pub currency: Option<String>,

    /// Only sum entries from the given month (YYYY-MM)
    #[arg(long, value_name = "YYYY-MM")]
    pub year_month: Option<Period>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_add_parses_positionals() {
        let cli = Cli::parse_from([
            "budget", "add", "Rent", "1200", "CAD", "true", "--date", "2021-01-01",
        ]);
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.title, "Rent");
                assert_eq!(args.amount, 1200.0);
                assert_eq!(args.currency, "CAD");
                assert!(args.recurring);
                assert_eq!(
                    args.date,
                    NaiveDate::from_ymd_opt(2021, 1, 1)
                );
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_update_flags_are_optional() {
        let cli = Cli::parse_from(["budget", "update", "Rent", "--amount", "0"]);
        match cli.command {
            Commands::Update(args) => {
                assert_eq!(args.entry, "Rent");
                assert_eq!(args.amount, Some(0.0));
                assert_eq!(args.title, None);
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn test_list_year_month_parses_period() {
        let cli = Cli::parse_from(["budget", "list", "--year-month", "2021-01"]);
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.year_month, Some("2021-01".parse().unwrap()));
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_rejects_bad_period() {
        let result = Cli::try_parse_from(["budget", "list", "--year-month", "2021-13"]);
        assert!(result.is_err());
    }
}
