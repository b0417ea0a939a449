use std::io::IsTerminal;

use budget_core::Store;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{print_entry_list, OutputMode};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;

    let entries = match args.year_month {
        Some(period) => store.list_by_period(period)?,
        None => store.list()?,
    };

    let mode = OutputMode::resolve(
        args.json,
        args.format.as_deref(),
        std::io::stdout().is_terminal(),
    )?;
    print_entry_list(&entries, mode, ctx.quiet())
}
