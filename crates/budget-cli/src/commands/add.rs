use budget_core::{BudgetEntry, Store};

use crate::app::AppContext;
use crate::cli::AddArgs;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;

    let entry = BudgetEntry {
        title: args.title.clone(),
        description: args.description.clone(),
        amount: args.amount,
        currency: args.currency.clone(),
        date: args.date,
        recurring: args.recurring,
    };
    store.save(entry)?;

    if !ctx.quiet() {
        println!("Saved entry \"{}\"", args.title);
    }
    Ok(())
}
