use budget_core::{EntryPatch, Store};

use crate::app::AppContext;
use crate::cli::UpdateArgs;

pub fn handle_update(ctx: &AppContext, args: &UpdateArgs) -> anyhow::Result<()> {
    let patch = EntryPatch {
        title: args.title.clone(),
        description: args.description.clone(),
        amount: args.amount,
        currency: args.currency.clone(),
        date: args.date,
        recurring: args.recurring,
    };
    if patch.is_empty() {
        return Err(anyhow::anyhow!(
            "Nothing to update. Pass at least one of --title, --amount, --currency, --date, --recurring, --description."
        ));
    }

    let store = ctx.store()?;
    store.update(&args.entry, &patch)?;

    if !ctx.quiet() {
        println!("Updated entry \"{}\"", args.entry);
    }
    Ok(())
}
