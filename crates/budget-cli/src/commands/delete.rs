use budget_core::Store;

use crate::app::AppContext;
use crate::cli::DeleteArgs;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    store.delete(&args.entry)?;

    if !ctx.quiet() {
        println!("Deleted entry \"{}\"", args.entry);
    }
    Ok(())
}
