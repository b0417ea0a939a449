use budget_core::Store;

use crate::app::AppContext;
use crate::cli::BalanceArgs;

pub fn handle_balance(ctx: &AppContext, args: &BalanceArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;

    let total = match args.year_month {
        Some(period) => store.total_expense_by_period(period)?,
        None => store.total_expense()?,
    };

    // --currency is a display label only; amounts of differing currencies
    // are summed as raw numbers.
    match args.currency {
        Some(ref currency) => println!("Balance: {:.2} {}", total, currency),
        None => println!("Balance: {:.2}", total),
    }
    Ok(())
}
