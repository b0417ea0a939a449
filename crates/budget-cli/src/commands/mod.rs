//! Command handlers for the Budget CLI.

mod add;
mod balance;
mod delete;
mod list;
mod update;

pub use add::handle_add;
pub use balance::handle_balance;
pub use delete::handle_delete;
pub use list::handle_list;
pub use update::handle_update;
