//! Budget CLI - a personal command-line budget tracker.
//!
//! This is the command-line interface for Budget. It wires the clap command
//! surface to the core entry store.

mod app;
mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match cli.command {
        Commands::Add(ref args) => commands::handle_add(&ctx, args),
        Commands::Update(ref args) => commands::handle_update(&ctx, args),
        Commands::Delete(ref args) => commands::handle_delete(&ctx, args),
        Commands::List(ref args) => commands::handle_list(&ctx, args),
        Commands::Balance(ref args) => commands::handle_balance(&ctx, args),
    }
}
