//! `teanote`: a tasting log for hand-shaken drinks.
//!
//! Records are kept in `records.json` under the data directory; every command
//! loads the collection, applies at most one change and writes it back.
mod catalog;
mod cli;
mod config;
mod paths;
mod record;
mod render;
mod store;
mod suggest;
mod util;
mod wizard;
mod workflow;

use anyhow::Result;
use clap::Parser;
use cli::{Command, RootArgs};
use tracing_subscriber::EnvFilter;

/// Log filter directives, e.g. `TEANOTE_LOG=debug`.
const LOG_ENV: &str = "TEANOTE_LOG";

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.global.verbose);

    if let Command::Init(init) = &args.command {
        return workflow::run_init(&args.global, init);
    }
    let ctx = workflow::AppContext::load(&args.global)?;
    match &args.command {
        Command::Init(_) => Ok(()),
        Command::Add(add) => workflow::run_add(&ctx, add),
        Command::Edit(edit) => workflow::run_edit(&ctx, edit),
        Command::List(list) => workflow::run_list(&ctx, list),
        Command::Share(share) => workflow::run_share(&ctx, share),
        Command::Remove(remove) => workflow::run_remove(&ctx, remove),
        Command::Brands(brands) => workflow::run_brands(&ctx, brands),
        Command::Suggest(suggest) => workflow::run_suggest(&ctx, suggest),
    }
}

/// Structured logs go to stderr so stdout stays clean for command output.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
