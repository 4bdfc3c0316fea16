//! Command workflows.
//!
//! Each command is one small step over the shared [`AppContext`], so the CLI
//! stays thin and the domain modules stay free of I/O policy.
mod add;
mod brands;
mod context;
mod drink;
mod edit;
mod init;
mod list;
mod remove;
mod session;
mod share;
mod suggest;

pub use add::run_add;
pub use brands::run_brands;
pub(crate) use context::AppContext;
pub use edit::run_edit;
pub use init::run_init;
pub use list::run_list;
pub use remove::run_remove;
pub use share::run_share;
pub use suggest::run_suggest;

use crate::record::RecordPayload;
use crate::wizard::Wizard;
use anyhow::Result;
use session::Session;
use std::io;

/// Drive `wizard` from stdin/stdout until it saves or is cancelled.
fn run_interactive(ctx: &AppContext, wizard: Wizard) -> Result<Option<RecordPayload>> {
    let gateway = ctx.gateway();
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), &ctx.catalog, &*gateway).run(wizard)
}
