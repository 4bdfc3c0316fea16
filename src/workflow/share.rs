use super::AppContext;
use crate::cli::ShareArgs;
use crate::render::share_text;
use anyhow::Result;

/// Print the share summary for one record.
pub fn run_share(ctx: &AppContext, args: &ShareArgs) -> Result<()> {
    let store = ctx.open_store();
    let record = store.resolve(&args.id)?;
    println!("{}", share_text(record));
    Ok(())
}
