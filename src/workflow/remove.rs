use super::AppContext;
use crate::cli::RemoveArgs;
use crate::render::record_line;
use anyhow::Result;

/// Delete one record, resolved by id prefix.
pub fn run_remove(ctx: &AppContext, args: &RemoveArgs) -> Result<()> {
    let mut store = ctx.open_store();
    let id = store.resolve(&args.id)?.id.clone();
    if let Some(removed) = store.remove(&id)? {
        println!("removed {}", record_line(&removed));
    }
    Ok(())
}
