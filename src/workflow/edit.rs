//! Workflow edit step: reopen a record in the wizard and replace it.
use super::drink::apply_drink_args;
use super::{run_interactive, AppContext};
use crate::cli::EditArgs;
use crate::render::record_line;
use crate::wizard::Wizard;
use anyhow::{anyhow, Result};

pub fn run_edit(ctx: &AppContext, args: &EditArgs) -> Result<()> {
    let mut store = ctx.open_store();
    let record = store.resolve(&args.id)?.clone();
    let mut wizard = Wizard::edit_with_catalog(&record, &ctx.catalog);

    let payload = if args.drink.is_empty() {
        match run_interactive(ctx, wizard)? {
            Some(payload) => payload,
            None => return Ok(()),
        }
    } else {
        apply_drink_args(&mut wizard, &args.drink, &ctx.catalog, Some(&record.drink_name))?;
        wizard
            .save()
            .map_err(|_| anyhow!("a brand and a drink are required"))?
    };

    let updated = store.upsert(payload)?;
    println!("updated {}", record_line(&updated));
    Ok(())
}
