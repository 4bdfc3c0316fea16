//! Workflow add step: run a fresh wizard and store the result.
use super::drink::apply_drink_args;
use super::{run_interactive, AppContext};
use crate::cli::AddArgs;
use crate::render::record_line;
use crate::wizard::Wizard;
use anyhow::{anyhow, bail, Result};

pub fn run_add(ctx: &AppContext, args: &AddArgs) -> Result<()> {
    let payload = if args.drink.selects_brand() {
        let mut wizard = Wizard::start();
        apply_drink_args(&mut wizard, &args.drink, &ctx.catalog, None)?;
        wizard
            .save()
            .map_err(|_| anyhow!("a brand and a drink are required"))?
    } else if !args.drink.is_empty() {
        bail!("--brand or --custom-brand is required when giving drink flags");
    } else {
        match run_interactive(ctx, Wizard::start())? {
            Some(payload) => payload,
            None => return Ok(()),
        }
    };

    let mut store = ctx.open_store();
    let record = store.upsert(payload)?;
    println!("saved {}", record_line(&record));
    Ok(())
}
