//! Workflow suggest step: query the suggestion gateway directly.
use super::AppContext;
use crate::cli::SuggestArgs;
use anyhow::Result;

pub fn run_suggest(ctx: &AppContext, args: &SuggestArgs) -> Result<()> {
    let brand_name = ctx
        .catalog
        .resolve(&args.brand)
        .map(|brand| brand.name.clone())
        .unwrap_or_else(|| args.brand.trim().to_string());
    let gateway = ctx.gateway();

    if let Some(drink) = args.tip.as_deref() {
        match gateway.customization_tip(&brand_name, drink.trim()) {
            Some(tip) => println!("{tip}"),
            None => eprintln!("no tip available"),
        }
        return Ok(());
    }

    let names = gateway.suggest(&brand_name, args.query.as_deref());
    if names.is_empty() {
        eprintln!("no suggestions (configure a backend in config.json)");
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}
