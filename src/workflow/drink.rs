//! Drive the wizard from command-line flags.
//!
//! Each flag maps onto one wizard operation. A rejected operation becomes an
//! error naming what the brand does offer.
use crate::catalog::{BrandRef, Catalog};
use crate::cli::DrinkArgs;
use crate::render::short_label;
use crate::wizard::{Step, Wizard};
use anyhow::{anyhow, bail, Result};

/// Resolve `--brand` / `--custom-brand` into a brand reference.
pub(crate) fn brand_from_args(args: &DrinkArgs, catalog: &Catalog) -> Result<Option<BrandRef>> {
    if let Some(input) = args.brand.as_deref() {
        let brand = catalog
            .resolve(input)
            .cloned()
            .ok_or_else(|| anyhow!("unknown brand {input:?} (see `teanote brands`)"))?;
        return Ok(Some(BrandRef::Catalog(brand)));
    }
    Ok(args
        .custom_brand
        .as_deref()
        .map(|name| BrandRef::custom(Some(name))))
}

/// Apply every given flag to `wizard`, leaving it at `Customizing`.
///
/// `fallback_drink` is used when a brand is (re)selected without `--drink`.
pub(crate) fn apply_drink_args(
    wizard: &mut Wizard,
    args: &DrinkArgs,
    catalog: &Catalog,
    fallback_drink: Option<&str>,
) -> Result<()> {
    if let Some(brand) = brand_from_args(args, catalog)? {
        while wizard.back() {}
        wizard.select_brand(brand);
    }

    let drink = args.drink.as_deref().or(match wizard.step() {
        Step::Customizing => None,
        _ => fallback_drink,
    });
    if let Some(drink) = drink {
        if wizard.step() == Step::Customizing {
            wizard.back();
        }
        if !wizard.pick_drink(drink) {
            bail!("drink name must be non-empty");
        }
    }
    if wizard.step() != Step::Customizing {
        bail!("--drink is required");
    }

    if let Some(size) = args.size {
        if !wizard.set_size(size) {
            let offered: Vec<&str> = wizard
                .available_sizes()
                .into_iter()
                .map(|size| short_label(size.as_str()))
                .collect();
            bail!(
                "{} is not offered here (choose from {})",
                short_label(size.as_str()),
                offered.join(", ")
            );
        }
    }
    if let Some(sugar) = args.sugar {
        wizard.set_sugar(sugar);
    }
    if let Some(ice) = args.ice {
        wizard.set_ice(ice);
    }
    if !args.toppings.is_empty() {
        replace_toppings(wizard, &args.toppings)?;
    }
    if let Some(rating) = args.rating {
        if !wizard.set_rating(rating) {
            bail!("rating must be between 1 and 5 (got {rating})");
        }
    }
    if let Some(note) = args.note.as_deref() {
        wizard.set_note(note);
    }
    Ok(())
}

fn replace_toppings(wizard: &mut Wizard, toppings: &[String]) -> Result<()> {
    let selected: Vec<String> = wizard.draft().toppings.iter().cloned().collect();
    for topping in &selected {
        wizard.toggle_topping(topping);
    }
    for topping in toppings {
        let topping = topping.trim();
        if wizard.draft().toppings.contains(topping) {
            continue;
        }
        if !wizard.toggle_topping(topping) {
            let offered = wizard.available_toppings();
            if offered.is_empty() {
                bail!("this brand offers no toppings");
            }
            bail!(
                "topping {topping:?} is not offered here (choose from {})",
                offered.join(", ")
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "drink_tests.rs"]
mod tests;
