//! Workflow brands step: search the catalog.
use super::AppContext;
use crate::catalog::{Brand, BrandOptions, Size};
use crate::cli::BrandsArgs;
use crate::render::brand_block;
use anyhow::{Context, Result};
use serde::Serialize;

/// A brand with its option sets already resolved.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrandListing<'a> {
    id: &'a str,
    name: &'a str,
    color: &'a str,
    popular_items: &'a [String],
    sizes: Vec<Size>,
    toppings: Vec<String>,
}

impl<'a> From<&'a Brand> for BrandListing<'a> {
    fn from(brand: &'a Brand) -> Self {
        Self {
            id: &brand.id,
            name: &brand.name,
            color: &brand.color,
            popular_items: &brand.popular_items,
            sizes: brand.effective_sizes(),
            toppings: brand.effective_toppings(),
        }
    }
}

pub fn run_brands(ctx: &AppContext, args: &BrandsArgs) -> Result<()> {
    let matches = ctx
        .catalog
        .search_brands(args.query.as_deref().unwrap_or_default());
    if args.json {
        let listing: Vec<BrandListing<'_>> =
            matches.iter().map(|brand| BrandListing::from(*brand)).collect();
        let text = serde_json::to_string_pretty(&listing).context("serialize brands")?;
        println!("{text}");
        return Ok(());
    }
    if matches.is_empty() {
        println!("no brand matches");
        return Ok(());
    }
    for brand in matches {
        println!("{}", brand_block(brand));
    }
    Ok(())
}
