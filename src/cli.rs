//! CLI argument parsing for the tasting log.
//!
//! The CLI stays thin: every command maps onto one workflow function, and
//! drink options are parsed straight into the catalog enums.
use crate::catalog::{IceLevel, Size, SugarLevel};
use crate::record::{MAX_RATING, MIN_RATING};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "teanote",
    version,
    about = "Tasting log for hand-shaken drinks",
    after_help = "Examples:\n  teanote add\n  teanote add --brand 50lan --drink 珍珠奶茶 --sugar half --ice less --rating 5\n  teanote add --custom-brand 巷口紅茶 --drink 紅茶 --size medium\n  teanote list --view favorites\n  teanote edit 0f8c --rating 3\n  teanote share 0f8c\n  teanote suggest --brand 可不可 --query 烏龍",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Directory holding records.json and config.json
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of <data-dir>/config.json
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
    Add(AddArgs),
    Edit(EditArgs),
    List(ListArgs),
    Share(ShareArgs),
    Remove(RemoveArgs),
    Brands(BrandsArgs),
    Suggest(SuggestArgs),
}

#[derive(Parser, Debug)]
#[command(about = "Write a default config.json")]
pub struct InitArgs {
    /// Overwrite an existing config.json
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Log a drink (interactive unless a brand flag is given)")]
pub struct AddArgs {
    #[command(flatten)]
    pub drink: DrinkArgs,
}

#[derive(Parser, Debug)]
#[command(about = "Edit a logged drink (interactive unless flags are given)")]
pub struct EditArgs {
    /// Record id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub drink: DrinkArgs,
}

/// Drink fields settable from flags.
#[derive(Args, Debug, Clone, Default)]
pub struct DrinkArgs {
    /// Catalog brand, by id or exact name
    #[arg(long, value_name = "BRAND", conflicts_with = "custom_brand")]
    pub brand: Option<String>,

    /// A brand not in the catalog, optionally named
    #[arg(
        long,
        value_name = "NAME",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub custom_brand: Option<String>,

    /// Drink name
    #[arg(long, value_name = "NAME")]
    pub drink: Option<String>,

    /// Cup size: large, medium, bottle (or the full label)
    #[arg(long, value_name = "SIZE", value_parser = <Size as FromStr>::from_str)]
    pub size: Option<Size>,

    /// Sugar level: regular, less, half, quarter, two-point, one-point, none
    #[arg(long, value_name = "LEVEL", value_parser = <SugarLevel as FromStr>::from_str)]
    pub sugar: Option<SugarLevel>,

    /// Ice level: regular, less, half, micro, none, total-none, warm, hot
    #[arg(long, value_name = "LEVEL", value_parser = <IceLevel as FromStr>::from_str)]
    pub ice: Option<IceLevel>,

    /// Topping to include (repeatable); replaces the current toppings
    #[arg(long = "topping", value_name = "NAME")]
    pub toppings: Vec<String>,

    /// Star rating
    #[arg(
        long,
        value_name = "STARS",
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_RATING)..=i64::from(MAX_RATING))
    )]
    pub rating: Option<u8>,

    /// Free-form note
    #[arg(long, value_name = "TEXT")]
    pub note: Option<String>,
}

impl DrinkArgs {
    /// Whether a brand was chosen on the command line.
    pub fn selects_brand(&self) -> bool {
        self.brand.is_some() || self.custom_brand.is_some()
    }

    /// Whether no drink field was given at all.
    pub fn is_empty(&self) -> bool {
        !self.selects_brand()
            && self.drink.is_none()
            && self.size.is_none()
            && self.sugar.is_none()
            && self.ice.is_none()
            && self.toppings.is_empty()
            && self.rating.is_none()
            && self.note.is_none()
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Newest first
    #[default]
    Recent,
    /// Grouped by brand name
    Brand,
    /// Rated four stars or more
    Favorites,
}

#[derive(Parser, Debug)]
#[command(about = "List logged drinks")]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = View::Recent)]
    pub view: View,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Print a shareable summary of a record")]
pub struct ShareArgs {
    /// Record id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Parser, Debug)]
#[command(about = "Delete a record")]
pub struct RemoveArgs {
    /// Record id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Parser, Debug)]
#[command(about = "Search the brand catalog")]
pub struct BrandsArgs {
    /// Substring of the brand name (case-insensitive)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(about = "Ask the suggestion backend for drink names or a tip")]
pub struct SuggestArgs {
    /// Brand id or name; names outside the catalog are used as typed
    #[arg(long, value_name = "BRAND")]
    pub brand: String,

    /// What to look for; omit for popular drinks
    #[arg(long, value_name = "TEXT", conflicts_with = "tip")]
    pub query: Option<String>,

    /// Ask for a sugar/ice tip for this drink instead
    #[arg(long, value_name = "DRINK")]
    pub tip: Option<String>,
}
