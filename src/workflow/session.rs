//! Line-oriented interactive wizard session.
//!
//! One line of input is one wizard event. The session only renders state and
//! translates lines into wizard operations; all rules live in the wizard.
use crate::catalog::{Brand, BrandOptions, BrandRef, Catalog, IceLevel, Size, SugarLevel};
use crate::record::RecordPayload;
use crate::render::{short_label, stars};
use crate::suggest::SuggestionGateway;
use crate::wizard::{Step, Wizard};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const BRAND_LIST_LIMIT: usize = 20;

/// One customization command typed at the `Customizing` step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CustomizeCommand {
    Size(Size),
    Sugar(SugarLevel),
    Ice(IceLevel),
    Topping(String),
    Rating(u8),
    Note(String),
    Tip,
    Back,
    Save,
    Quit,
}

/// Parse a `Customizing` line such as `sugar half` or `top 珍珠`.
pub(crate) fn parse_customize(line: &str) -> Result<CustomizeCommand, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let command = match verb {
        "size" => CustomizeCommand::Size(rest.parse().map_err(|err| format!("{err}"))?),
        "sugar" => CustomizeCommand::Sugar(rest.parse().map_err(|err| format!("{err}"))?),
        "ice" => CustomizeCommand::Ice(rest.parse().map_err(|err| format!("{err}"))?),
        "top" | "topping" if !rest.is_empty() => CustomizeCommand::Topping(rest.to_string()),
        "rate" | "rating" => CustomizeCommand::Rating(
            rest.parse()
                .map_err(|_| format!("rating must be a number, got {rest:?}"))?,
        ),
        "note" => CustomizeCommand::Note(rest.to_string()),
        "tip" => CustomizeCommand::Tip,
        "<" | "back" => CustomizeCommand::Back,
        "s" | "save" => CustomizeCommand::Save,
        "q" | "quit" => CustomizeCommand::Quit,
        _ => return Err(format!("unknown command {line:?}")),
    };
    Ok(command)
}

pub(crate) struct Session<'a, R, W> {
    input: R,
    output: W,
    catalog: &'a Catalog,
    gateway: &'a dyn SuggestionGateway,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(crate) fn new(
        input: R,
        output: W,
        catalog: &'a Catalog,
        gateway: &'a dyn SuggestionGateway,
    ) -> Self {
        Self {
            input,
            output,
            catalog,
            gateway,
        }
    }

    /// Run `wizard` to completion. `None` means the user cancelled (or input
    /// ended) and nothing should be stored.
    pub(crate) fn run(mut self, wizard: Wizard) -> Result<Option<RecordPayload>> {
        let mut wizard = wizard;
        let mut brand_query = String::new();
        let mut announced = None;
        loop {
            if announced != Some(wizard.step()) {
                self.announce(&wizard, &brand_query)?;
                announced = Some(wizard.step());
            }
            let Some(line) = self.read_line()? else {
                wizard.cancel();
                return Ok(None);
            };
            let line = line.trim();
            if matches!(line, "q" | "quit") {
                wizard.cancel();
                writeln!(self.output, "cancelled").context("write session output")?;
                return Ok(None);
            }
            match wizard.step() {
                Step::SelectingBrand => {
                    if self.on_brand_line(&mut wizard, &mut brand_query, line)? {
                        announced = None;
                    }
                }
                Step::SelectingDrink => self.on_drink_line(&mut wizard, line)?,
                Step::Customizing => match parse_customize(line) {
                    Ok(CustomizeCommand::Save) => match wizard.save() {
                        Ok(payload) => return Ok(Some(payload)),
                        Err(unsaved) => {
                            wizard = unsaved;
                            self.say("a brand and a drink are required before saving")?;
                        }
                    },
                    Ok(command) => self.on_customize(&mut wizard, command)?,
                    Err(message) => self.say(&message)?,
                },
            }
        }
    }

    fn announce(&mut self, wizard: &Wizard, brand_query: &str) -> Result<()> {
        match wizard.step() {
            Step::SelectingBrand => {
                self.show_brands(brand_query)?;
                self.say("brand: type to search, a number to pick, `+name` for another shop, `q` to quit")
            }
            Step::SelectingDrink => {
                self.show_drinks(wizard)?;
                self.say("drink: type to filter, a number to pick, `=` to use what you typed, `?` to look online, `<` back")
            }
            Step::Customizing => {
                if wizard.is_edit() {
                    self.say("editing a saved record; `s` replaces it")?;
                }
                self.show_draft(wizard)?;
                self.say("customize: size|sugar|ice <key>, top <name>, rate <1-5>, note <text>, tip, `<` back, `s` save")
            }
        }
    }

    /// Returns true when the listing should be redrawn.
    fn on_brand_line(&mut self, wizard: &mut Wizard, query: &mut String, line: &str) -> Result<bool> {
        if let Some(name) = line.strip_prefix('+') {
            wizard.select_brand(BrandRef::custom(Some(name)));
            return Ok(false);
        }
        let matches = self.catalog.search_brands(query);
        let shown = &matches[..matches.len().min(BRAND_LIST_LIMIT)];
        if let Some(brand) = pick_numbered(shown, line) {
            let brand: Brand = (*brand).clone();
            wizard.select_brand(brand);
            return Ok(false);
        }
        *query = line.to_string();
        let matches = self.catalog.search_brands(query);
        if let [only] = matches.as_slice() {
            let brand: Brand = (*only).clone();
            wizard.select_brand(brand);
            return Ok(false);
        }
        if matches.is_empty() {
            self.say(&format!("no brand matches {line:?}; `+{line}` logs it as another shop"))?;
        }
        Ok(true)
    }

    fn on_drink_line(&mut self, wizard: &mut Wizard, line: &str) -> Result<()> {
        match line {
            "<" | "back" => {
                wizard.back();
            }
            "=" => {
                if !wizard.commit_query() {
                    self.say("type a drink name first")?;
                }
            }
            "?" => {
                if wizard.lookup(self.gateway) {
                    let found = wizard.drink_suggestions();
                    if found.is_empty() {
                        self.say("no suggestions found")?;
                    } else {
                        self.show_drinks(wizard)?;
                    }
                }
            }
            _ => {
                let suggestions = wizard.drink_suggestions();
                if let Some(name) = pick_numbered(&suggestions, line) {
                    let name = name.clone();
                    wizard.pick_drink(&name);
                    return Ok(());
                }
                wizard.set_query(line);
                self.show_drinks(wizard)?;
                if wizard.should_offer_lookup() {
                    self.say("nothing on the usual menu; `?` to look online or `=` to use it as typed")?;
                }
            }
        }
        Ok(())
    }

    fn on_customize(&mut self, wizard: &mut Wizard, command: CustomizeCommand) -> Result<()> {
        let accepted = match command {
            CustomizeCommand::Size(size) => wizard.set_size(size),
            CustomizeCommand::Sugar(sugar) => wizard.set_sugar(sugar),
            CustomizeCommand::Ice(ice) => wizard.set_ice(ice),
            CustomizeCommand::Topping(topping) => wizard.toggle_topping(&topping),
            CustomizeCommand::Rating(rating) => wizard.set_rating(rating),
            CustomizeCommand::Note(note) => wizard.set_note(&note),
            CustomizeCommand::Back => wizard.back(),
            CustomizeCommand::Tip => {
                return self.show_tip(wizard);
            }
            CustomizeCommand::Save | CustomizeCommand::Quit => true,
        };
        if !accepted {
            return self.say("not available for this brand");
        }
        if wizard.step() == Step::Customizing {
            self.show_draft(wizard)?;
        }
        Ok(())
    }

    fn show_tip(&mut self, wizard: &Wizard) -> Result<()> {
        let draft = wizard.draft();
        let Some(brand) = draft.brand.as_ref() else {
            return Ok(());
        };
        match self.gateway.customization_tip(brand.name(), &draft.drink_name) {
            Some(tip) => self.say(&format!("tip: {tip}")),
            None => self.say("no tip available"),
        }
    }

    fn show_brands(&mut self, query: &str) -> Result<()> {
        let matches = self.catalog.search_brands(query);
        for (index, brand) in matches.iter().take(BRAND_LIST_LIMIT).enumerate() {
            writeln!(self.output, "{:>3}. {}", index + 1, brand.name)
                .context("write session output")?;
        }
        if matches.len() > BRAND_LIST_LIMIT {
            writeln!(
                self.output,
                "     … {} more; type to narrow",
                matches.len() - BRAND_LIST_LIMIT
            )
            .context("write session output")?;
        }
        Ok(())
    }

    fn show_drinks(&mut self, wizard: &Wizard) -> Result<()> {
        let brand = wizard
            .draft()
            .brand
            .as_ref()
            .map(|brand| brand.name().to_string())
            .unwrap_or_default();
        writeln!(self.output, "【{brand}】 query: {:?}", wizard.query())
            .context("write session output")?;
        for (index, name) in wizard.drink_suggestions().iter().enumerate() {
            writeln!(self.output, "{:>3}. {name}", index + 1).context("write session output")?;
        }
        Ok(())
    }

    fn show_draft(&mut self, wizard: &Wizard) -> Result<()> {
        let draft = wizard.draft();
        let brand = draft
            .brand
            .as_ref()
            .map(|brand| brand.name().to_string())
            .unwrap_or_default();
        let sizes: Vec<&str> = wizard
            .available_sizes()
            .into_iter()
            .map(|size| short_label(size.as_str()))
            .collect();
        let toppings: Vec<&str> = draft.toppings.iter().map(String::as_str).collect();
        writeln!(self.output, "【{brand}】{}", draft.drink_name).context("write session output")?;
        writeln!(
            self.output,
            "  size {} (of {})  sugar {}  ice {}",
            short_label(draft.size.as_str()),
            sizes.join("/"),
            draft.sugar,
            draft.ice
        )
        .context("write session output")?;
        writeln!(
            self.output,
            "  toppings [{}] of {}",
            toppings.join(", "),
            wizard.available_toppings().join(", ")
        )
        .context("write session output")?;
        writeln!(self.output, "  rating {}  note {:?}", stars(draft.rating), draft.note)
            .context("write session output")?;
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("write session output")
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "> ").context("write session prompt")?;
        self.output.flush().context("flush session output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("read session input")?;
        Ok((read > 0).then_some(line))
    }
}

/// The entry a 1-based number picks out of `items`.
fn pick_numbered<'t, T>(items: &'t [T], line: &str) -> Option<&'t T> {
    let index: usize = line.trim().parse().ok()?;
    index.checked_sub(1).and_then(|index| items.get(index))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
