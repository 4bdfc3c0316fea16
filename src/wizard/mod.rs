//! Customization wizard: `SelectingBrand -> SelectingDrink -> Customizing`.
//!
//! The wizard owns one transient [`WizardDraft`] for a single add or edit
//! interaction. Every operation that does not apply in the current state is a
//! no-op returning `false`; nothing here raises an error. A successful
//! [`Wizard::save`] consumes the wizard and yields the payload for the store.
mod search;

pub use search::LookupTicket;

use crate::catalog::{
    BrandOptions, BrandRef, Catalog, IceLevel, Size, SugarLevel, CUSTOM_BRAND_NAME,
};
use crate::record::{is_valid_rating, new_record_id, DrinkRecord, RecordPayload};
use crate::suggest::SuggestionGateway;
use search::{filter_popular, merge_suggestions, DrinkSearch};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SelectingBrand,
    SelectingDrink,
    Customizing,
}

/// The record being assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardDraft {
    pub step: Step,
    pub brand: Option<BrandRef>,
    pub drink_name: String,
    pub size: Size,
    pub sugar: SugarLevel,
    pub ice: IceLevel,
    pub toppings: BTreeSet<String>,
    pub rating: u8,
    pub note: String,
    /// Id of the record being edited; `None` when adding.
    pub source_record_id: Option<String>,
    /// Brand name the edited record was saved with.
    pub source_brand_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    draft: WizardDraft,
    search: DrinkSearch,
}

impl Wizard {
    /// Start a fresh add at brand selection.
    pub fn start() -> Self {
        Self {
            draft: WizardDraft {
                step: Step::SelectingBrand,
                brand: None,
                drink_name: String::new(),
                size: Size::Large,
                sugar: SugarLevel::Half,
                ice: IceLevel::Less,
                toppings: BTreeSet::new(),
                rating: 5,
                note: String::new(),
                source_record_id: None,
                source_brand_name: None,
            },
            search: DrinkSearch::default(),
        }
    }

    /// Edit `record`, standing in for its brand with just its id and name.
    pub fn edit(record: &DrinkRecord) -> Self {
        let brand = BrandRef::Named {
            id: record.brand_id.clone(),
            name: record.brand_name.clone(),
        };
        Self::edit_as(record, brand)
    }

    /// Edit `record`, restoring its catalog brand (and the brand's own option
    /// sets) when the brand id still resolves.
    pub fn edit_with_catalog(record: &DrinkRecord, catalog: &Catalog) -> Self {
        match catalog.lookup_brand(&record.brand_id) {
            Some(brand) => Self::edit_as(record, BrandRef::Catalog(brand.clone())),
            None => Self::edit(record),
        }
    }

    fn edit_as(record: &DrinkRecord, brand: BrandRef) -> Self {
        let mut wizard = Self {
            draft: WizardDraft {
                step: Step::Customizing,
                brand: Some(brand),
                drink_name: record.drink_name.clone(),
                size: record.size,
                sugar: record.sugar,
                ice: record.ice,
                toppings: record.toppings.clone(),
                rating: record.rating,
                note: record.note.clone(),
                source_record_id: Some(record.id.clone()),
                source_brand_name: Some(record.brand_name.clone()),
            },
            search: DrinkSearch::default(),
        };
        wizard.correct_size();
        wizard
    }

    pub fn draft(&self) -> &WizardDraft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.draft.step
    }

    pub fn is_edit(&self) -> bool {
        self.draft.source_record_id.is_some()
    }

    /// Choose the brand and move on to drink selection.
    pub fn select_brand(&mut self, brand: impl Into<BrandRef>) -> bool {
        if self.draft.step != Step::SelectingBrand {
            return false;
        }
        let brand = brand.into();
        tracing::debug!(brand = brand.id(), "brand selected");
        self.draft.brand = Some(brand);
        self.draft.drink_name.clear();
        self.search.reset();
        self.correct_size();
        self.enter_drink_step();
        true
    }

    /// Step back one state. Leaving the drink step discards the brand.
    pub fn back(&mut self) -> bool {
        match self.draft.step {
            Step::SelectingBrand => false,
            Step::SelectingDrink => {
                self.draft.brand = None;
                self.search.reset();
                self.draft.step = Step::SelectingBrand;
                true
            }
            Step::Customizing => {
                self.enter_drink_step();
                true
            }
        }
    }

    /// Abandon the draft. Nothing is stored.
    pub fn cancel(self) {
        tracing::debug!(step = ?self.draft.step, "wizard cancelled");
    }

    pub fn set_query(&mut self, query: &str) -> bool {
        if self.draft.step != Step::SelectingDrink {
            return false;
        }
        self.search.query = query.to_string();
        true
    }

    pub fn query(&self) -> &str {
        &self.search.query
    }

    /// Candidate drink names for the current brand and query.
    pub fn drink_suggestions(&self) -> Vec<String> {
        let Some(brand) = self.draft.brand.as_ref() else {
            return Vec::new();
        };
        let local = filter_popular(brand.popular_items(), &self.search.query);
        merge_suggestions(&local, self.search.remote_for_current_query())
    }

    /// Whether a gateway lookup is worth offering: a query is typed and the
    /// brand's own menu has nothing matching it.
    pub fn should_offer_lookup(&self) -> bool {
        let Some(brand) = self.draft.brand.as_ref() else {
            return false;
        };
        self.draft.step == Step::SelectingDrink
            && !self.search.query.trim().is_empty()
            && filter_popular(brand.popular_items(), &self.search.query).is_empty()
    }

    /// Describe a gateway request for the current brand and query.
    pub fn begin_lookup(&self) -> Option<LookupTicket> {
        if self.draft.step != Step::SelectingDrink {
            return None;
        }
        let brand = self.draft.brand.as_ref()?;
        Some(LookupTicket {
            brand_id: brand.id().to_string(),
            brand_name: brand.name().to_string(),
            query: self.search.query.clone(),
            visit: self.search.visit,
        })
    }

    /// Apply gateway results, unless the user has moved on since `ticket`
    /// was issued.
    pub fn apply_lookup(&mut self, ticket: &LookupTicket, names: Vec<String>) -> bool {
        let current = self.draft.brand.as_ref().map(|brand| brand.id());
        let still_current = self.draft.step == Step::SelectingDrink
            && current == Some(ticket.brand_id.as_str())
            && self.search.query == ticket.query
            && self.search.visit == ticket.visit;
        if !still_current {
            tracing::debug!(query = %ticket.query, "discarding stale drink suggestions");
            return false;
        }
        self.search.store_remote(ticket.query.clone(), names);
        true
    }

    /// Ask `gateway` for names matching the current query and apply them.
    pub fn lookup(&mut self, gateway: &dyn SuggestionGateway) -> bool {
        let Some(ticket) = self.begin_lookup() else {
            return false;
        };
        let names = gateway.suggest(ticket.brand_name(), ticket.query());
        self.apply_lookup(&ticket, names)
    }

    /// Take `name` as the drink and move on to customization.
    pub fn pick_drink(&mut self, name: &str) -> bool {
        let name = name.trim();
        if self.draft.step != Step::SelectingDrink || name.is_empty() {
            return false;
        }
        self.draft.drink_name = name.to_string();
        self.draft.step = Step::Customizing;
        true
    }

    /// Take the typed query verbatim (trimmed) as the drink name.
    pub fn commit_query(&mut self) -> bool {
        let query = self.search.query.clone();
        self.pick_drink(&query)
    }

    /// Sizes the current brand offers.
    pub fn available_sizes(&self) -> Vec<Size> {
        self.draft
            .brand
            .as_ref()
            .map(|brand| brand.effective_sizes())
            .unwrap_or_else(crate::catalog::default_sizes)
    }

    /// Toppings the current brand offers.
    pub fn available_toppings(&self) -> Vec<String> {
        self.draft
            .brand
            .as_ref()
            .map(|brand| brand.effective_toppings())
            .unwrap_or_else(crate::catalog::default_toppings)
    }

    pub fn set_size(&mut self, size: Size) -> bool {
        if !self.customizing() || !self.available_sizes().contains(&size) {
            return false;
        }
        self.draft.size = size;
        true
    }

    pub fn set_sugar(&mut self, sugar: SugarLevel) -> bool {
        if !self.customizing() {
            return false;
        }
        self.draft.sugar = sugar;
        true
    }

    pub fn set_ice(&mut self, ice: IceLevel) -> bool {
        if !self.customizing() {
            return false;
        }
        self.draft.ice = ice;
        true
    }

    /// Add or remove a topping. Selected toppings can always be removed;
    /// only toppings the brand offers can be added.
    pub fn toggle_topping(&mut self, topping: &str) -> bool {
        if !self.customizing() {
            return false;
        }
        if self.draft.toppings.remove(topping) {
            return true;
        }
        if !self.available_toppings().iter().any(|t| t == topping) {
            return false;
        }
        self.draft.toppings.insert(topping.to_string())
    }

    pub fn set_rating(&mut self, rating: u8) -> bool {
        if !self.customizing() || !is_valid_rating(rating) {
            return false;
        }
        self.draft.rating = rating;
        true
    }

    /// Free text, stored exactly as given.
    pub fn set_note(&mut self, note: &str) -> bool {
        if !self.customizing() {
            return false;
        }
        self.draft.note = note.to_string();
        true
    }

    /// Finish the draft. Without a brand or a drink name the wizard is handed
    /// back unchanged.
    pub fn save(self) -> Result<RecordPayload, Self> {
        let drink_name = self.draft.drink_name.trim();
        let Some(brand) = self.draft.brand.as_ref() else {
            return Err(self);
        };
        if drink_name.is_empty() {
            return Err(self);
        }
        let brand_name = match &self.draft.source_brand_name {
            Some(original) if brand.is_custom() && brand.name() == CUSTOM_BRAND_NAME => {
                original.clone()
            }
            _ => brand.name().to_string(),
        };
        let id = self
            .draft
            .source_record_id
            .clone()
            .unwrap_or_else(new_record_id);
        Ok(RecordPayload {
            id: Some(id),
            brand_id: brand.id().to_string(),
            brand_name,
            drink_name: drink_name.to_string(),
            size: self.draft.size,
            sugar: self.draft.sugar,
            ice: self.draft.ice,
            toppings: self.draft.toppings.clone(),
            rating: self.draft.rating,
            note: self.draft.note.clone(),
        })
    }

    fn customizing(&self) -> bool {
        self.draft.step == Step::Customizing
    }

    fn enter_drink_step(&mut self) {
        self.draft.step = Step::SelectingDrink;
        self.search.enter();
    }

    /// Keep the draft's size drawable from the current brand's size set.
    fn correct_size(&mut self) {
        let sizes = self.available_sizes();
        if !sizes.contains(&self.draft.size) {
            if let Some(first) = sizes.first() {
                tracing::debug!(from = %self.draft.size, to = %first, "size corrected for brand");
                self.draft.size = *first;
            }
        }
    }
}
