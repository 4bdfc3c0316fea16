//! Option catalog: static option sets and the brand registry.
//!
//! Everything here is pure lookup over data fixed at startup. Brands may
//! override the default size and topping sets; the wizard consumes brands
//! through [`BrandOptions`] so catalog entries and name-only stand-ins behave
//! the same way.
mod brands;
mod options;

pub use options::{IceLevel, Size, SugarLevel, COMMON_TOPPINGS};

use serde::{Deserialize, Serialize};

/// Reserved id for a brand typed by the user with no catalog entry.
pub const CUSTOM_BRAND_ID: &str = "custom";
/// Placeholder display name shown for the custom brand until one is typed.
pub const CUSTOM_BRAND_NAME: &str = "其他品牌";

/// A catalog brand and its brand-specific option overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub popular_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_toppings: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_sizes: Option<Vec<Size>>,
}

/// Capabilities the wizard needs from whatever brand it is working with.
pub trait BrandOptions {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn popular_items(&self) -> &[String];
    /// Sizes offered for this brand; never empty.
    fn effective_sizes(&self) -> Vec<Size>;
    /// Toppings offered for this brand; may be empty.
    fn effective_toppings(&self) -> Vec<String>;
}

/// The brand a draft refers to: a full catalog entry, or a minimal stand-in
/// carrying only an id and a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandRef {
    Catalog(Brand),
    Named { id: String, name: String },
}

impl BrandOptions for Brand {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn popular_items(&self) -> &[String] {
        &self.popular_items
    }

    fn effective_sizes(&self) -> Vec<Size> {
        match self.custom_sizes.as_deref() {
            Some(sizes) if !sizes.is_empty() => sizes.to_vec(),
            _ => default_sizes(),
        }
    }

    fn effective_toppings(&self) -> Vec<String> {
        match &self.custom_toppings {
            Some(toppings) => toppings.clone(),
            None => default_toppings(),
        }
    }
}

impl BrandRef {
    /// The custom brand, named by the user or carrying the placeholder name.
    pub fn custom(name: Option<&str>) -> Self {
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(CUSTOM_BRAND_NAME);
        BrandRef::Named {
            id: CUSTOM_BRAND_ID.to_string(),
            name: name.to_string(),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.id() == CUSTOM_BRAND_ID
    }
}

impl BrandOptions for BrandRef {
    fn id(&self) -> &str {
        match self {
            BrandRef::Catalog(brand) => &brand.id,
            BrandRef::Named { id, .. } => id,
        }
    }

    fn name(&self) -> &str {
        match self {
            BrandRef::Catalog(brand) => &brand.name,
            BrandRef::Named { name, .. } => name,
        }
    }

    fn popular_items(&self) -> &[String] {
        match self {
            BrandRef::Catalog(brand) => brand.popular_items(),
            BrandRef::Named { .. } => &[],
        }
    }

    fn effective_sizes(&self) -> Vec<Size> {
        match self {
            BrandRef::Catalog(brand) => brand.effective_sizes(),
            BrandRef::Named { .. } => default_sizes(),
        }
    }

    fn effective_toppings(&self) -> Vec<String> {
        match self {
            BrandRef::Catalog(brand) => brand.effective_toppings(),
            BrandRef::Named { .. } => default_toppings(),
        }
    }
}

impl From<Brand> for BrandRef {
    fn from(brand: Brand) -> Self {
        BrandRef::Catalog(brand)
    }
}

pub fn default_sizes() -> Vec<Size> {
    Size::ALL.to_vec()
}

pub fn default_toppings() -> Vec<String> {
    COMMON_TOPPINGS.iter().map(|t| t.to_string()).collect()
}

/// The brand registry loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    brands: Vec<Brand>,
}

impl Catalog {
    /// The registry shipped with the binary.
    pub fn builtin() -> Self {
        let brands = brands::BUILTIN_BRANDS
            .iter()
            .map(|seed| Brand {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                color: seed.color.to_string(),
                popular_items: seed.items.iter().map(|item| item.to_string()).collect(),
                custom_toppings: seed
                    .toppings
                    .map(|toppings| toppings.iter().map(|t| t.to_string()).collect()),
                custom_sizes: seed.sizes.map(|sizes| sizes.to_vec()),
            })
            .collect();
        Self::from_brands(brands)
    }

    pub fn from_brands(brands: Vec<Brand>) -> Self {
        Self { brands }
    }

    /// Add user-configured brands; an existing id is replaced in place.
    pub fn extend(&mut self, extra: impl IntoIterator<Item = Brand>) {
        for brand in extra {
            match self.brands.iter_mut().find(|b| b.id == brand.id) {
                Some(existing) => *existing = brand,
                None => self.brands.push(brand),
            }
        }
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn lookup_brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|brand| brand.id == id)
    }

    /// Case-insensitive substring match on brand names, catalog order kept.
    pub fn search_brands(&self, query: &str) -> Vec<&Brand> {
        let needle = query.trim().to_lowercase();
        self.brands
            .iter()
            .filter(|brand| brand.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Resolve user input naming a brand: an id first, then an exact name
    /// (ignoring case).
    pub fn resolve(&self, input: &str) -> Option<&Brand> {
        let input = input.trim();
        self.lookup_brand(input).or_else(|| {
            let lowered = input.to_lowercase();
            self.brands
                .iter()
                .find(|brand| brand.name.to_lowercase() == lowered)
        })
    }
}

#[cfg(test)]
mod tests;
