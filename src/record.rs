//! The persisted tasting record and the payload the wizard hands to the store.
use crate::catalog::{IceLevel, Size, SugarLevel};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lowest and highest star rating a record may carry.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
/// Records rated at least this many stars appear in the favorites view.
pub const FAVORITE_MIN_RATING: u8 = 4;

/// One tasting entry. Field names match the on-disk JSON exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkRecord {
    pub id: String,
    pub brand_id: String,
    /// Brand display name captured when the record was saved.
    pub brand_name: String,
    pub drink_name: String,
    #[serde(default)]
    pub size: Size,
    pub sugar: SugarLevel,
    pub ice: IceLevel,
    #[serde(default)]
    pub toppings: BTreeSet<String>,
    pub rating: u8,
    #[serde(default)]
    pub note: String,
    /// Epoch milliseconds of the last save.
    pub date: i64,
}

/// Everything needed to create or replace a record, minus the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPayload {
    /// Present when replacing an existing record.
    pub id: Option<String>,
    pub brand_id: String,
    pub brand_name: String,
    pub drink_name: String,
    pub size: Size,
    pub sugar: SugarLevel,
    pub ice: IceLevel,
    pub toppings: BTreeSet<String>,
    pub rating: u8,
    pub note: String,
}

pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

impl RecordPayload {
    /// Check the invariants every persisted record must satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.brand_id.trim().is_empty() {
            return Err(anyhow!("record brand id must be non-empty"));
        }
        if self.drink_name.trim().is_empty() {
            return Err(anyhow!("record drink name must be non-empty"));
        }
        if !is_valid_rating(self.rating) {
            return Err(anyhow!(
                "rating must be between {MIN_RATING} and {MAX_RATING} (got {})",
                self.rating
            ));
        }
        Ok(())
    }

    pub(crate) fn into_record(self, id: String, date: i64) -> DrinkRecord {
        DrinkRecord {
            id,
            brand_id: self.brand_id,
            brand_name: self.brand_name,
            drink_name: self.drink_name,
            size: self.size,
            sugar: self.sugar,
            ice: self.ice,
            toppings: self.toppings,
            rating: self.rating,
            note: self.note,
            date,
        }
    }
}

impl DrinkRecord {
    pub fn is_favorite(&self) -> bool {
        self.rating >= FAVORITE_MIN_RATING
    }
}

/// A fresh record identifier.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
