//! Record store: owns the collection, upserts by id, and computes the
//! derived views on read.
//!
//! The full collection is written back through the storage port after every
//! mutation. A mutation is committed in memory only once that write succeeds,
//! so a failed save leaves both the store and the backend untouched.
mod storage;

pub use storage::{FileStorage, StoragePort};

use crate::record::{new_record_id, DrinkRecord, RecordPayload};
use crate::util::now_epoch_ms;
use anyhow::{anyhow, Context, Result};
use std::collections::BTreeMap;

/// Source of save timestamps.
pub trait Clock {
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        now_epoch_ms()
    }
}

pub struct RecordStore<S, C = SystemClock> {
    records: Vec<DrinkRecord>,
    storage: S,
    clock: C,
}

impl<S: StoragePort> RecordStore<S, SystemClock> {
    /// Load the collection from `storage`; never fails.
    pub fn open(storage: S) -> Self {
        Self::open_with_clock(storage, SystemClock)
    }
}

impl<S: StoragePort, C: Clock> RecordStore<S, C> {
    pub fn open_with_clock(mut storage: S, clock: C) -> Self {
        let records = load_records(&mut storage);
        tracing::debug!(records = records.len(), "record store opened");
        Self {
            records,
            storage,
            clock,
        }
    }

    /// Create or replace one record. The saved record always carries the
    /// current time as its date, on edits as well as on creation.
    pub fn upsert(&mut self, payload: RecordPayload) -> Result<DrinkRecord> {
        payload.validate()?;
        let id = match payload.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.fresh_id(),
        };
        let record = payload.into_record(id, self.clock.now_epoch_ms());

        let mut next = self.records.clone();
        let replaced = match next.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => {
                *existing = record.clone();
                true
            }
            None => {
                next.push(record.clone());
                false
            }
        };
        self.persist(&next)?;
        self.records = next;
        tracing::info!(id = %record.id, replaced, "record saved");
        Ok(record)
    }

    /// Delete a record by id, returning it when it existed.
    pub fn remove(&mut self, id: &str) -> Result<Option<DrinkRecord>> {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            return Ok(None);
        };
        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.persist(&next)?;
        self.records = next;
        tracing::info!(id = %removed.id, "record removed");
        Ok(Some(removed))
    }

    pub fn get(&self, id: &str) -> Option<&DrinkRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Find a record by exact id or by a prefix matching exactly one id.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<&DrinkRecord> {
        let needle = id_or_prefix.trim();
        if needle.is_empty() {
            return Err(anyhow!("record id must be non-empty"));
        }
        if let Some(record) = self.get(needle) {
            return Ok(record);
        }
        let mut matches = self
            .records
            .iter()
            .filter(|record| record.id.starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record),
            (None, _) => Err(anyhow!("no record with id {needle:?}")),
            (Some(_), Some(_)) => Err(anyhow!("record id prefix {needle:?} is ambiguous")),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, newest first. Equal dates keep collection order.
    pub fn recency_view(&self) -> Vec<&DrinkRecord> {
        let mut sorted: Vec<&DrinkRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Records grouped by brand display name, groups in lexicographic order,
    /// newest first within each group.
    pub fn brand_grouped_view(&self) -> BTreeMap<String, Vec<&DrinkRecord>> {
        let mut groups: BTreeMap<String, Vec<&DrinkRecord>> = BTreeMap::new();
        for record in self.recency_view() {
            groups
                .entry(record.brand_name.clone())
                .or_default()
                .push(record);
        }
        groups
    }

    /// Highly rated records, newest first.
    pub fn favorites_view(&self) -> Vec<&DrinkRecord> {
        self.recency_view()
            .into_iter()
            .filter(|record| record.is_favorite())
            .collect()
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = new_record_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self, records: &[DrinkRecord]) -> Result<()> {
        let text = serde_json::to_string_pretty(records).context("serialize records")?;
        self.storage.save(&text).context("save records")
    }
}

fn load_records<S: StoragePort>(storage: &mut S) -> Vec<DrinkRecord> {
    let raw = match storage.load() {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "records unreadable; starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<DrinkRecord>>(&raw) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "records failed to parse; starting empty");
            if let Err(err) = storage.preserve_unreadable(&raw) {
                tracing::warn!(error = %format!("{err:#}"), "could not keep unreadable records");
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
impl<S, C> RecordStore<S, C> {
    pub fn records(&self) -> &[DrinkRecord] {
        &self.records
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests;
