use super::*;
use crate::catalog::{IceLevel, Size, SugarLevel};
use std::cell::Cell;
use std::collections::BTreeSet;

#[derive(Default)]
struct MemoryStorage {
    data: Option<String>,
    fail_saves: bool,
    saves: usize,
    preserved: Option<String>,
}

impl StoragePort for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.data.clone())
    }

    fn save(&mut self, serialized: &str) -> Result<()> {
        if self.fail_saves {
            return Err(anyhow!("disk full"));
        }
        self.saves += 1;
        self.data = Some(serialized.to_string());
        Ok(())
    }

    fn preserve_unreadable(&mut self, raw: &str) -> Result<()> {
        self.preserved = Some(raw.to_string());
        Ok(())
    }
}

/// Hands out strictly increasing timestamps, one per call.
struct TickClock(Cell<i64>);

impl TickClock {
    fn starting_at(ms: i64) -> Self {
        Self(Cell::new(ms))
    }
}

impl Clock for TickClock {
    fn now_epoch_ms(&self) -> i64 {
        let now = self.0.get();
        self.0.set(now + 1000);
        now
    }
}

fn store() -> RecordStore<MemoryStorage, TickClock> {
    RecordStore::open_with_clock(MemoryStorage::default(), TickClock::starting_at(1_700_000_000_000))
}

fn payload(brand: &str, drink: &str, rating: u8) -> RecordPayload {
    RecordPayload {
        id: None,
        brand_id: brand.to_lowercase(),
        brand_name: brand.to_string(),
        drink_name: drink.to_string(),
        size: Size::Large,
        sugar: SugarLevel::Half,
        ice: IceLevel::Less,
        toppings: BTreeSet::new(),
        rating,
        note: String::new(),
    }
}

#[test]
fn empty_store_has_empty_views() {
    let store = store();
    assert!(store.is_empty());
    assert!(store.recency_view().is_empty());
    assert!(store.brand_grouped_view().is_empty());
    assert!(store.favorites_view().is_empty());
}

#[test]
fn first_favorite_record_shows_up_everywhere() {
    let mut store = store();
    let saved = store
        .upsert(payload("50嵐", "珍珠奶茶", 5))
        .expect("save record");

    let recent = store.recency_view();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0], &saved);
    assert_eq!(store.favorites_view(), vec![&saved]);
}

#[test]
fn fresh_upsert_adds_one_record_with_unused_id() {
    let mut store = store();
    let first = store.upsert(payload("50嵐", "奶茶", 3)).expect("save first");
    let before = store.len();
    let second = store.upsert(payload("50嵐", "紅茶", 3)).expect("save second");

    assert_eq!(store.len(), before + 1);
    assert_ne!(first.id, second.id);
    assert!(!second.id.is_empty());
    assert_eq!(store.storage().saves, 2);
}

#[test]
fn upsert_with_existing_id_replaces_that_record_only() {
    let mut store = store();
    let keep = store.upsert(payload("CoCo都可", "珍珠奶茶", 4)).expect("save keep");
    let target = store.upsert(payload("50嵐", "奶茶", 2)).expect("save target");

    let mut edit = payload("50嵐", "四季春青茶", 5);
    edit.id = Some(target.id.clone());
    edit.note = "回甘".to_string();
    let updated = store.upsert(edit).expect("update");

    assert_eq!(store.len(), 2);
    assert_eq!(updated.id, target.id);
    assert_eq!(store.get(&target.id), Some(&updated));
    assert_eq!(updated.drink_name, "四季春青茶");
    assert_eq!(store.get(&keep.id), Some(&keep));
}

#[test]
fn editing_resets_the_date_to_save_time() {
    let mut store = store();
    let original = store.upsert(payload("50嵐", "奶茶", 3)).expect("save");
    let mut edit = payload("50嵐", "奶茶", 4);
    edit.id = Some(original.id.clone());
    let updated = store.upsert(edit).expect("update");
    assert!(updated.date > original.date);
}

#[test]
fn unknown_payload_id_is_inserted_under_that_id() {
    let mut store = store();
    let mut orphan = payload("50嵐", "奶茶", 3);
    orphan.id = Some("restored-id".to_string());
    let saved = store.upsert(orphan).expect("save");
    assert_eq!(saved.id, "restored-id");
    assert_eq!(store.len(), 1);
}

#[test]
fn invalid_payloads_are_rejected_without_mutation() {
    let mut store = store();
    assert!(store.upsert(payload("50嵐", "   ", 3)).is_err());
    assert!(store.upsert(payload("", "奶茶", 3)).is_err());
    assert!(store.upsert(payload("50嵐", "奶茶", 0)).is_err());
    assert!(store.upsert(payload("50嵐", "奶茶", 6)).is_err());
    assert!(store.is_empty());
    assert_eq!(store.storage().saves, 0);
}

#[test]
fn failed_save_leaves_store_unchanged() {
    let mut store = store();
    let kept = store.upsert(payload("50嵐", "奶茶", 3)).expect("save");
    store.storage.fail_saves = true;

    assert!(store.upsert(payload("50嵐", "紅茶", 3)).is_err());
    let mut edit = payload("50嵐", "綠茶", 1);
    edit.id = Some(kept.id.clone());
    assert!(store.upsert(edit).is_err());
    assert!(store.remove(&kept.id).is_err());

    assert_eq!(store.records(), std::slice::from_ref(&kept));
}

#[test]
fn recency_view_is_sorted_newest_first() {
    let mut store = store();
    for drink in ["a", "b", "c", "d"] {
        store.upsert(payload("50嵐", drink, 3)).expect("save");
    }
    let dates: Vec<i64> = store.recency_view().iter().map(|r| r.date).collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(store.recency_view()[0].drink_name, "d");
}

#[test]
fn recency_view_keeps_collection_order_for_equal_dates() {
    let records: Vec<DrinkRecord> = ["x", "y", "z"]
        .iter()
        .map(|id| payload("50嵐", id, 3).into_record(id.to_string(), 42))
        .collect();
    let storage = MemoryStorage {
        data: Some(serde_json::to_string(&records).expect("serialize")),
        ..MemoryStorage::default()
    };
    let store = RecordStore::open_with_clock(storage, TickClock::starting_at(0));
    let ids: Vec<&str> = store.recency_view().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["x", "y", "z"]);
}

#[test]
fn brand_groups_are_lexicographic_and_recent_first() {
    let mut store = store();
    let older = store.upsert(payload("50嵐", "奶茶", 3)).expect("save");
    let coco = store.upsert(payload("CoCo都可", "珍珠奶茶", 4)).expect("save");
    let newer = store.upsert(payload("50嵐", "紅茶", 5)).expect("save");

    let groups = store.brand_grouped_view();
    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["50嵐", "CoCo都可"]);
    assert_eq!(groups["50嵐"], vec![&newer, &older]);
    assert_eq!(groups["CoCo都可"], vec![&coco]);
    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, store.len());
}

#[test]
fn favorites_are_the_high_rated_subset_in_recency_order() {
    let mut store = store();
    for (drink, rating) in [("a", 5), ("b", 3), ("c", 4), ("d", 1), ("e", 4)] {
        store.upsert(payload("50嵐", drink, rating)).expect("save");
    }
    let expected: Vec<&DrinkRecord> = store
        .recency_view()
        .into_iter()
        .filter(|r| r.rating >= 4)
        .collect();
    let favorites = store.favorites_view();
    assert_eq!(favorites, expected);
    let names: Vec<&str> = favorites.iter().map(|r| r.drink_name.as_str()).collect();
    assert_eq!(names, vec!["e", "c", "a"]);
}

#[test]
fn saved_collection_reloads_field_for_field() {
    let mut store = store();
    let mut rich = payload("麻古茶坊", "芝芝葡萄果粒", 5);
    rich.size = Size::Bottle;
    rich.sugar = SugarLevel::None;
    rich.ice = IceLevel::Hot;
    rich.toppings = ["波霸", "芝芝(奶蓋)"].iter().map(|t| t.to_string()).collect();
    rich.note = "很濃".to_string();
    store.upsert(rich).expect("save rich");
    store.upsert(payload("50嵐", "奶茶", 2)).expect("save plain");

    let storage = MemoryStorage {
        data: store.storage().data.clone(),
        ..MemoryStorage::default()
    };
    let reloaded = RecordStore::open_with_clock(storage, TickClock::starting_at(0));
    assert_eq!(reloaded.records(), store.records());
}

#[test]
fn persisted_json_uses_exact_field_names_and_display_strings() {
    let mut store = store();
    store.upsert(payload("50嵐", "奶茶", 3)).expect("save");
    let raw = store.storage().data.clone().expect("saved data");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let record = &value[0];
    for field in [
        "id", "brandId", "brandName", "drinkName", "size", "sugar", "ice", "toppings", "rating",
        "note", "date",
    ] {
        assert!(record.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(record["sugar"], "半糖 (50%)");
    assert_eq!(record["size"], "大杯 (L)");
    assert!(record["date"].is_i64());
}

#[test]
fn corrupt_data_starts_empty_and_is_preserved() {
    let storage = MemoryStorage {
        data: Some("{not json".to_string()),
        ..MemoryStorage::default()
    };
    let mut store = RecordStore::open_with_clock(storage, TickClock::starting_at(0));
    assert!(store.is_empty());
    assert_eq!(store.storage().preserved.as_deref(), Some("{not json"));

    store.upsert(payload("50嵐", "奶茶", 3)).expect("save after recovery");
    assert_eq!(store.len(), 1);
}

#[test]
fn records_without_size_load_as_large() {
    let raw = r#"[{"id":"old","brandId":"50lan","brandName":"50嵐","drinkName":"奶茶",
        "sugar":"微糖 (30%)","ice":"去冰","toppings":["珍珠"],"rating":4,"note":"","date":5}]"#;
    let storage = MemoryStorage {
        data: Some(raw.to_string()),
        ..MemoryStorage::default()
    };
    let store = RecordStore::open_with_clock(storage, TickClock::starting_at(0));
    let record = store.get("old").expect("old record loads");
    assert_eq!(record.size, Size::Large);
    assert_eq!(record.sugar, SugarLevel::Quarter);
}

#[test]
fn remove_deletes_only_the_named_record() {
    let mut store = store();
    let a = store.upsert(payload("50嵐", "a", 3)).expect("save");
    let b = store.upsert(payload("50嵐", "b", 3)).expect("save");
    assert_eq!(store.remove(&a.id).expect("remove"), Some(a));
    assert_eq!(store.remove("missing").expect("remove missing"), None);
    assert_eq!(store.records(), std::slice::from_ref(&b));
}

#[test]
fn resolve_accepts_unique_prefixes() {
    let records: Vec<DrinkRecord> = ["abc-1", "abd-2", "xyz-3"]
        .iter()
        .map(|id| payload("50嵐", id, 3).into_record(id.to_string(), 1))
        .collect();
    let storage = MemoryStorage {
        data: Some(serde_json::to_string(&records).expect("serialize")),
        ..MemoryStorage::default()
    };
    let store = RecordStore::open_with_clock(storage, TickClock::starting_at(0));
    assert_eq!(store.resolve("x").map(|r| r.id.as_str()).ok(), Some("xyz-3"));
    assert_eq!(store.resolve("abd-2").map(|r| r.id.as_str()).ok(), Some("abd-2"));
    assert!(store.resolve("ab").is_err());
    assert!(store.resolve("q").is_err());
    assert!(store.resolve("").is_err());
}

#[test]
fn file_storage_writes_atomically_and_round_trips() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("nested").join("records.json");
    let mut storage = FileStorage::new(path.clone());
    assert_eq!(storage.load().expect("load missing"), None);

    storage.save("[]").expect("save empty");
    storage.save("[1]").expect("overwrite");
    assert_eq!(storage.load().expect("load"), Some("[1]".to_string()));

    let leftovers: Vec<_> = std::fs::read_dir(path.parent().expect("parent"))
        .expect("list dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path() != path)
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

#[test]
fn file_storage_keeps_unreadable_copy() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("records.json");
    std::fs::write(&path, "garbage").expect("seed garbage");

    let store = RecordStore::open(FileStorage::new(path.clone()));
    assert!(store.is_empty());
    let backup = store.storage().unreadable_path();
    assert_eq!(
        std::fs::read_to_string(backup).expect("read backup"),
        "garbage"
    );
}

#[test]
fn repeated_corruption_keeps_every_unreadable_copy() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("records.json");
    let storage = FileStorage::new(path.clone());

    std::fs::write(&path, "first garbage").expect("seed garbage");
    RecordStore::open(storage.clone());
    std::fs::write(&path, "second garbage").expect("seed garbage again");
    RecordStore::open(storage.clone());

    let first = storage.unreadable_path();
    let second = dir.path().join("records.json.unreadable.1");
    assert_eq!(
        std::fs::read_to_string(first).expect("first backup"),
        "first garbage"
    );
    assert_eq!(
        std::fs::read_to_string(second).expect("second backup"),
        "second garbage"
    );
    assert_eq!(storage.free_unreadable_path(), dir.path().join("records.json.unreadable.2"));
}
