//! Plain-text presentation of records and brands.
//!
//! Display tokens embed a parenthesized code (`大杯 (L)`, `半糖 (50%)`);
//! [`short_label`] is the only place that strips it.
use crate::catalog::{Brand, BrandOptions};
use crate::record::{DrinkRecord, MAX_RATING};
use chrono::{DateTime, Local};

const RULE: &str = "------------------";
const SHORT_ID_CHARS: usize = 8;

/// The display token without its parenthesized code.
pub fn short_label(token: &str) -> &str {
    token.split('(').next().unwrap_or(token).trim()
}

/// `★` per star earned, `☆` for the rest.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING);
    let mut out = "★".repeat(usize::from(filled));
    out.push_str(&"☆".repeat(usize::from(MAX_RATING - filled)));
    out
}

/// Leading characters of an id, enough to pass back as a prefix.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_CHARS) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Local calendar date of an epoch-millisecond timestamp.
pub fn format_date(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Message-friendly summary of one record.
pub fn share_text(record: &DrinkRecord) -> String {
    let mut out = String::new();
    out.push_str("🧋 茶記推薦\n");
    out.push_str(&format!("【{}】{}\n", record.brand_name, record.drink_name));
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("📏 容量：{}\n", short_label(record.size.as_str())));
    out.push_str(&format!("🍬 甜度：{}\n", record.sugar));
    out.push_str(&format!("🧊 冰塊：{}\n", record.ice));
    if !record.toppings.is_empty() {
        out.push_str(&format!("🟣 加料：{}\n", joined_toppings(record)));
    }
    out.push_str(&format!("⭐ 評分：{}\n", stars(record.rating)));
    if !record.note.is_empty() {
        out.push_str(&format!("📝 備註：{}\n", record.note));
    }
    out.push_str(RULE);
    out.push('\n');
    out.push_str("#茶記 #手搖飲筆記");
    out
}

/// One-line list entry.
pub fn record_line(record: &DrinkRecord) -> String {
    let mut line = format!(
        "{}  {}  【{}】{}  {} / {} / {}",
        short_id(&record.id),
        format_date(record.date),
        record.brand_name,
        record.drink_name,
        short_label(record.size.as_str()),
        short_label(record.sugar.as_str()),
        record.ice,
    );
    if !record.toppings.is_empty() {
        line.push_str(&format!(" + {}", joined_toppings(record)));
    }
    line.push_str(&format!("  {}", stars(record.rating)));
    if !record.note.is_empty() {
        line.push_str(&format!("  “{}”", crate::util::truncate_chars(&record.note, 24)));
    }
    line
}

/// Brand entry for the `brands` listing, with its effective option sets.
pub fn brand_block(brand: &Brand) -> String {
    let sizes: Vec<&str> = brand
        .effective_sizes()
        .iter()
        .map(|size| short_label(size.as_str()))
        .collect();
    let toppings = brand.effective_toppings();
    let toppings = if toppings.is_empty() {
        "-".to_string()
    } else {
        toppings.join(", ")
    };
    format!(
        "{} ({})\n  sizes: {}\n  toppings: {}",
        brand.name,
        brand.id,
        sizes.join(" / "),
        toppings
    )
}

fn joined_toppings(record: &DrinkRecord) -> String {
    record
        .toppings
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
