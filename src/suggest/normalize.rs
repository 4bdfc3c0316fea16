//! Best-effort extraction of drink names from free-form model text.
use regex::Regex;
use std::sync::OnceLock;

// A leading bullet run, or a list number such as `1.` / `2)` / `3、`.
const LIST_MARKER: &str = r"^\s*(?:[*\-•·‧]+|\d+\s*[.)、．])\s*";
// `[name](url)`, keeping only the name.
const MARKDOWN_LINK: &str = r"\[([^\]]*)\]\([^)]*\)";
// `[1]`, `[2][3]` and similar citation markers ending a line.
const TRAILING_CITATION: &str = r"(?:\s*\[\d+\])+\s*$";

fn cached(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(pattern).ok()).as_ref()
}

fn list_marker() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    cached(&PATTERN, LIST_MARKER)
}

fn markdown_link() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    cached(&PATTERN, MARKDOWN_LINK)
}

fn trailing_citation() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    cached(&PATTERN, TRAILING_CITATION)
}

/// Split `text` into candidate names: one per line, list markers and
/// emphasis removed, links and citations dropped, duplicates removed in
/// first-seen order.
pub fn normalize_suggestions(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in text.lines() {
        let Some(name) = clean_line(line) else {
            continue;
        };
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

fn clean_line(line: &str) -> Option<String> {
    let mut name = strip_list_markers(line);
    if let Some(pattern) = markdown_link() {
        name = pattern.replace_all(&name, "$1").into_owned();
    }
    if let Some(pattern) = trailing_citation() {
        name = pattern.replace(&name, "").into_owned();
    }
    let name = name
        .trim()
        .trim_matches(|c| matches!(c, '*' | '_' | '`'))
        .trim();
    if name.is_empty() || is_reference(name) {
        return None;
    }
    Some(name.to_string())
}

/// Remove nested markers too, e.g. `- 1. 紅茶`.
fn strip_list_markers(line: &str) -> String {
    let Some(pattern) = list_marker() else {
        return line.to_string();
    };
    let mut current = line.to_string();
    loop {
        let next = pattern.replace(&current, "");
        if next.len() == current.len() {
            return current;
        }
        current = next.into_owned();
    }
}

fn is_reference(line: &str) -> bool {
    let lowered = line.to_lowercase();
    lowered.contains("http://")
        || lowered.contains("https://")
        || lowered.contains("www.")
        || lowered.contains("source")
        || line.starts_with("來源")
        || line.starts_with("參考")
}

/// First non-empty line of a tip answer, emphasis removed.
pub fn normalize_tip(text: &str) -> Option<String> {
    text.lines().find_map(clean_line)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
