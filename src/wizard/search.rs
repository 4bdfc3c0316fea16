//! Drink-name search state for the `SelectingDrink` step.
//!
//! Gateway answers arrive after the request was made, so each request is
//! tagged with a [`LookupTicket`] and only applied if the wizard is still on
//! the same brand, query and visit of the drink step.

/// Identifies one gateway request made from the drink step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub(super) brand_id: String,
    pub(super) brand_name: String,
    pub(super) query: String,
    pub(super) visit: u64,
}

impl LookupTicket {
    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    /// The typed query, or `None` when asking for popular drinks.
    pub fn query(&self) -> Option<&str> {
        let query = self.query.trim();
        (!query.is_empty()).then_some(query)
    }
}

#[derive(Debug, Clone, Default)]
pub(super) struct DrinkSearch {
    pub(super) query: String,
    remote: Option<RemoteResults>,
    /// Bumped on every entry into the drink step.
    pub(super) visit: u64,
}

#[derive(Debug, Clone)]
struct RemoteResults {
    query: String,
    names: Vec<String>,
}

impl DrinkSearch {
    pub(super) fn enter(&mut self) {
        self.visit += 1;
    }

    pub(super) fn reset(&mut self) {
        self.query.clear();
        self.remote = None;
    }

    pub(super) fn store_remote(&mut self, query: String, names: Vec<String>) {
        self.remote = Some(RemoteResults { query, names });
    }

    /// Gateway names answering the current query, if any.
    pub(super) fn remote_for_current_query(&self) -> &[String] {
        match &self.remote {
            Some(remote) if remote.query == self.query => &remote.names,
            _ => &[],
        }
    }
}

/// Popular items whose name contains `query` (ignoring case).
pub fn filter_popular<'a>(popular: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    popular
        .iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

/// Local matches first, then gateway names, each name once in first-seen order.
pub fn merge_suggestions(local: &[&str], remote: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(local.len() + remote.len());
    let candidates = local.iter().copied().chain(remote.iter().map(String::as_str));
    for name in candidates {
        if !merged.iter().any(|seen| seen == name) {
            merged.push(name.to_string());
        }
    }
    merged
}
