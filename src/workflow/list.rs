//! Workflow list step: print one derived view of the store.
use super::AppContext;
use crate::cli::{ListArgs, View};
use crate::record::DrinkRecord;
use crate::render::record_line;
use crate::store::{RecordStore, StoragePort};
use anyhow::{Context, Result};

pub fn run_list(ctx: &AppContext, args: &ListArgs) -> Result<()> {
    let store = ctx.open_store();
    tracing::debug!(records = store.len(), view = ?args.view, "listing records");
    let text = if args.json {
        view_json(&store, args.view)?
    } else {
        view_text(&store, args.view)
    };
    println!("{text}");
    Ok(())
}

fn view_json<S: StoragePort>(store: &RecordStore<S>, view: View) -> Result<String> {
    match view {
        View::Recent => serde_json::to_string_pretty(&store.recency_view()),
        View::Brand => serde_json::to_string_pretty(&store.brand_grouped_view()),
        View::Favorites => serde_json::to_string_pretty(&store.favorites_view()),
    }
    .context("serialize records view")
}

fn view_text<S: StoragePort>(store: &RecordStore<S>, view: View) -> String {
    if store.is_empty() {
        return "no records yet".to_string();
    }
    match view {
        View::Recent => lines(&store.recency_view()),
        View::Favorites => {
            let favorites = store.favorites_view();
            if favorites.is_empty() {
                return "no favorites yet".to_string();
            }
            lines(&favorites)
        }
        View::Brand => store
            .brand_grouped_view()
            .iter()
            .map(|(brand, records)| {
                let entries: Vec<String> = records
                    .iter()
                    .map(|record| format!("  {}", record_line(record)))
                    .collect();
                format!("{brand} ({})\n{}", records.len(), entries.join("\n"))
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn lines(records: &[&DrinkRecord]) -> String {
    records
        .iter()
        .map(|record| record_line(record))
        .collect::<Vec<_>>()
        .join("\n")
}
