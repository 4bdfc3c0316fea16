//! Menu suggestion gateway.
//!
//! Suggestions are advisory: every backend failure (missing credentials,
//! unreachable service, unparseable answer) is logged and resolves to an
//! empty result. Nothing here returns an error to the wizard.
//!
//! Backends only turn a prompt into raw text; prompt assembly and response
//! normalization are shared.
mod command;
mod gemini;
mod normalize;

pub use command::CommandBackend;
pub use gemini::GeminiBackend;
pub use normalize::{normalize_suggestions, normalize_tip};

use crate::config::{SuggestBackend, SuggestConfig};
use anyhow::Result;
use std::env;
use std::time::{Duration, Instant};

const MENU_SEARCH: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/menu_search.md"
));
const MENU_POPULAR: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/menu_popular.md"
));
const CUSTOMIZATION_TIP: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/customization_tip.md"
));

/// Source of drink-name candidates and customization tips.
pub trait SuggestionGateway {
    /// Drink names for `brand_name`: related to `query` when given, otherwise
    /// the brand's popular drinks. Empty on any failure.
    fn suggest(&self, brand_name: &str, query: Option<&str>) -> Vec<String>;

    /// A one-line sugar/ice recommendation for a drink, if one is available.
    fn customization_tip(&self, brand_name: &str, drink_name: &str) -> Option<String>;
}

/// Gateway used when no backend is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSuggestions;

impl SuggestionGateway for NoSuggestions {
    fn suggest(&self, _brand_name: &str, _query: Option<&str>) -> Vec<String> {
        Vec::new()
    }

    fn customization_tip(&self, _brand_name: &str, _drink_name: &str) -> Option<String> {
        None
    }
}

/// Something that answers a prompt with free-form text.
pub trait PromptBackend {
    fn label(&self) -> &'static str;
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Gateway over a prompt backend.
pub struct PromptGateway<B> {
    backend: B,
}

impl<B: PromptBackend> PromptGateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn ask(&self, prompt: &str) -> Option<String> {
        let start = Instant::now();
        let result = self.backend.complete(prompt);
        let elapsed_ms = start.elapsed().as_millis();
        match result {
            Ok(text) => {
                tracing::info!(
                    backend = self.backend.label(),
                    elapsed_ms,
                    prompt_bytes = prompt.len(),
                    response_bytes = text.len(),
                    "suggestion request complete"
                );
                Some(text)
            }
            Err(err) => {
                tracing::warn!(
                    backend = self.backend.label(),
                    elapsed_ms,
                    error = %format!("{err:#}"),
                    "suggestion request failed"
                );
                None
            }
        }
    }
}

impl<B: PromptBackend> SuggestionGateway for PromptGateway<B> {
    fn suggest(&self, brand_name: &str, query: Option<&str>) -> Vec<String> {
        let prompt = menu_prompt(brand_name, query);
        self.ask(&prompt)
            .map(|text| normalize_suggestions(&text))
            .unwrap_or_default()
    }

    fn customization_tip(&self, brand_name: &str, drink_name: &str) -> Option<String> {
        let prompt = tip_prompt(brand_name, drink_name);
        self.ask(&prompt).and_then(|text| normalize_tip(&text))
    }
}

/// Prompt asking for drinks related to `query`, or for popular drinks.
pub fn menu_prompt(brand_name: &str, query: Option<&str>) -> String {
    match query.map(str::trim).filter(|query| !query.is_empty()) {
        Some(query) => fill(MENU_SEARCH, &[("{brand}", brand_name), ("{query}", query)]),
        None => fill(MENU_POPULAR, &[("{brand}", brand_name)]),
    }
}

pub fn tip_prompt(brand_name: &str, drink_name: &str) -> String {
    fill(
        CUSTOMIZATION_TIP,
        &[("{brand}", brand_name), ("{drink}", drink_name)],
    )
}

fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut prompt = template.trim().to_string();
    for (placeholder, value) in values {
        prompt = prompt.replace(placeholder, value);
    }
    prompt
}

/// Build the gateway selected by `config`. A backend that cannot be set up
/// is logged and replaced by [`NoSuggestions`].
pub fn build_gateway(config: &SuggestConfig) -> Box<dyn SuggestionGateway> {
    match config.backend {
        SuggestBackend::None => Box::new(NoSuggestions),
        SuggestBackend::Command => {
            let raw = config.command.as_deref().unwrap_or_default();
            match CommandBackend::parse(raw) {
                Ok(backend) => Box::new(PromptGateway::new(backend)),
                Err(err) => {
                    tracing::warn!(error = %format!("{err:#}"), "suggestion command unusable");
                    Box::new(NoSuggestions)
                }
            }
        }
        SuggestBackend::Gemini => match env::var(&config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Box::new(PromptGateway::new(GeminiBackend::new(
                key.trim().to_string(),
                config.model.clone(),
                Duration::from_secs(config.timeout_secs),
            ))),
            _ => {
                tracing::warn!(env = %config.api_key_env, "no Gemini API key; suggestions disabled");
                Box::new(NoSuggestions)
            }
        },
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
