//! Suggestion backend calling the Gemini `generateContent` endpoint with
//! Google-search grounding.
use super::PromptBackend;
use anyhow::{anyhow, Context, Result};
use serde_json::{json, Value};
use std::time::Duration;

const ENDPOINT_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub struct GeminiBackend {
    agent: ureq::Agent,
    api_key: String,
    model: String,
}

impl GeminiBackend {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self {
            agent,
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{ENDPOINT_BASE}/{}:generateContent", self.model)
    }
}

impl PromptBackend for GeminiBackend {
    fn label(&self) -> &'static str {
        "gemini"
    }

    fn complete(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint();
        let mut response = self
            .agent
            .post(&url)
            .header("x-goog-api-key", self.api_key.as_str())
            .send_json(request_body(prompt))
            .with_context(|| format!("POST {url}"))?;
        let body: Value = response
            .body_mut()
            .read_json()
            .context("decode Gemini response JSON")?;
        response_text(&body).ok_or_else(|| anyhow!("Gemini response carried no text"))
    }
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "tools": [{ "google_search": {} }],
    })
}

/// Concatenated text parts of the first candidate.
fn response_text(body: &Value) -> Option<String> {
    let parts = body
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();
    (!text.trim().is_empty()).then_some(text)
}
