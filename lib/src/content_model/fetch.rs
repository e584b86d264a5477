//! Fetches content-model JSON schemas from the built-in schema API
//! (spec.md §4.G "Remote schema fetch", `--api`).
//!
//! A model that fails to fetch or parse is logged and skipped rather than
//! aborting the whole batch — one broken upstream model definition
//! shouldn't block generating the others.

use super::schema::{parse_content_model, ContentModel};
use serde::Deserialize;

/// One element of the batched JSON-API response. Only the first
/// element's `response` array is used (spec.md §4.G "built-in schemas").
#[derive(Debug, Deserialize)]
struct BatchEnvelope {
    response: Vec<serde_json::Value>,
}

/// Posts a batched `GET info/content_models.json` request to `api_url`
/// and parses whatever comes back in its first envelope. Entries that
/// fail to parse are dropped with a `tracing::warn!`, not surfaced as an
/// error — one broken built-in schema shouldn't block the others.
pub async fn fetch_content_models(client: &reqwest::Client, api_url: &str) -> Vec<ContentModel> {
    let response = match client
        .post(api_url)
        .json(&serde_json::json!([{ "method": "GET", "url": "info/content_models.json" }]))
        .send()
        .await
    {
        Ok(response) => response,
        Err(error) => {
            tracing::warn!(%api_url, %error, "content model batch fetch failed");
            return Vec::new();
        }
    };

    let envelopes: Vec<BatchEnvelope> = match response.json().await {
        Ok(envelopes) => envelopes,
        Err(error) => {
            tracing::warn!(%api_url, %error, "content model batch response was not valid JSON");
            return Vec::new();
        }
    };

    let Some(first) = envelopes.into_iter().next() else {
        return Vec::new();
    };

    first
        .response
        .into_iter()
        .filter_map(|value| {
            let name = value
                .get("name")
                .and_then(|n| n.as_str())
                .unwrap_or("<unnamed>")
                .to_string();
            let text = value.to_string();
            match parse_content_model(&name, &text) {
                Ok(model) => Some(model),
                Err(error) => {
                    tracing::warn!(name = %name, %error, "content model failed to parse, skipping");
                    None
                }
            }
        })
        .collect()
}
