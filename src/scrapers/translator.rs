use crate::error::TranslateError;
use crate::scrapers::traits::Translator;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Translator using Google's public `translate_a/single` endpoint
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(base_url: &str) -> Result<Self, TranslateError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let url = format!("{}/translate_a/single", self.base_url);
        debug!(target, chars = text.len(), "Requesting translation");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranslateError::HttpStatus {
                status: response.status(),
            });
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;
        join_segments(&payload)
    }
}

/// The endpoint splits long input into sentences: `[[["out","in",..],..],..]`
fn join_segments(payload: &Value) -> Result<String, TranslateError> {
    let translated: String = payload
        .get(0)
        .and_then(Value::as_array)
        .map(|segments| {
            segments
                .iter()
                .filter_map(|segment| segment.get(0).and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    if translated.trim().is_empty() {
        return Err(TranslateError::Empty);
    }
    Ok(translated)
}
