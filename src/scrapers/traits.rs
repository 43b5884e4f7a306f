use crate::error::{FetchError, TranslateError};
use async_trait::async_trait;

/// Source of raw HTML for list and detail pages.
/// Implementations own session continuity (cookies) across calls.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return its body
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;

    /// Get the name of the fetcher, used in logs
    fn name(&self) -> &'static str;
}

/// Machine translation of free text
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target`, detecting the source language
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError>;
}
