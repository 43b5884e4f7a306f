use crate::error::FetchError;
use crate::scrapers::traits::Fetcher;
use crate::scrapers::types::{ACCEPT_LANGUAGE, REFERER, USER_AGENTS};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::header::{
    ACCEPT_LANGUAGE as ACCEPT_LANGUAGE_HEADER, REFERER as REFERER_HEADER, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// HTTP fetcher backed by a single reqwest client.
/// The client keeps a cookie store so every request of a run shares one session.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with a fresh cookie session
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .cookie_store(true)
            .build()?;

        Ok(Self { client })
    }

    /// Visit the site origin once so the session picks up its cookies.
    /// Failures are only logged; the crawl can still proceed without them.
    pub async fn warm_up(&self, origin: &str) {
        match self.fetch(origin).await {
            Ok(body) => debug!(origin, bytes = body.len(), "Session warmed up"),
            Err(e) => warn!(origin, error = %e, "Session warm-up failed"),
        }
    }

    fn random_user_agent() -> &'static str {
        USER_AGENTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(USER_AGENTS[0])
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching URL: {}", url);
        Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, Self::random_user_agent())
            .header(ACCEPT_LANGUAGE_HEADER, ACCEPT_LANGUAGE)
            .header(REFERER_HEADER, REFERER)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", url, response.status());
            return Err(FetchError::HttpStatus {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        debug!("Downloaded {} bytes of HTML", html.len());
        Ok(html)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
