use crate::assembler::RecordAssembler;
use crate::config::Config;
use crate::error::FetchError;
use crate::extractors::{selector, visible_text};
use crate::models::ListingRecord;
use crate::scrapers::types::{
    DelayRange, DETAIL_LINK_SELECTOR, NEXT_PAGE_SELECTOR, NO_RESULTS_MARKER,
};
use crate::scrapers::{Fetcher, Translator};
use chrono::{DateTime, Utc};
use rand::Rng;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

/// What a search results page offers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    pub detail_links: Vec<String>,
    pub has_next: bool,
    pub no_results: bool,
}

/// Progress of a crawl: current page, accumulated records, termination
#[derive(Debug)]
pub struct CrawlState {
    pub page: u32,
    pub records: Vec<ListingRecord>,
    pub done: bool,
}

impl CrawlState {
    pub fn new() -> Self {
        Self {
            page: 1,
            records: Vec::new(),
            done: false,
        }
    }

    /// Decide whether to move to the following page after `list` was processed
    pub fn advance(&mut self, list: &ListPage, max_pages: Option<u32>) {
        if list.no_results || !list.has_next {
            self.done = true;
        } else if max_pages.is_some_and(|max| self.page >= max) {
            info!(page = self.page, "Reached configured page limit");
            self.done = true;
        } else {
            self.page += 1;
        }
    }
}

impl Default for CrawlState {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a run; `aborted` carries the list-page error that ended it early
#[derive(Debug)]
pub struct CrawlReport {
    pub records: Vec<ListingRecord>,
    pub pages_visited: u32,
    pub skipped: usize,
    pub aborted: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Sequential crawl over paginated search results
pub struct Crawler<'a> {
    config: &'a Config,
    fetcher: &'a dyn Fetcher,
    translator: Option<&'a dyn Translator>,
}

impl<'a> Crawler<'a> {
    pub fn new(
        config: &'a Config,
        fetcher: &'a dyn Fetcher,
        translator: Option<&'a dyn Translator>,
    ) -> Self {
        Self {
            config,
            fetcher,
            translator,
        }
    }

    pub async fn run(&self) -> CrawlReport {
        let started_at = Utc::now();
        let assembler = RecordAssembler {
            scope: &self.config.scope,
            features: self.config.features,
            source_language: &self.config.source_language,
            languages: &self.config.languages,
            translator: self.translator,
        };

        let mut state = CrawlState::new();
        let mut pages_visited = 0;
        let mut skipped = 0;
        let mut aborted = None;

        while !state.done {
            if self.config.max_pages.is_some_and(|max| state.page > max) {
                info!(page = state.page, "Page limit leaves nothing to crawl");
                break;
            }
            let url = page_url(&self.config.base_url, state.page);
            info!(page = state.page, fetcher = self.fetcher.name(), "🔎 Processing list page");

            let html = match self.fetcher.fetch(&url).await {
                Ok(html) => html,
                Err(e) => {
                    error!(
                        page = state.page,
                        url = %url,
                        error = %e,
                        "List page failed, ending crawl"
                    );
                    aborted = Some(e.to_string());
                    break;
                }
            };
            pages_visited += 1;

            let list = parse_list_page(&html, &self.config.site_origin);
            info!(page = state.page, count = list.detail_links.len(), "Found detail links");

            for link in &list.detail_links {
                match self.scrape_detail(&assembler, link).await {
                    Ok(record) => state.records.push(record),
                    Err(e) => {
                        warn!(url = %link, error = %e, "Skipping listing");
                        skipped += 1;
                    }
                }
                pause(self.config.detail_delay).await;
            }

            pause(self.config.page_delay).await;
            state.advance(&list, self.config.max_pages);
        }

        info!(
            records = state.records.len(),
            pages_visited, skipped, "✅ Crawl finished"
        );

        CrawlReport {
            records: state.records,
            pages_visited,
            skipped,
            aborted,
            started_at,
            finished_at: Utc::now(),
        }
    }

    async fn scrape_detail(
        &self,
        assembler: &RecordAssembler<'_>,
        url: &str,
    ) -> Result<ListingRecord, FetchError> {
        debug!(url, "🛠️ Extracting listing");
        let html = self.fetcher.fetch(url).await?;
        Ok(assembler.assemble(&html).await)
    }
}

/// URL of result page `page` for a search URL
pub fn page_url(base_url: &str, page: u32) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}pagina={page}")
}

/// Detail links (absolute, deduplicated, in page order) and pagination state
pub fn parse_list_page(html: &str, site_origin: &str) -> ListPage {
    let doc = Html::parse_document(html);
    let origin = Url::parse(site_origin).ok();

    let mut detail_links: Vec<String> = Vec::new();
    if let Ok(link) = selector(DETAIL_LINK_SELECTOR) {
        for el in doc.select(&link) {
            let Some(href) = el.value().attr("href") else {
                continue;
            };
            match resolve(origin.as_ref(), href) {
                Some(url) if !detail_links.contains(&url) => detail_links.push(url),
                Some(_) => {}
                None => warn!(href, "Unresolvable detail link"),
            }
        }
    }

    let has_next = selector(NEXT_PAGE_SELECTOR)
        .map(|next| doc.select(&next).next().is_some())
        .unwrap_or(false);

    let page_text = visible_text(&doc).to_lowercase();

    ListPage {
        detail_links,
        has_next,
        no_results: page_text.contains(NO_RESULTS_MARKER),
    }
}

fn resolve(origin: Option<&Url>, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => origin?.join(href).ok().map(|u| u.to_string()),
    }
}

async fn pause(range: DelayRange) {
    if range.is_zero() {
        return;
    }
    let ms = rand::thread_rng().gen_range(range.min_ms()..=range.max_ms());
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
