use serde::{Deserialize, Serialize};

/// Constant classification tags stamped on every record of a crawl
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingScope {
    /// Operation being advertised ("sale", "rent")
    pub operation: String,
    /// Kind of property ("homes", "offices", ...)
    pub property_type: String,
    /// Listing state
    pub state: String,
    /// ISO country code of the portal
    pub country: String,
}

impl Default for ListingScope {
    fn default() -> Self {
        Self {
            operation: "sale".to_string(),
            property_type: "homes".to_string(),
            state: "active".to_string(),
            country: "ES".to_string(),
        }
    }
}

pub const DEFAULT_BASE_URL: &str = "https://www.idealista.com/geo/venta-viviendas/andalucia/";
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.idealista.com";
pub const DEFAULT_TRANSLATOR_URL: &str = "https://translate.googleapis.com";
pub const DEFAULT_SOURCE_LANGUAGE: &str = "es";

pub const DEFAULT_TRANSLATION_LANGUAGES: &[&str] = &[
    "ca", "en", "fr", "de", "it", "pt", "da", "fi", "no", "nl", "pl", "ro", "ru", "sv", "el",
    "zh-CN", "uk",
];

pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:90.0) Gecko/20100101 Firefox/90.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Edge/91.0.864.48",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 15_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/15.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 11; SM-G973F) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/93.0.4577.62 Mobile Safari/537.36",
    "Mozilla/5.0 (iPad; CPU OS 14_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0 Mobile/15E148 Safari/604.1",
];

pub const ACCEPT_LANGUAGE: &str = "es-ES,es;q=0.9,en;q=0.8";
pub const REFERER: &str = "https://www.google.com/";

/// Anchor class of every result card on a list page
pub const DETAIL_LINK_SELECTOR: &str = "a.item-link";
/// Pagination control pointing to the following page
pub const NEXT_PAGE_SELECTOR: &str = "a.icon-arrow-right-after";
/// Text shown when a search page has nothing left to list (compared lowercased)
pub const NO_RESULTS_MARKER: &str = "no hay anuncios que coincidan";

/// Inclusive millisecond range for a randomized pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl DelayRange {
    /// Bounds given in the wrong order are swapped
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        if min_ms <= max_ms {
            Self { min_ms, max_ms }
        } else {
            Self {
                min_ms: max_ms,
                max_ms: min_ms,
            }
        }
    }

    pub const fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub const fn max_ms(&self) -> u64 {
        self.max_ms
    }

    pub const fn none() -> Self {
        Self::new(0, 0)
    }

    pub fn is_zero(&self) -> bool {
        self.max_ms == 0
    }
}
