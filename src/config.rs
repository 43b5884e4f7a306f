use crate::scrapers::types::{
    DelayRange, ListingScope, DEFAULT_BASE_URL, DEFAULT_SITE_ORIGIN, DEFAULT_SOURCE_LANGUAGE,
    DEFAULT_TRANSLATION_LANGUAGES, DEFAULT_TRANSLATOR_URL,
};
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

/// Optional parts of the record that can be switched off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub energy_certification: bool,
    pub translate_comments: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            energy_certification: true,
            translate_comments: true,
        }
    }
}

/// Run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub site_origin: String,
    pub output_path: PathBuf,
    pub record_dir: Option<PathBuf>,
    pub languages: Vec<String>,
    pub source_language: String,
    pub translator_url: String,
    pub max_pages: Option<u32>,
    pub detail_delay: DelayRange,
    pub page_delay: DelayRange,
    pub warm_up: bool,
    pub features: Features,
    pub scope: ListingScope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            output_path: PathBuf::from("idealista_output.json"),
            record_dir: None,
            languages: DEFAULT_TRANSLATION_LANGUAGES
                .iter()
                .map(|l| l.to_string())
                .collect(),
            source_language: DEFAULT_SOURCE_LANGUAGE.to_string(),
            translator_url: DEFAULT_TRANSLATOR_URL.to_string(),
            max_pages: None,
            detail_delay: DelayRange::new(1000, 3000),
            page_delay: DelayRange::new(0, 1000),
            warm_up: true,
            features: Features::default(),
            scope: ListingScope::default(),
        }
    }
}

impl Config {
    /// Read `SCOUT_*` variables, loading `.env` first
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(v) = get("SCOUT_BASE_URL") {
            cfg.base_url = v;
        }
        if let Some(v) = get("SCOUT_SITE_ORIGIN") {
            cfg.site_origin = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = get("SCOUT_OUTPUT_PATH") {
            cfg.output_path = PathBuf::from(v);
        }
        cfg.record_dir = get("SCOUT_RECORD_DIR").map(PathBuf::from);
        // Set but empty means "no translations", so read it without the emptiness filter
        if let Some(v) = lookup("SCOUT_LANGUAGES") {
            cfg.languages = parse_languages(&v);
        }
        if let Some(v) = get("SCOUT_SOURCE_LANGUAGE") {
            cfg.source_language = v.trim().to_string();
        }
        if let Some(v) = get("SCOUT_TRANSLATOR_URL") {
            cfg.translator_url = v;
        }
        if let Some(v) = get("SCOUT_MAX_PAGES") {
            let pages: u32 = v
                .trim()
                .parse()
                .with_context(|| format!("SCOUT_MAX_PAGES is not a page count: {v}"))?;
            if pages == 0 {
                bail!("SCOUT_MAX_PAGES must be at least 1");
            }
            cfg.max_pages = Some(pages);
        }
        if let Some(v) = get("SCOUT_DETAIL_DELAY_MS") {
            cfg.detail_delay = parse_delay("SCOUT_DETAIL_DELAY_MS", &v)?;
        }
        if let Some(v) = get("SCOUT_PAGE_DELAY_MS") {
            cfg.page_delay = parse_delay("SCOUT_PAGE_DELAY_MS", &v)?;
        }
        if let Some(v) = get("SCOUT_WARM_UP") {
            cfg.warm_up = parse_flag("SCOUT_WARM_UP", &v)?;
        }
        if let Some(v) = get("SCOUT_ENERGY_CERTIFICATION") {
            cfg.features.energy_certification = parse_flag("SCOUT_ENERGY_CERTIFICATION", &v)?;
        }
        if let Some(v) = get("SCOUT_TRANSLATE") {
            cfg.features.translate_comments = parse_flag("SCOUT_TRANSLATE", &v)?;
        }

        Ok(cfg)
    }
}

fn parse_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// `"1500"` is a fixed pause, `"1000-3000"` a random one in that range
fn parse_delay(key: &str, raw: &str) -> Result<DelayRange> {
    let parse = |s: &str| {
        s.trim()
            .parse::<u64>()
            .with_context(|| format!("{key} is not a millisecond value: {raw}"))
    };

    let (min, max) = match raw.split_once('-') {
        Some((min, max)) => (parse(min)?, parse(max)?),
        None => {
            let ms = parse(raw)?;
            (ms, ms)
        }
    };

    if min > max {
        bail!("{key} has min above max: {raw}");
    }
    Ok(DelayRange::new(min, max))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{key} is not a boolean: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_cover_andalucia_sale_crawl() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.languages.len(), 17);
        assert_eq!(cfg.languages[0], "ca");
        assert_eq!(cfg.source_language, "es");
        assert_eq!(cfg.detail_delay, DelayRange::new(1000, 3000));
        assert_eq!(cfg.max_pages, None);
        assert!(cfg.features.energy_certification);
        assert!(cfg.features.translate_comments);
        assert_eq!(cfg.scope.operation, "sale");
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("SCOUT_LANGUAGES", " en, fr ,"),
            ("SCOUT_MAX_PAGES", "4"),
            ("SCOUT_DETAIL_DELAY_MS", "250"),
            ("SCOUT_PAGE_DELAY_MS", "0-0"),
            ("SCOUT_TRANSLATE", "off"),
            ("SCOUT_SITE_ORIGIN", "http://127.0.0.1:9000/"),
            ("SCOUT_RECORD_DIR", "raw_scrape"),
        ])
        .unwrap();

        assert_eq!(cfg.languages, vec!["en", "fr"]);
        assert_eq!(cfg.max_pages, Some(4));
        assert_eq!(cfg.detail_delay, DelayRange::new(250, 250));
        assert!(cfg.page_delay.is_zero());
        assert!(!cfg.features.translate_comments);
        assert_eq!(cfg.site_origin, "http://127.0.0.1:9000");
        assert_eq!(cfg.record_dir, Some(PathBuf::from("raw_scrape")));
    }

    #[test]
    fn empty_language_list_disables_targets() {
        let cfg = config(&[("SCOUT_LANGUAGES", "")]).unwrap();
        assert!(cfg.languages.is_empty());
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(config(&[("SCOUT_MAX_PAGES", "many")]).is_err());
        assert!(config(&[("SCOUT_MAX_PAGES", "0")]).is_err());
        assert!(config(&[("SCOUT_DETAIL_DELAY_MS", "3000-1000")]).is_err());
        assert!(config(&[("SCOUT_WARM_UP", "maybe")]).is_err());
    }
}
