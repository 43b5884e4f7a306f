use reqwest::StatusCode;

/// Errors returned by a [`Fetcher`](crate::scrapers::Fetcher)
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} for {url}")]
    HttpStatus { status: StatusCode, url: String },
    #[error("invalid url {0}")]
    InvalidUrl(String),
}

/// Errors returned by a [`Translator`](crate::scrapers::Translator)
#[derive(thiserror::Error, Debug)]
pub enum TranslateError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}")]
    HttpStatus { status: StatusCode },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("translation response had no text")]
    Empty,
}

/// Field-local extraction failures. These never leave the extractor layer.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    #[error("invalid selector {0}")]
    Selector(String),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("missing node {0}")]
    MissingNode(&'static str),
    #[error("missing attribute {0}")]
    MissingAttribute(&'static str),
    #[error("malformed number {0:?}")]
    Number(String),
    #[error("no script assigning {0}")]
    MissingScript(&'static str),
    #[error("unbalanced literal after {0}")]
    Unbalanced(&'static str),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
    #[error("missing query parameter {0}")]
    MissingParam(&'static str),
}
