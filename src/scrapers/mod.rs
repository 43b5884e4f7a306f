pub mod fetcher;
pub mod traits;
pub mod translator;
pub mod types;

pub use fetcher::HttpFetcher;
pub use traits::{Fetcher, Translator};
pub use translator::GoogleTranslator;
