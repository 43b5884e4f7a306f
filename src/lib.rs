pub mod assembler;
pub mod config;
pub mod crawler;
pub mod error;
pub mod extractors;
pub mod models;
pub mod scrapers;
pub mod translation;
pub mod writer;

pub use assembler::RecordAssembler;
pub use config::{Config, Features};
pub use crawler::{CrawlReport, Crawler};
pub use models::ListingRecord;
