use anyhow::Context;
use listing_scout::scrapers::{GoogleTranslator, HttpFetcher, Translator};
use listing_scout::{writer, Config, Crawler};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Listing Scout");
    info!("==========================================");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        base_url = %config.base_url,
        languages = config.languages.len(),
        output = %config.output_path.display(),
        "Configuration loaded"
    );

    let fetcher = HttpFetcher::new().context("Failed to create HTTP client")?;
    if config.warm_up {
        fetcher.warm_up(&config.site_origin).await;
    }

    let translator = if config.features.translate_comments && !config.languages.is_empty() {
        Some(GoogleTranslator::new(&config.translator_url).context("Failed to create translator")?)
    } else {
        None
    };

    let crawler = Crawler::new(
        &config,
        &fetcher,
        translator.as_ref().map(|t| t as &dyn Translator),
    );
    let report = crawler.run().await;

    // Whatever was collected is saved, even when the crawl ended early
    writer::write_records(&config.output_path, &report.records).await?;
    if let Some(dir) = &config.record_dir {
        writer::write_record_files(dir, &report.records).await?;
    }

    let elapsed = report.finished_at - report.started_at;
    info!(
        records = report.records.len(),
        pages = report.pages_visited,
        skipped = report.skipped,
        started_at = %report.started_at.to_rfc3339(),
        elapsed_secs = elapsed.num_seconds(),
        "Run summary"
    );
    if report.skipped > 0 {
        warn!("{} listings could not be fetched", report.skipped);
    }
    if let Some(reason) = report.aborted {
        error!("Crawl ended early: {}", reason);
    }

    Ok(())
}
