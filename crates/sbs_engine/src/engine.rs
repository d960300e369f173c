use std::sync::Arc;

use engine_logging::engine_info;
use thiserror::Error;
use url::Url;

use crate::assemble::assemble_listing_html;
use crate::config::{ConfigError, ScrapeConfig};
use crate::document::Document;
use crate::extract::PageContext;
use crate::fetch::{Fetcher, ReqwestFetcher};
use crate::listing::{ListingExtractor, ListingResult};
use crate::{ErrorClass, FetchError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl EngineError {
    /// `None` for failures that happen before any request is made.
    pub fn class(&self) -> Option<ErrorClass> {
        match self {
            EngineError::Fetch(err) => Some(err.kind.class()),
            EngineError::Runtime(_) => None,
        }
    }
}

/// Runs the listing -> product pages pipeline for one configured endpoint.
pub struct Scraper {
    listing_url: Url,
    fetcher: Arc<dyn Fetcher>,
    listing: ListingExtractor,
}

impl Scraper {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ConfigError> {
        let fetcher = Arc::new(ReqwestFetcher::new(config.fetch_settings()));
        Self::with_fetcher(config, fetcher)
    }

    pub fn with_fetcher(config: &ScrapeConfig, fetcher: Arc<dyn Fetcher>) -> Result<Self, ConfigError> {
        config.validate()?;
        let listing = ListingExtractor::new(&config.selectors, fetcher.clone(), config.concurrency)?;
        Ok(Self {
            listing_url: config.parsed_listing_url()?,
            fetcher,
            listing,
        })
    }

    pub fn listing_url(&self) -> &Url {
        &self.listing_url
    }

    pub async fn run(&self) -> Result<ListingResult, FetchError> {
        let response = self.fetcher.fetch(self.listing_url.as_str()).await?;
        let html = assemble_listing_html(&response.bytes)?;
        let base = Url::parse(&response.metadata.final_url).unwrap_or_else(|_| self.listing_url.clone());

        let document = Document::parse(&html);
        let page = PageContext::new(Some(&base), html.len() as u64);
        let result = self.listing.extract_listing(&document, &page).await?;

        engine_info!(
            "Scraped {} products, total {}",
            result.len(),
            result.total
        );
        Ok(result)
    }

    /// Drive [`Scraper::run`] to completion on a private current-thread runtime.
    pub fn run_blocking(&self) -> Result<ListingResult, EngineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(runtime.block_on(self.run())?)
    }
}
