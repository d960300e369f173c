use std::sync::Arc;

use engine_logging::{engine_debug, engine_trace};
use futures_util::{stream, StreamExt, TryStreamExt};
use scraper::Selector;
use url::Url;

use crate::config::{compile_selector, ConfigError, SelectorConfig};
use crate::document::Document;
use crate::extract::{Extractor, PageContext};
use crate::fetch::Fetcher;
use crate::product::{ProductExtractor, ProductItem};
use crate::{FailureKind, FetchError};

/// Products in link-discovery order plus the sum of their unit prices.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingResult {
    pub results: Vec<ProductItem>,
    pub total: f64,
}

impl ListingResult {
    pub fn from_items(results: Vec<ProductItem>) -> Self {
        let total = results.iter().fold(0.0, |sum, item| sum + item.unit_price);
        Self { results, total }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

pub struct ListingExtractor {
    product_link: Selector,
    product: ProductExtractor,
    fetcher: Arc<dyn Fetcher>,
    concurrency: usize,
}

impl ListingExtractor {
    pub fn new(
        selectors: &SelectorConfig,
        fetcher: Arc<dyn Fetcher>,
        concurrency: usize,
    ) -> Result<Self, ConfigError> {
        if concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        Ok(Self {
            product_link: compile_selector("product_link", &selectors.product_link)?,
            product: ProductExtractor::new(selectors)?,
            fetcher,
            concurrency,
        })
    }

    /// Discover product links on the listing page and scrape each of them.
    ///
    /// All or nothing: an unusable link or the first product page that cannot
    /// be fetched aborts the whole listing.
    pub async fn extract_listing(
        &self,
        document: &Document,
        page: &PageContext<'_>,
    ) -> Result<ListingResult, FetchError> {
        let links = self.extract(document, page)?;
        self.crawl(links).await
    }

    /// Fetch and extract every link, keeping the given order even when
    /// several fetches are in flight.
    pub async fn crawl(&self, links: Vec<Url>) -> Result<ListingResult, FetchError> {
        engine_debug!(
            "Crawling {} product pages, up to {} at a time",
            links.len(),
            self.concurrency
        );
        let items = stream::iter(links)
            .map(|link| self.scrape_product(link))
            .buffered(self.concurrency)
            .try_collect::<Vec<_>>()
            .await?;
        Ok(ListingResult::from_items(items))
    }

    async fn scrape_product(&self, link: Url) -> Result<ProductItem, FetchError> {
        let output = self.fetcher.fetch(link.as_str()).await?;
        Ok(self.product.extract_fetched(&output))
    }
}

impl Extractor<Result<Vec<Url>, FetchError>> for ListingExtractor {
    /// Every product link in document order. A link that has no usable
    /// `href` fails the whole listing rather than silently dropping a product.
    fn extract(&self, document: &Document, page: &PageContext<'_>) -> Result<Vec<Url>, FetchError> {
        let mut links = Vec::new();
        for element in document.select_all(&self.product_link) {
            let href = element.value().attr("href").ok_or_else(|| {
                FetchError::new(FailureKind::InvalidUrl, "product link has no href")
            })?;
            let url = resolve_link(href, page.url)?;
            engine_trace!("Discovered product link {}", url);
            links.push(url);
        }
        Ok(links)
    }
}

fn resolve_link(reference: &str, base: Option<&Url>) -> Result<Url, FetchError> {
    let invalid = |message: String| {
        FetchError::new(
            FailureKind::InvalidUrl,
            format!("product link {reference:?}: {message}"),
        )
    };
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty href".to_string()));
    }
    match Url::parse(trimmed) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => match base {
            Some(base) => base.join(trimmed).map_err(|err| invalid(err.to_string())),
            None => Err(invalid("relative link without a base url".to_string())),
        },
        Err(err) => Err(invalid(err.to_string())),
    }
}
