//! Scraper engine: fetch a product listing, follow its product links and
//! extract one record per product page.
mod assemble;
mod config;
mod decode;
mod document;
mod engine;
mod extract;
mod fetch;
mod listing;
mod product;
mod report;
mod types;

pub use assemble::assemble_listing_html;
pub use config::{ConfigError, ScrapeConfig, SelectorConfig, DEFAULT_LISTING_URL};
pub use decode::{decode_text, DecodedText};
pub use document::{element_text, Document};
pub use engine::{EngineError, Scraper};
pub use extract::{Extractor, PageContext};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT};
pub use listing::{ListingExtractor, ListingResult};
pub use product::{format_size, parse_price, ProductExtractor, ProductItem};
pub use report::{build_report, render_report, write_report};
pub use types::{ErrorClass, FailureKind, FetchError, FetchMetadata, FetchOutput};
