use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use crate::config::{compile_selector, ConfigError, SelectorConfig};
use crate::decode::decode_text;
use crate::document::{element_text, Document};
use crate::extract::{Extractor, PageContext};
use crate::FetchOutput;

static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("price pattern"));

const DESCRIPTION_LABEL: &str = "Description";

/// One product page. Every field is always present; missing markup yields
/// the empty string or zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductItem {
    pub title: String,
    pub unit_price: f64,
    pub description: String,
    pub size: String,
}

pub struct ProductExtractor {
    title: Selector,
    price: Selector,
    description: Selector,
}

impl ProductExtractor {
    pub fn new(selectors: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            title: compile_selector("title", &selectors.title)?,
            price: compile_selector("price", &selectors.price)?,
            description: compile_selector("description", &selectors.description)?,
        })
    }

    /// Decode, parse and extract a fetched product page in one go.
    pub fn extract_fetched(&self, output: &FetchOutput) -> ProductItem {
        let decoded = decode_text(&output.bytes, output.metadata.content_type.as_deref());
        let document = Document::parse(&decoded.text);
        self.extract(&document, &PageContext::from_fetch(output, None))
    }

    fn title(&self, document: &Document) -> String {
        document
            .select_first(&self.title)
            .map(|element| element_text(element).trim().to_string())
            .unwrap_or_default()
    }

    fn unit_price(&self, document: &Document) -> f64 {
        document
            .select_first(&self.price)
            .and_then(|element| parse_price(&element_text(element)))
            .unwrap_or(0.0)
    }

    fn description(&self, document: &Document) -> String {
        document
            .select_first(&self.description)
            .map(|element| strip_description_label(element_text(element).trim()).to_string())
            .unwrap_or_default()
    }
}

impl Extractor<ProductItem> for ProductExtractor {
    fn extract(&self, document: &Document, page: &PageContext<'_>) -> ProductItem {
        ProductItem {
            title: self.title(document),
            unit_price: self.unit_price(document),
            description: self.description(document),
            size: format_size(page.byte_len),
        }
    }
}

/// First unsigned decimal number in `text`, e.g. `20.3` from `£20.30/kg`.
pub fn parse_price(text: &str) -> Option<f64> {
    PRICE_PATTERN
        .find(text)
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .filter(|price| price.is_finite())
}

/// Body size in kibibytes with one decimal digit, e.g. `38.5kb`.
pub fn format_size(byte_len: u64) -> String {
    format!("{:.1}kb", byte_len as f64 / 1024.0)
}

fn strip_description_label(text: &str) -> &str {
    match text.strip_prefix(DESCRIPTION_LABEL) {
        Some(rest) => rest.trim_start(),
        None => text,
    }
}
