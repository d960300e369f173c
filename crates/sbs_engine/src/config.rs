use std::time::Duration;

use scraper::Selector;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::fetch::{FetchSettings, DEFAULT_USER_AGENT};

pub const DEFAULT_LISTING_URL: &str = concat!(
    "http://www.sainsburys.co.uk",
    "/webapp/wcs/stores/servlet/AjaxApplyFilterBrowseView",
    "?msg=&langId=44&categoryId=185749&storeId=10151",
    "&krypto=W4nD444s6eTWJa2gf91udgghPhw3b48DueW9z9C4cnnOIMY5lk2f8r2GwJkiLr9iA",
    "b6lUlJf3Z%2Bp%0ACbUBNmcotDEywy54CRfpDBxKGpCOHp0qvA68nVo29OoLis1UW4CV8kdc1",
    "IcoVeZxUZ%2FuBmFSJ5Jz%0Ah9rsDZkPn%2F9zErvK22TJAvNb1vE0m8LtWh9YyBAgBe73rpz",
    "7NM2llRHxiP02PJWQ0nDeyt324Taz%0AaMuK3%2FovR2uKRbx0vHMOi2EwHSef",
    "&ddkey=http:AjaxApplyFilterBrowseView",
);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {field} selector {selector:?}: {message}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        message: String,
    },
    #[error("invalid listing url {url:?}: {message}")]
    InvalidListingUrl { url: String, message: String },
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
}

/// CSS selectors for each extracted field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub title: String,
    pub price: String,
    pub description: String,
    pub product_link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: ".productTitleDescriptionContainer > h1".to_string(),
            price: ".productSummary .pricePerUnit".to_string(),
            description: "#information .productText".to_string(),
            product_link: ".productInfo a".to_string(),
        }
    }
}

/// Everything a scrape run needs. Every field has a default, so a config
/// file only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub listing_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_bytes: u64,
    pub user_agent: String,
    /// Product pages fetched at once; 1 means strictly sequential.
    pub concurrency: usize,
    pub selectors: SelectorConfig,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            timeout_secs: fetch.request_timeout.as_secs(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            max_bytes: fetch.max_bytes,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            concurrency: 1,
            selectors: SelectorConfig::default(),
        }
    }
}

impl ScrapeConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.timeout_secs),
            max_bytes: self.max_bytes,
            user_agent: self.user_agent.clone(),
            ..FetchSettings::default()
        }
    }

    pub fn parsed_listing_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.listing_url).map_err(|err| ConfigError::InvalidListingUrl {
            url: self.listing_url.clone(),
            message: err.to_string(),
        })
    }

    /// Checks everything that can be rejected before the first request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_listing_url()?;
        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        compile_selector("title", &self.selectors.title)?;
        compile_selector("price", &self.selectors.price)?;
        compile_selector("description", &self.selectors.description)?;
        compile_selector("product_link", &self.selectors.product_link)?;
        Ok(())
    }
}

pub(crate) fn compile_selector(field: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|err| ConfigError::InvalidSelector {
        field,
        selector: selector.to_string(),
        message: err.to_string(),
    })
}
