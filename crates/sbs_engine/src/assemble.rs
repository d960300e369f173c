//! Turns the JSON listing endpoint response into one HTML document.
//!
//! The endpoint answers with an array of documents. The first one carrying a
//! `productLists` key holds the product tiles as HTML fragments under
//! `productLists[0].products[*].result`.

use serde::Deserialize;
use serde_json::Value;

use crate::{FailureKind, FetchError};

const PRODUCT_LISTS_KEY: &str = "productLists";

#[derive(Debug, Deserialize)]
struct ProductList {
    products: Vec<ListedProduct>,
}

#[derive(Debug, Deserialize)]
struct ListedProduct {
    result: String,
}

pub fn assemble_listing_html(body: &[u8]) -> Result<String, FetchError> {
    let documents: Vec<Value> = serde_json::from_slice(body)
        .map_err(|err| malformed(format!("listing is not a JSON array of documents: {err}")))?;

    let lists = documents
        .into_iter()
        .find_map(|mut doc| doc.get_mut(PRODUCT_LISTS_KEY).map(Value::take))
        .ok_or_else(|| malformed(format!("no document contains `{PRODUCT_LISTS_KEY}`")))?;

    let lists: Vec<ProductList> = serde_json::from_value(lists)
        .map_err(|err| malformed(format!("unexpected `{PRODUCT_LISTS_KEY}` shape: {err}")))?;

    let first = lists
        .into_iter()
        .next()
        .ok_or_else(|| malformed(format!("`{PRODUCT_LISTS_KEY}` is empty")))?;

    let fragments: Vec<String> = first.products.into_iter().map(|p| p.result).collect();
    Ok(fragments.join("\n"))
}

fn malformed(message: String) -> FetchError {
    FetchError::new(FailureKind::MalformedResponse, message)
}
