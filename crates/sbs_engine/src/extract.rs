use url::Url;

use crate::document::Document;
use crate::FetchOutput;

/// What an extractor may know about a page besides its parsed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext<'a> {
    /// Where the page was fetched from; relative links resolve against it.
    pub url: Option<&'a Url>,
    /// Size of the raw body as received, before decoding.
    pub byte_len: u64,
}

impl<'a> PageContext<'a> {
    pub fn new(url: Option<&'a Url>, byte_len: u64) -> Self {
        Self { url, byte_len }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(None, bytes.len() as u64)
    }

    pub fn from_fetch(output: &FetchOutput, url: Option<&'a Url>) -> Self {
        Self::new(url, output.metadata.byte_len)
    }
}

/// Pulls one kind of record out of a parsed page.
///
/// Field extraction degrades to defaults instead of failing; extractors that
/// can fail say so in `T`.
pub trait Extractor<T>: Send + Sync {
    fn extract(&self, document: &Document, page: &PageContext<'_>) -> T;
}
