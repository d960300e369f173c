use engine_logging::engine_debug;
use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page that can be queried with CSS selectors.
///
/// Parsing goes through html5ever's error-recovering tree builder, so
/// unbalanced or otherwise broken markup still yields a best-effort tree.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let html = Html::parse_document(text);
        if !html.errors.is_empty() {
            engine_debug!("Recovered from {} markup errors while parsing", html.errors.len());
        }
        Self { html }
    }

    /// First element matching `selector` in document order.
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// All elements matching `selector` in document order.
    pub fn select_all<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }
}

/// Concatenated text of `element` and all of its descendants.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
