use std::io::{self, Write};

use serde_json::{json, Value};

use crate::listing::ListingResult;
use crate::product::ProductItem;

/// Plain mapping of a listing: `{"results": [...], "total": n}`.
///
/// Keys are emitted in sorted order.
pub fn build_report(listing: &ListingResult) -> Value {
    json!({
        "results": listing.results.iter().map(product_entry).collect::<Vec<_>>(),
        "total": listing.total,
    })
}

fn product_entry(item: &ProductItem) -> Value {
    json!({
        "description": item.description,
        "size": item.size,
        "title": item.title,
        "unit_price": item.unit_price,
    })
}

/// Pretty-print `report` with two-space indentation and a trailing newline.
pub fn write_report<W: Write>(report: &Value, mut writer: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Same layout as [`write_report`], as a string.
pub fn render_report(report: &Value) -> serde_json::Result<String> {
    let mut rendered = serde_json::to_string_pretty(report)?;
    rendered.push('\n');
    Ok(rendered)
}
