#![allow(dead_code)]

/// A product detail page shaped like the retailer's markup.
pub fn product_page(title: &str, price: &str, description: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{title} | Shop</title></head>
<body>
  <div class="productTitleDescriptionContainer">
    <h1>
      {title}
    </h1>
  </div>
  <div class="productSummary">
    <div class="pricing">
      <p class="pricePerUnit">
        {price}<abbr title="per">/</abbr><abbr title="kilogram">kg</abbr>
      </p>
    </div>
  </div>
  <div id="information">
    <div class="productText">
      <h3 class="productDataItemHeader">Description</h3>
      <p>{description}</p>
    </div>
  </div>
</body>
</html>
"#
    )
}

/// Pads `html` with trailing whitespace up to exactly `len` bytes.
pub fn padded_to(mut html: String, len: usize) -> String {
    assert!(html.len() <= len, "fixture larger than {len} bytes");
    let missing = len - html.len();
    html.push_str(&" ".repeat(missing));
    html
}

/// One product tile as it appears inside the listing JSON.
pub fn product_tile(href: &str, name: &str) -> String {
    format!(
        r#"<li><div class="product"><div class="productInfo"><h3><a href="{href}">{name}</a></h3></div></div></li>"#
    )
}

/// The listing endpoint payload wrapping `tiles`.
pub fn listing_json(tiles: &[String]) -> String {
    let products: Vec<serde_json::Value> = tiles
        .iter()
        .map(|tile| serde_json::json!({ "result": tile }))
        .collect();
    serde_json::json!([
        { "pageHeading": "Ripe & ready" },
        { "productLists": [ { "products": products } ] }
    ])
    .to_string()
}
