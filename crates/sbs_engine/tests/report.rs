use pretty_assertions::assert_eq;
use sbs_engine::{build_report, render_report, write_report, ListingResult, ProductItem};
use serde_json::json;

fn item(title: &str, unit_price: f64) -> ProductItem {
    ProductItem {
        title: title.to_string(),
        unit_price,
        description: "Sweet".to_string(),
        size: "38.5kb".to_string(),
    }
}

#[test]
fn report_has_results_and_total() {
    let listing = ListingResult::from_items(vec![item("A", 1.5), item("B", 2.0)]);
    let report = build_report(&listing);

    assert_eq!(
        report,
        json!({
            "results": [
                { "title": "A", "unit_price": 1.5, "description": "Sweet", "size": "38.5kb" },
                { "title": "B", "unit_price": 2.0, "description": "Sweet", "size": "38.5kb" }
            ],
            "total": 3.5
        })
    );
}

#[test]
fn rendered_report_is_sorted_and_indented() {
    let listing = ListingResult::from_items(vec![item("PRODUCT♡ TITLE ∑", 20.3)]);
    let rendered = render_report(&build_report(&listing)).unwrap();

    let expected = r#"{
  "results": [
    {
      "description": "Sweet",
      "size": "38.5kb",
      "title": "PRODUCT♡ TITLE ∑",
      "unit_price": 20.3
    }
  ],
  "total": 20.3
}
"#;
    assert_eq!(rendered, expected);
}

#[test]
fn empty_listing_renders_empty_results() {
    let rendered = render_report(&build_report(&ListingResult::from_items(Vec::new()))).unwrap();
    assert_eq!(rendered, "{\n  \"results\": [],\n  \"total\": 0.0\n}\n");
}

#[test]
fn rendered_report_matches_written_report() {
    let report = build_report(&ListingResult::from_items(vec![item("A", 1.5), item("B", 2.25)]));
    let mut written = Vec::new();
    write_report(&report, &mut written).unwrap();

    assert_eq!(render_report(&report).unwrap().as_bytes(), written.as_slice());
}
