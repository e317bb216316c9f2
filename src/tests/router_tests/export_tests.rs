use crate::router::handle;
use crate::tests::utils::{body_string, column, fixture_state, get, json_rows};
use std::io::Read;

#[test]
fn json_rows_carry_the_eight_columns_in_order() {
    let state = fixture_state();
    let resp = handle(get("/locations.json"), &state).unwrap();

    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let body = body_string(resp);
    let first_row = &body[..body.find('}').unwrap()];
    let positions: Vec<usize> = [
        "name", "city", "state", "country", "postcode", "number", "latitude", "longitude",
    ]
    .iter()
    .map(|k| first_row.find(&format!("\"{k}\":")).expect(k))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn postcodes_are_always_strings() {
    let state = fixture_state();
    let rows = json_rows(handle(get("/locations.json"), &state).unwrap());

    assert!(rows.iter().all(|r| r["postcode"].is_string()));
    assert_eq!(column(&rows, "postcode")[..2], ["10000", "FI-20041"]);
}

#[test]
fn xlsx_export_is_an_attachment() {
    let state = fixture_state();
    let mut resp = handle(get("/export.xlsx?search=kotka"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Disposition").and_then(|v| v.to_str().ok()),
        Some("attachment; filename=\"locations.xlsx\"")
    );

    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
