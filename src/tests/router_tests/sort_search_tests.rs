use crate::router::handle;
use crate::tests::utils::{body_string, column, fixture_state, get, json_rows, CITIES};

/// The href behind a column header, with `&amp;` decoded.
fn header_link(body: &str, key: &str) -> String {
    let marker = format!(r#"href="/?sort={key}&amp;"#);
    let start = body.find(&marker).expect("header link") + r#"href=""#.len();
    let end = start + body[start..].find('"').unwrap();
    body[start..end].replace("&amp;", "&")
}

fn as_json(link: &str) -> String {
    link.replacen("/?", "/locations.json?", 1)
}

#[test]
fn clicking_city_twice_sorts_ascending_then_descending() {
    let state = fixture_state();

    let mut ascending: Vec<&str> = CITIES.to_vec();
    ascending.sort();
    let mut descending = ascending.clone();
    descending.reverse();

    // first click
    let page = body_string(handle(get("/"), &state).unwrap());
    let link = header_link(&page, "city");
    assert_eq!(link, "/?sort=city&order=asc");

    let rows = json_rows(handle(get(&as_json(&link)), &state).unwrap());
    assert_eq!(column(&rows, "city"), ascending);

    // second click on the same header
    let page = body_string(handle(get(&link), &state).unwrap());
    let link = header_link(&page, "city");
    assert_eq!(link, "/?sort=city&order=desc");

    let rows = json_rows(handle(get(&as_json(&link)), &state).unwrap());
    assert_eq!(column(&rows, "city"), descending);
}

#[test]
fn clicking_another_column_starts_ascending_again() {
    let state = fixture_state();
    let page = body_string(handle(get("/?sort=city&order=desc"), &state).unwrap());

    assert_eq!(header_link(&page, "postcode"), "/?sort=postcode&order=asc");
    assert_eq!(header_link(&page, "city"), "/?sort=city&order=asc");
}

#[test]
fn every_column_click_reorders_rows() {
    let state = fixture_state();
    let unordered = json_rows(handle(get("/locations.json"), &state).unwrap());

    for key in ["name", "city", "postcode", "number", "latitude", "longitude"] {
        let asc = json_rows(
            handle(get(&format!("/locations.json?sort={key}&order=asc")), &state).unwrap(),
        );
        let desc = json_rows(
            handle(get(&format!("/locations.json?sort={key}&order=desc")), &state).unwrap(),
        );

        assert_eq!(asc.len(), unordered.len());
        assert_ne!(asc, unordered, "{key} asc");
        assert_ne!(asc, desc, "{key}");
    }
}

#[test]
fn numeric_columns_sort_by_value() {
    let state = fixture_state();
    let rows = json_rows(handle(get("/locations.json?sort=number&order=asc"), &state).unwrap());

    let numbers: Vec<i64> = rows.iter().map(|r| r["number"].as_i64().unwrap()).collect();
    assert!(numbers.windows(2).all(|w| w[0] <= w[1]), "{numbers:?}");
}

#[test]
fn typing_a_city_keeps_only_matching_rows() {
    let state = fixture_state();

    for search in ["Kotka", "kotka", "KOT"] {
        let rows = json_rows(
            handle(get(&format!("/locations.json?search={search}")), &state).unwrap(),
        );
        assert_eq!(column(&rows, "city"), ["Kotka"], "{search}");
    }

    let page = body_string(handle(get("/?search=Kotka"), &state).unwrap());
    assert_eq!(page.matches("<tr>").count(), 2);
    assert!(page.contains("<td>Kotka</td>"));
}

#[test]
fn search_spans_all_columns() {
    let state = fixture_state();

    let rows = json_rows(handle(get("/locations.json?search=fi-"), &state).unwrap());
    assert_eq!(rows.len(), 10);
    assert!(column(&rows, "postcode").iter().all(|p| p.starts_with("FI-")));

    let rows = json_rows(handle(get("/locations.json?search=Katu+A"), &state).unwrap());
    assert_eq!(column(&rows, "name"), ["Katu A"]);
}

#[test]
fn search_then_sort_compose() {
    let state = fixture_state();

    // every row shares the state, so this keeps all of them
    let rows = json_rows(
        handle(get("/locations.json?search=uusimaa&sort=city&order=desc"), &state).unwrap(),
    );
    let mut expected: Vec<&str> = CITIES.to_vec();
    expected.sort();
    expected.reverse();
    assert_eq!(column(&rows, "city"), expected);

    let rows = json_rows(
        handle(get("/locations.json?search=oo&sort=city&order=desc"), &state).unwrap(),
    );
    assert_eq!(column(&rows, "city"), ["Porvoo", "Espoo"]);
}

#[test]
fn empty_search_shows_everything() {
    let state = fixture_state();
    let rows = json_rows(handle(get("/locations.json?search="), &state).unwrap());
    assert_eq!(column(&rows, "city"), CITIES);
}
