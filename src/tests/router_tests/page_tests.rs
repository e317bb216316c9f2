use crate::app::AppState;
use crate::router::handle;
use crate::tests::utils::{body_string, expect_err, fixture_state, get, FailingSource, CITIES};

#[test]
fn renders_a_row_for_each_user() {
    let state = fixture_state();
    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(body.matches("<th ").count(), 8);
    // header row plus one per user
    assert_eq!(body.matches("<tr>").count(), CITIES.len() + 1);
}

#[test]
fn renders_every_column_header() {
    let state = fixture_state();
    let body = body_string(handle(get("/"), &state).unwrap());

    for key in [
        "name", "city", "state", "country", "postcode", "number", "latitude", "longitude",
    ] {
        let link = format!(r#"href="/?sort={key}&amp;order=asc">{key}</a>"#);
        assert!(body.contains(&link), "missing header {key}");
    }
}

#[test]
fn renders_a_location_in_a_row() {
    let state = fixture_state();
    let body = body_string(handle(get("/"), &state).unwrap());

    let first = &state.locations[0];
    let cells: String = first
        .values()
        .map(|v| format!("<td>{v}</td>"))
        .collect();
    assert!(body.contains(&format!("<tr>{cells}</tr>")));
}

#[test]
fn search_box_keeps_its_value_and_the_sort() {
    let state = fixture_state();
    let body = body_string(handle(get("/?sort=number&order=desc&search=kat"), &state).unwrap());

    assert!(body.contains(r#"name="search" placeholder="Type to search in the table" value="kat""#));
    assert!(body.contains(r#"<input type="hidden" name="sort" value="number">"#));
    assert!(body.contains(r#"<input type="hidden" name="order" value="desc">"#));
}

#[test]
fn failed_load_shows_a_notice_and_no_rows() {
    let state = AppState::load(&FailingSource);
    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Could not load locations"));
    assert_eq!(body.matches("<tr>").count(), 1);
}

#[test]
fn unknown_path_is_not_found() {
    let state = fixture_state();
    let err = expect_err(handle(get("/admin"), &state));
    assert_eq!(err.status(), 404);
}

#[test]
fn bad_sort_column_is_a_bad_request() {
    let state = fixture_state();

    let err = expect_err(handle(get("/?sort=colour"), &state));
    assert_eq!(err.status(), 400);

    let err = expect_err(handle(get("/locations.json?sort=city&order=up"), &state));
    assert_eq!(err.status(), 400);
}

#[test]
fn error_page_carries_the_status() {
    let state = fixture_state();
    let err = expect_err(handle(get("/nope"), &state));
    let resp = crate::responses::error_response(err);

    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}
