use crate::domain::{Location, LocationField, SortOrder, ViewState};
use maud::{html, Markup};

/// The table itself. Every header links to the state its click produces.
pub fn location_table(view: &ViewState, rows: &[Location]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    @for field in LocationField::ALL {
                        (header_cell(view, field))
                    }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        @for value in row.values() {
                            td { (value.to_string()) }
                        }
                    }
                }
            }
        }
    }
}

fn header_cell(view: &ViewState, field: LocationField) -> Markup {
    let href = view.select_sort_field(field).href("/");
    let active = view.sort.filter(|s| s.field == field).map(|s| s.order);

    let (aria_sort, arrow) = match active {
        Some(SortOrder::Ascending) => (Some("ascending"), " ▲"),
        Some(SortOrder::Descending) => (Some("descending"), " ▼"),
        None => (None, ""),
    };

    html! {
        th scope="col" aria-sort=[aria_sort] {
            a href=(href) { (field.as_str()) }
            @if !arrow.is_empty() {
                span aria-hidden="true" { (arrow) }
            }
        }
    }
}
