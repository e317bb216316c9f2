use crate::domain::{Location, ViewState};
use crate::templates::{desktop_layout, location_table, search_box};
use chrono::{DateTime, Utc};
use maud::{html, Markup};

pub struct LocationsVm<'a> {
    pub view: &'a ViewState,
    /// Rows after search and sort.
    pub rows: &'a [Location],
    /// Rows held before filtering.
    pub total: usize,
    pub fetched_at: Option<DateTime<Utc>>,
    pub load_error: Option<&'a str>,
}

pub fn locations_page(vm: &LocationsVm) -> Markup {
    desktop_layout(
        "Locations",
        html! {
            main {
                @if let Some(err) = vm.load_error {
                    div class="notice" role="alert" {
                        "Could not load locations: " (err)
                    }
                }

                (search_box(vm.view))

                p class="muted" {
                    "Showing " strong { (vm.rows.len()) } " of " (vm.total) " locations"
                    @if let Some(at) = vm.fetched_at {
                        " · fetched " (at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                    }
                    " · "
                    a href=(vm.view.href("/export.xlsx")) { "Download .xlsx" }
                    " · "
                    a href=(vm.view.href("/locations.json")) { "JSON" }
                }

                (location_table(vm.view, vm.rows))
            }
        },
    )
}
