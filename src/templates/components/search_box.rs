use crate::domain::ViewState;
use maud::{html, Markup};

/// GET form for the search text. The active sort rides along as hidden inputs.
pub fn search_box(view: &ViewState) -> Markup {
    html! {
        form class="search" method="get" action="/" role="search" {
            label for="search" { "Search" }
            input
                type="search"
                id="search"
                name="search"
                placeholder="Type to search in the table"
                value=(view.search);

            @if let Some(sort) = view.sort {
                input type="hidden" name="sort" value=(sort.field.as_str());
                input type="hidden" name="order" value=(sort.order.as_str());
            }

            button type="submit" { "Search" }
        }
    }
}
