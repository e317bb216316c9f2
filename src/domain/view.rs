// src/domain/view.rs

use crate::domain::location::{Location, LocationField, UnknownField};
use crate::domain::search::filter_by_search_text;
use crate::domain::sort::{sort_by_field, SortOrder, UnknownOrder};
use thiserror::Error;
use url::form_urlencoded;

/// Direction applied when a column is selected for the first time.
pub const INITIAL_SORT_ORDER: SortOrder = SortOrder::Ascending;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: LocationField,
    pub order: SortOrder,
}

/// Interaction state of the table: the active sort column and the search box.
///
/// Round-trips through a query string
/// (`sort=city&order=desc&search=ber`) so every header click and search
/// submission is a plain GET.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub sort: Option<SortState>,
    pub search: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ViewStateError {
    #[error(transparent)]
    Field(#[from] UnknownField),
    #[error(transparent)]
    Order(#[from] UnknownOrder),
}

impl ViewState {
    /// Search first, then sort. `locations` itself is never touched.
    pub fn apply(&self, locations: &[Location]) -> Vec<Location> {
        let filtered = filter_by_search_text(&self.search, locations);

        match self.sort {
            Some(SortState { field, order }) => sort_by_field(field, order, &filtered),
            None => filtered,
        }
    }

    /// State after clicking the `field` header.
    ///
    /// A new column starts at [`INITIAL_SORT_ORDER`]; the active column flips.
    pub fn select_sort_field(&self, field: LocationField) -> ViewState {
        let order = match self.sort {
            Some(current) if current.field == field => current.order.toggled(),
            _ => INITIAL_SORT_ORDER,
        };

        ViewState {
            sort: Some(SortState { field, order }),
            search: self.search.clone(),
        }
    }

    /// Decodes a raw (still percent-encoded) query string.
    ///
    /// Unknown keys are ignored. `order` without `sort` is ignored too;
    /// `sort` without `order` uses [`INITIAL_SORT_ORDER`].
    pub fn from_query(query: &str) -> Result<Self, ViewStateError> {
        let mut field = None;
        let mut order = None;
        let mut search = String::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "sort" if !value.is_empty() => field = Some(value.parse::<LocationField>()?),
                "order" if !value.is_empty() => order = Some(value.parse::<SortOrder>()?),
                "search" => search = value.into_owned(),
                _ => {}
            }
        }

        Ok(ViewState {
            sort: field.map(|field| SortState {
                field,
                order: order.unwrap_or(INITIAL_SORT_ORDER),
            }),
            search,
        })
    }

    /// Encodes the state; empty parts are left out.
    pub fn to_query(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());

        if let Some(SortState { field, order }) = self.sort {
            out.append_pair("sort", field.as_str());
            out.append_pair("order", order.as_str());
        }
        if !self.search.is_empty() {
            out.append_pair("search", &self.search);
        }

        out.finish()
    }

    /// `path` plus `?query` when there is any state to carry.
    pub fn href(&self, path: &str) -> String {
        let query = self.to_query();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}
