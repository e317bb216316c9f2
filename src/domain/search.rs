// src/domain/search.rs

use crate::domain::location::Location;

/// Keeps rows where any cell contains `search_text`, ignoring case.
///
/// An empty search returns every row unchanged.
pub fn filter_by_search_text(search_text: &str, locations: &[Location]) -> Vec<Location> {
    if search_text.is_empty() {
        return locations.to_vec();
    }

    let needle = search_text.to_lowercase();
    locations
        .iter()
        .filter(|location| location.matches(&needle))
        .cloned()
        .collect()
}

impl Location {
    /// `needle` must already be lower-cased.
    fn matches(&self, needle: &str) -> bool {
        self.values()
            .any(|value| value.to_string().to_lowercase().contains(needle))
    }
}
