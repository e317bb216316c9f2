// src/domain/sort.rs

use crate::domain::location::{Location, LocationField};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown sort order {0:?}, expected \"asc\" or \"desc\"")]
pub struct UnknownOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(UnknownOrder(other.to_string())),
        }
    }
}

/// Returns a sorted copy of `locations`; the input is left untouched.
///
/// Stable under both orders: rows with equal keys keep their input order.
/// Descending flips the comparator; it is not a reversed ascending sort.
pub fn sort_by_field(
    field: LocationField,
    order: SortOrder,
    locations: &[Location],
) -> Vec<Location> {
    let mut sorted = locations.to_vec();
    sorted.sort_by(|a, b| match order {
        SortOrder::Ascending => field.compare(a, b),
        SortOrder::Descending => field.compare(b, a),
    });
    sorted
}
