// src/domain/location.rs

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One flat row of the table, projected from a raw user record.
///
/// Field declaration order is the column order; serde keeps it for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    /// Always text, whatever the source sent.
    pub postcode: String,
    pub number: i64,
    pub latitude: f64,
    pub longitude: f64,
}

/// The columns of a [`Location`], usable as sort keys and header labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationField {
    Name,
    City,
    State,
    Country,
    Postcode,
    Number,
    Latitude,
    Longitude,
}

impl LocationField {
    pub const ALL: [LocationField; 8] = [
        LocationField::Name,
        LocationField::City,
        LocationField::State,
        LocationField::Country,
        LocationField::Postcode,
        LocationField::Number,
        LocationField::Latitude,
        LocationField::Longitude,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationField::Name => "name",
            LocationField::City => "city",
            LocationField::State => "state",
            LocationField::Country => "country",
            LocationField::Postcode => "postcode",
            LocationField::Number => "number",
            LocationField::Latitude => "latitude",
            LocationField::Longitude => "longitude",
        }
    }

    pub fn value(self, location: &Location) -> FieldValue<'_> {
        match self {
            LocationField::Name => FieldValue::Text(&location.name),
            LocationField::City => FieldValue::Text(&location.city),
            LocationField::State => FieldValue::Text(&location.state),
            LocationField::Country => FieldValue::Text(&location.country),
            LocationField::Postcode => FieldValue::Text(&location.postcode),
            LocationField::Number => FieldValue::Integer(location.number),
            LocationField::Latitude => FieldValue::Float(location.latitude),
            LocationField::Longitude => FieldValue::Float(location.longitude),
        }
    }

    /// Natural order of this column: byte-wise for text, numeric otherwise.
    pub fn compare(self, a: &Location, b: &Location) -> Ordering {
        match self {
            LocationField::Name => a.name.cmp(&b.name),
            LocationField::City => a.city.cmp(&b.city),
            LocationField::State => a.state.cmp(&b.state),
            LocationField::Country => a.country.cmp(&b.country),
            LocationField::Postcode => a.postcode.cmp(&b.postcode),
            LocationField::Number => a.number.cmp(&b.number),
            LocationField::Latitude => a.latitude.total_cmp(&b.latitude),
            LocationField::Longitude => a.longitude.total_cmp(&b.longitude),
        }
    }
}

impl fmt::Display for LocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown column {0:?}")]
pub struct UnknownField(pub String);

impl FromStr for LocationField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocationField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A borrowed cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i64),
    Float(f64),
}

// Floats print in shortest round-trip form, so 42.0 shows as "42" and -0.0 as "0".
impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Float(x) if *x == 0.0 => f.write_str("0"),
            FieldValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl Location {
    /// Cells in column order.
    pub fn values(&self) -> impl Iterator<Item = FieldValue<'_>> + '_ {
        LocationField::ALL.into_iter().map(move |field| field.value(self))
    }
}
