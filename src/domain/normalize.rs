// src/domain/normalize.rs

use crate::domain::location::Location;
use crate::randomuser::models::{RawLocation, RawUser};
use thiserror::Error;

/// A raw record lacked a field the projection reads.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("record {index}: missing field `{path}`")]
    MissingField { index: usize, path: &'static str },
}

/// Projects every raw user into a flat [`Location`], preserving order.
///
/// All-or-nothing: the first malformed record aborts the whole batch.
pub fn normalize(users: &[RawUser]) -> Result<Vec<Location>, NormalizeError> {
    users
        .iter()
        .enumerate()
        .map(|(index, user)| Location::from_raw_user(index, user))
        .collect()
}

impl Location {
    /// Flattens one nested raw user. `index` only feeds the error message.
    pub fn from_raw_user(index: usize, user: &RawUser) -> Result<Self, NormalizeError> {
        let missing = |path| NormalizeError::MissingField { index, path };

        let loc: &RawLocation = user.location.as_ref().ok_or(missing("location"))?;
        let street = loc.street.as_ref().ok_or(missing("location.street"))?;
        let coords = loc
            .coordinates
            .as_ref()
            .ok_or(missing("location.coordinates"))?;

        Ok(Location {
            name: street.name.clone().ok_or(missing("location.street.name"))?,
            city: loc.city.clone().ok_or(missing("location.city"))?,
            state: loc.state.clone().ok_or(missing("location.state"))?,
            country: loc.country.clone().ok_or(missing("location.country"))?,
            postcode: loc
                .postcode
                .as_ref()
                .map(ToString::to_string)
                .ok_or(missing("location.postcode"))?,
            number: street.number.ok_or(missing("location.street.number"))?,
            latitude: coords
                .latitude
                .ok_or(missing("location.coordinates.latitude"))?,
            longitude: coords
                .longitude
                .ok_or(missing("location.coordinates.longitude"))?,
        })
    }
}
