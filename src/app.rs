use crate::domain::{normalize, Location};
use crate::randomuser::UserSource;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Everything the handlers read. Built once at start-up, never mutated.
#[derive(Debug, Default)]
pub struct AppState {
    pub locations: Vec<Location>,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Set when the start-up fetch or normalization failed; `locations` is then empty.
    pub load_error: Option<String>,
}

impl AppState {
    /// Performs the single fetch and normalizes the whole batch.
    ///
    /// A failure leaves the table empty and is remembered for display.
    pub fn load(source: &dyn UserSource) -> Self {
        let result = source
            .fetch_users()
            .map_err(|e| e.to_string())
            .and_then(|users| normalize(&users).map_err(|e| e.to_string()));

        match result {
            Ok(locations) => {
                info!(rows = locations.len(), "locations loaded");
                Self::from_locations(locations)
            }
            Err(err) => {
                error!(error = %err, "failed to load locations");
                Self {
                    locations: Vec::new(),
                    fetched_at: None,
                    load_error: Some(err),
                }
            }
        }
    }

    pub fn from_locations(locations: Vec<Location>) -> Self {
        Self {
            locations,
            fetched_at: Some(Utc::now()),
            load_error: None,
        }
    }
}
