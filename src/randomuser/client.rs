// client.rs
use crate::config::AppConfig;
use crate::randomuser::models::{RawUser, UsersResponse};
use crate::randomuser::FetchError;
use reqwest::blocking::Client;
use std::time::Instant;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("location_table/", env!("CARGO_PKG_VERSION"));

/// Anything that can hand over the decoded `results` array.
pub trait UserSource {
    fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError>;
}

pub struct RandomUserClient {
    client: Client,
    url: String,
}

impl RandomUserClient {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            // None lifts reqwest's default 30s limit
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            url: config.users_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl UserSource for RandomUserClient {
    /// Single GET, no retry. Any non-2xx status is a failure.
    fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError> {
        let start = Instant::now();

        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!(url = %self.url, %status, elapsed = ?start.elapsed(), "random user response");

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let users = decode_users(&text)?;
        info!(count = users.len(), "fetched users");
        Ok(users)
    }
}

/// Decodes a `{ "results": [...] }` body.
pub fn decode_users(body: &str) -> Result<Vec<RawUser>, FetchError> {
    let data: UsersResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(data.results)
}
