use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const RANDOM_USER_API_BASE_URL: &str = "https://randomuser.me/api";
pub const DEFAULT_RESULTS: u32 = 20;
const DEFAULT_WORKERS: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} has an invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub api_base_url: String,
    pub results: u32,
    /// `None` waits for the API as long as it takes.
    pub timeout: Option<Duration>,
    pub max_workers: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr: SocketAddr = parse_var(
            &lookup,
            "LOCATION_TABLE_ADDR",
            SocketAddr::from(([127, 0, 0, 1], 3000)),
        )?;

        let api_base_url = lookup("RANDOM_USER_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| RANDOM_USER_API_BASE_URL.to_string());

        let results = parse_var(&lookup, "RANDOM_USER_RESULTS", DEFAULT_RESULTS)?;
        let timeout = parse_optional_var::<_, u64>(&lookup, "RANDOM_USER_TIMEOUT_SECS")?
            .map(Duration::from_secs);
        let max_workers = parse_var(&lookup, "LOCATION_TABLE_WORKERS", DEFAULT_WORKERS)?;

        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                var: "LOCATION_TABLE_WORKERS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            addr,
            api_base_url,
            results,
            timeout,
            max_workers,
        })
    }

    /// e.g. `https://randomuser.me/api/?results=20`
    pub fn users_url(&self) -> String {
        format!("{}/?results={}", self.api_base_url, self.results)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_optional_var(lookup, var)?.unwrap_or(default))
}

fn parse_optional_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                var,
                value: raw.clone(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}
