use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;

use crate::services::transit_service::query::EMMA_GRAPHQL_ENDPOINT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_endpoint: String,
    pub output_dir: PathBuf,
    pub fetch_interval: Duration,
    pub request_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub fetch_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: EMMA_GRAPHQL_ENDPOINT.to_string(),
            output_dir: PathBuf::from("public"),
            fetch_interval: Duration::from_secs(60),
            request_timeout: Duration::from_secs(30),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            fetch_on_start: true,
        }
    }
}

impl Config {
    /// Reads the process environment. Unset variables fall back to [`Config::default`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            api_endpoint: lookup("EMMA_API_ENDPOINT").unwrap_or(defaults.api_endpoint),
            output_dir: lookup("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            fetch_interval: parse_secs(&lookup, "FETCH_INTERVAL_SECS")?
                .unwrap_or(defaults.fetch_interval),
            request_timeout: parse_secs(&lookup, "REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout),
            bind_addr: parse_value::<SocketAddr, _>(&lookup, "BIND_ADDR")?
                .unwrap_or(defaults.bind_addr),
            fetch_on_start: parse_value::<bool, _>(&lookup, "FETCH_ON_START")?
                .unwrap_or(defaults.fetch_on_start),
        })
    }
}

fn parse_value<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                name,
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

fn parse_secs<F>(lookup: &F, name: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_value::<u64, _>(lookup, name)? {
        Some(0) => Err(ConfigError::InvalidValue {
            name,
            value: "0".to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        other => Ok(other.map(Duration::from_secs)),
    }
}
