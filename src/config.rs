use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::constants::{defaults, envvars};
use crate::helpers::RetryPolicy;
use crate::interfaces::http_api::parse_base_url;
use crate::interfaces::twitter::Credentials;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug)]
pub struct AqicnConfig {
    pub token: String,
    pub station: String,
    pub base_url: Url,
}

#[derive(Clone, Debug)]
pub struct TwitterConfig {
    pub credentials: Credentials,
    pub base_url: Url,
    pub place_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
    pub retry: RetryPolicy,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub aqicn: AqicnConfig,
    pub twitter: TwitterConfig,
    pub polling: PollConfig,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            aqicn: AqicnConfig::from_env()?,
            twitter: TwitterConfig::from_env()?,
            polling: PollConfig::from_env()?,
            http_timeout: http_timeout_from_env()?,
        })
    }
}

impl AqicnConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(AqicnConfig {
            token: required(envvars::AQICN_TOKEN)?,
            station: optional(envvars::AQICN_STATION)
                .unwrap_or_else(|| defaults::AQICN_STATION.to_string()),
            base_url: url_or(envvars::AQICN_BASE_URL, defaults::AQICN_BASE_URL)?,
        })
    }
}

impl TwitterConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = Credentials {
            consumer_key: required(envvars::API_KEY)?,
            consumer_secret: required(envvars::API_SECRET)?,
            token: required(envvars::ACCESS_TOKEN)?,
            token_secret: required(envvars::ACCESS_TOKEN_SECRET)?,
        };
        // Set but empty means "post without a place"
        let place_id = match env::var(envvars::TWITTER_PLACE_ID) {
            Ok(id) if id.trim().is_empty() => None,
            Ok(id) => Some(id),
            Err(_) => Some(defaults::TWITTER_PLACE_ID.to_string()),
        };
        Ok(TwitterConfig {
            credentials,
            base_url: url_or(envvars::TWITTER_BASE_URL, defaults::TWITTER_BASE_URL)?,
            place_id,
        })
    }
}

impl PollConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(PollConfig {
            interval: secs_or(envvars::POLL_INTERVAL_SECS, defaults::POLL_INTERVAL)?,
            retry: RetryPolicy {
                interval: secs_or(envvars::RETRY_BACKOFF_SECS, defaults::RETRY_BACKOFF)?,
                max_retries: parsed(envvars::MAX_FETCH_RETRIES)?,
            },
        })
    }
}

pub fn http_timeout_from_env() -> Result<Duration, ConfigError> {
    secs_or(envvars::HTTP_TIMEOUT_SECS, defaults::API_REQUEST_TIMEOUT)
}

fn optional(var: &'static str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    optional(var).ok_or(ConfigError::Missing(var))
}

fn parsed<T>(var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional(var)
        .map(|value| {
            value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                var,
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}

fn secs_or(var: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    Ok(parsed::<u64>(var)?
        .map(Duration::from_secs)
        .unwrap_or(default))
}

fn url_or(var: &'static str, default: &str) -> Result<Url, ConfigError> {
    let value = optional(var).unwrap_or_else(|| default.to_string());
    parse_base_url(&value).map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}
