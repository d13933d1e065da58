pub const LOG_LEVEL: &str = "LOG_LEVEL";

pub const API_KEY: &str = "API_KEY";
pub const API_SECRET: &str = "API_SECRET";
pub const ACCESS_TOKEN: &str = "ACCESS_TOKEN";
pub const ACCESS_TOKEN_SECRET: &str = "ACCESS_TOKEN_SECRET";

pub const AQICN_TOKEN: &str = "AQICN_TOKEN";
pub const AQICN_STATION: &str = "AQICN_STATION";
pub const AQICN_BASE_URL: &str = "AQICN_BASE_URL";

pub const TWITTER_BASE_URL: &str = "TWITTER_BASE_URL";
pub const TWITTER_PLACE_ID: &str = "TWITTER_PLACE_ID";

pub const POLL_INTERVAL_SECS: &str = "POLL_INTERVAL_SECS";
pub const RETRY_BACKOFF_SECS: &str = "RETRY_BACKOFF_SECS";
pub const MAX_FETCH_RETRIES: &str = "MAX_FETCH_RETRIES";
pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
