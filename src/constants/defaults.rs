use std::time::Duration;

pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
pub const LOG_LEVEL: &str = "INFO";

pub const AQICN_BASE_URL: &str = "https://api.waqi.info/";
pub const AQICN_STATION: &str = "@3308";

pub const TWITTER_BASE_URL: &str = "https://api.twitter.com/1.1/";
// Hong Kong
pub const TWITTER_PLACE_ID: &str = "35fd5bacecc4c6e5";

pub const POLL_INTERVAL: Duration = Duration::from_secs(4 * 60);
pub const RETRY_BACKOFF: Duration = Duration::from_secs(15 * 60);
