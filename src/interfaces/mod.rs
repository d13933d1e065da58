pub mod aqicn;
pub mod http_api;
pub mod twitter;
