#![allow(dead_code)]
// Each test binary only uses some of these

pub const GOOD_PM25_FEED: &str = r#"
{
    "status": "ok",
    "data": {
        "aqi": 45,
        "idx": 3308,
        "attributions": [
            {"url": "http://www.aqhi.gov.hk/", "name": "Environmental Protection Department"}
        ],
        "city": {"geo": [22.2819, 114.1581], "name": "Central/Western, Hong Kong"},
        "dominentpol": "pm25",
        "iaqi": {
            "co": {"v": 5.6},
            "h": {"v": 78},
            "no2": {"v": 17.3},
            "o3": {"v": 21.2},
            "p": {"v": 1012},
            "pm10": {"v": 22},
            "pm25": {"v": 45},
            "so2": {"v": 2.1},
            "t": {"v": 24.5}
        },
        "time": {"s": "2023-11-14 22:00:00", "tz": "+08:00", "v": 1700000000}
    }
}
"#;

pub const GOOD_PM25_STATUS: &str = "AQI: 45. The dominant pollutant is PM2.5. (good.)";

pub const INVALID_KEY_FEED: &str = r#"{"status": "error", "data": "Invalid key"}"#;
