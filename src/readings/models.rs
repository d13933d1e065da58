use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Severity band of an AQI value, following the US EPA breakpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    OffTheScale,
}

impl Category {
    pub fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => Category::Good,
            51..=100 => Category::Moderate,
            101..=150 => Category::UnhealthyForSensitiveGroups,
            151..=200 => Category::Unhealthy,
            201..=300 => Category::VeryUnhealthy,
            301..=500 => Category::Hazardous,
            _ => Category::OffTheScale,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Good => "good",
            Category::Moderate => "moderate",
            Category::UnhealthyForSensitiveGroups => "unhealthy for sensitive groups",
            Category::Unhealthy => "unhealthy",
            Category::VeryUnhealthy => "very unhealthy",
            Category::Hazardous => "hazardous",
            Category::OffTheScale => "off the scale",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pollutant {
    Pm25,
    Pm10,
    Co,
    No2,
    O3,
    So2,
}

impl Pollutant {
    /// Table order; also the tie-break order when picking the dominant pollutant.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Co,
        Pollutant::No2,
        Pollutant::O3,
        Pollutant::So2,
    ];

    /// Key used by the provider in `dominentpol` and `iaqi`
    pub fn code(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::Co => "co",
            Pollutant::No2 => "no2",
            Pollutant::O3 => "o3",
            Pollutant::So2 => "so2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::So2 => "SO2",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single station observation, ready to be published.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub aqi: u32,
    pub category: Category,
    pub dominant_pollutant: Pollutant,
    pub observed_at: DateTime<Utc>,
    /// Station-local observation time as reported, e.g. `2024-01-01 12:00:00+08:00`
    pub local_time: String,
}

impl Reading {
    pub fn new(
        aqi: u32,
        dominant_pollutant: Pollutant,
        observed_at: DateTime<Utc>,
        local_time: String,
    ) -> Self {
        Reading {
            aqi,
            category: Category::from_aqi(aqi),
            dominant_pollutant,
            observed_at,
            local_time,
        }
    }

    pub fn is_newer_than(&self, other: &Reading) -> bool {
        self.observed_at > other.observed_at
    }
}

// Wire types for the AQICN feed endpoint. Only the fields we use are modelled.

#[derive(Debug, Deserialize)]
pub struct FeedEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct FeedData {
    pub aqi: serde_json::Value,
    #[serde(default)]
    pub dominentpol: Option<String>,
    #[serde(default)]
    pub iaqi: BTreeMap<String, SubIndex>,
    pub time: FeedTime,
}

/// Weather entries share the `iaqi` map with pollutants and may carry
/// non-numeric values, so `v` is only interpreted for pollutant keys.
#[derive(Debug, Deserialize)]
pub struct SubIndex {
    #[serde(default)]
    pub v: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct FeedTime {
    pub v: i64,
    pub s: String,
    pub tz: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_boundaries() {
        let cases = [
            (0, Category::Good),
            (50, Category::Good),
            (51, Category::Moderate),
            (100, Category::Moderate),
            (101, Category::UnhealthyForSensitiveGroups),
            (150, Category::UnhealthyForSensitiveGroups),
            (151, Category::Unhealthy),
            (200, Category::Unhealthy),
            (201, Category::VeryUnhealthy),
            (300, Category::VeryUnhealthy),
            (301, Category::Hazardous),
            (500, Category::Hazardous),
            (501, Category::OffTheScale),
            (999, Category::OffTheScale),
        ];
        for (aqi, expected) in cases {
            assert_eq!(Category::from_aqi(aqi), expected, "aqi {aqi}");
        }
    }

    #[test]
    fn every_aqi_in_range_has_one_category() {
        for aqi in 0..=500 {
            assert_ne!(Category::from_aqi(aqi), Category::OffTheScale);
        }
    }

    #[test]
    fn aqi_175_is_unhealthy() {
        assert_eq!(Category::from_aqi(175).to_string(), "unhealthy");
    }

    #[test]
    fn pollutant_codes_map_to_labels() {
        assert_eq!(Pollutant::from_code("pm25"), Some(Pollutant::Pm25));
        assert_eq!(Pollutant::from_code("so2").unwrap().label(), "SO2");
        assert_eq!(Pollutant::from_code("t"), None);
        assert_eq!(Pollutant::Pm25.to_string(), "PM2.5");
    }

    #[test]
    fn newer_reading_requires_strictly_later_time() {
        let t = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let a = Reading::new(40, Pollutant::O3, t, String::new());
        let b = Reading::new(60, Pollutant::O3, t, String::new());
        assert!(!b.is_newer_than(&a));

        let later = Reading::new(60, Pollutant::O3, t + chrono::Duration::hours(1), String::new());
        assert!(later.is_newer_than(&a));
        assert!(!a.is_newer_than(&later));
    }
}
