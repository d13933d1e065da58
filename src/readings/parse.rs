use std::collections::BTreeMap;

use chrono::DateTime;
use serde_json::Value;

use super::models::{FeedData, FeedEnvelope, Pollutant, Reading, SubIndex};
use super::FetchError;

pub fn parse_feed(body: &str) -> Result<Reading, FetchError> {
    let envelope: FeedEnvelope = serde_json::from_str(body).map_err(|e| malformed(e, body))?;

    if envelope.status != "ok" {
        let message = match envelope.data {
            Value::String(msg) => msg,
            _ => envelope.status,
        };
        return Err(FetchError::Envelope(message));
    }

    let data: FeedData = serde_json::from_value(envelope.data).map_err(|e| malformed(e, body))?;

    let aqi = parse_aqi(&data.aqi)?;
    let dominant_pollutant = dominant_pollutant(data.dominentpol.as_deref(), &data.iaqi)
        .ok_or(FetchError::NoDominantPollutant)?;
    let observed_at =
        DateTime::from_timestamp(data.time.v, 0).ok_or(FetchError::InvalidTime(data.time.v))?;

    Ok(Reading::new(
        aqi,
        dominant_pollutant,
        observed_at,
        format!("{}{}", data.time.s, data.time.tz),
    ))
}

fn malformed(source: serde_json::Error, body: &str) -> FetchError {
    log::error!("Bad API data: {}", body);
    FetchError::MalformedJson {
        source,
        body: body.to_string(),
    }
}

/// The provider normally sends an integer, but stations that are offline
/// report `"-"`; numeric strings and floats are accepted and truncated.
fn parse_aqi(value: &Value) -> Result<u32, FetchError> {
    let aqi = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match aqi {
        Some(v) if (0.0..=u32::MAX as f64).contains(&v) => Ok(v as u32),
        _ => Err(FetchError::InvalidAqi(value.clone())),
    }
}

/// Prefer the provider's own `dominentpol` when it names a known pollutant,
/// otherwise fall back to the highest sub-index.
pub fn dominant_pollutant(
    dominentpol: Option<&str>,
    iaqi: &BTreeMap<String, SubIndex>,
) -> Option<Pollutant> {
    dominentpol
        .and_then(Pollutant::from_code)
        .or_else(|| max_sub_index(iaqi))
}

/// Pollutant with the strictly highest positive sub-index. Ties go to the
/// pollutant that comes first in `Pollutant::ALL`.
pub fn max_sub_index(iaqi: &BTreeMap<String, SubIndex>) -> Option<Pollutant> {
    let mut highest = 0.0;
    let mut dominant = None;
    for pollutant in Pollutant::ALL {
        if let Some(v) = iaqi.get(pollutant.code()).and_then(|sub| sub.v.as_f64()) {
            if v > highest {
                highest = v;
                dominant = Some(pollutant);
            }
        }
    }
    dominant
}
