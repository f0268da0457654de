//! HTTP route modules
//!
//! Route handlers validate input into typed filters and requests, invoke
//! the services, and let the error type map failures to status codes.

pub mod dashboards;
pub mod github;
pub mod metrics;

use crate::utils::error::{PulseboardError, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Split a comma-separated query parameter into trimmed, non-empty items
pub(crate) fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a comma-separated query parameter into typed enum values
pub(crate) fn parse_list<T: serde::de::DeserializeOwned>(field: &str, raw: &str) -> Result<Vec<T>> {
    split_csv(raw)
        .into_iter()
        .map(|item| {
            serde_json::from_value::<T>(serde_json::Value::String(item.clone())).map_err(|_| {
                PulseboardError::validation(format!("Invalid {} value: {}", field, item))
            })
        })
        .collect()
}

/// Parse an ISO-8601 query parameter into a UTC timestamp
///
/// Accepts full RFC 3339 timestamps and bare dates (midnight UTC).
pub(crate) fn parse_iso_date(field: &str, raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = raw.parse::<NaiveDate>() {
        if let Some(start_of_day) = date.and_hms_opt(0, 0, 0) {
            return Ok(start_of_day.and_utc());
        }
    }

    Err(PulseboardError::validation(format!(
        "Invalid {} value: {}",
        field, raw
    )))
}
