//! Metric entity and related value types
//!
//! A metric is a measurable value with a recorded history, thresholds and
//! derived trend information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of value a metric carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    Count,
    Percentage,
    Duration,
    Monetary,
}

/// Reporting period of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricPeriod {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

/// Direction of the most recent value change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// A single recorded value in a metric's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Warning and critical thresholds for a metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricThreshold {
    pub warning: f64,
    pub critical: f64,
}

/// Descriptive metadata attached to a metric
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricMetadata {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Metric entity
///
/// `history` is never empty after creation: the factory seeds it with the
/// initial value. `trend` and `change_percentage` are recomputed together on
/// every value update, never set independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: String,
    pub key: String,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub period: MetricPeriod,
    pub current_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percentage: Option<f64>,
    pub history: Vec<MetricValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<MetricThreshold>,
    pub metadata: MetricMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
}

impl Metric {
    /// Create a new metric with its history seeded from the initial value
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        metric_type: MetricType,
        period: MetricPeriod,
        current_value: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            key: key.into(),
            metric_type,
            period,
            current_value,
            previous_value: None,
            trend: None,
            change_percentage: None,
            history: vec![MetricValue {
                value: current_value,
                timestamp: now,
            }],
            thresholds: None,
            metadata: MetricMetadata {
                name: name.into(),
                description: String::new(),
                unit: None,
                owner: None,
                data_source: None,
                last_updated: Some(now),
            },
            target_value: None,
        }
    }
}
