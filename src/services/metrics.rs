//! Metric service
//!
//! Orchestrates metric CRUD and trend computation over the metric store.
//! Trend and change percentage are always recomputed together from the new
//! value against the prior current value.

use crate::core::entities::{
    Metric, MetricPeriod, MetricThreshold, MetricType, MetricValue, TrendDirection,
};
use crate::storage::metrics::{MetricFilter, MetricStore};
use crate::utils::error::{PulseboardError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Change percentage within this band counts as stable, so a trend does not
/// flap on noise.
const TREND_DEAD_ZONE_PCT: f64 = 1.0;

/// Parameters for creating a metric
#[derive(Debug, Clone)]
pub struct NewMetric {
    pub key: String,
    pub name: String,
    pub metric_type: MetricType,
    pub period: MetricPeriod,
    pub initial_value: f64,
    pub description: Option<String>,
    pub thresholds: Option<MetricThreshold>,
}

/// Threshold crossing state for a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdStatus {
    pub has_crossed_warning: bool,
    pub has_crossed_critical: bool,
}

/// Service for metric business logic
#[derive(Clone)]
pub struct MetricService {
    store: Arc<dyn MetricStore>,
}

impl MetricService {
    pub fn new(store: Arc<dyn MetricStore>) -> Self {
        Self { store }
    }

    /// Get a metric by its ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Metric>> {
        self.store.get(id).await
    }

    /// Get all metrics passing the filter
    pub async fn get_all(&self, filter: &MetricFilter) -> Result<Vec<Metric>> {
        self.store.get_all(filter).await
    }

    /// Create a new metric
    pub async fn create(&self, new_metric: NewMetric) -> Result<Metric> {
        let mut metric = Metric::new(
            new_metric.key,
            new_metric.name,
            new_metric.metric_type,
            new_metric.period,
            new_metric.initial_value,
        );

        if let Some(description) = new_metric.description {
            metric.metadata.description = description;
        }
        if let Some(thresholds) = new_metric.thresholds {
            metric.thresholds = Some(thresholds);
        }

        self.store.save(metric).await
    }

    /// Update a metric's value, recomputing trend and change percentage
    pub async fn update_value(&self, id: &str, new_value: f64) -> Result<Metric> {
        let mut metric = self.store.get(id).await?.ok_or_else(|| {
            PulseboardError::not_found(format!("Metric with ID {} not found", id))
        })?;

        let previous = metric.current_value;
        let change_percentage = if previous != 0.0 {
            (new_value - previous) / previous.abs() * 100.0
        } else {
            0.0
        };

        let trend = if change_percentage > TREND_DEAD_ZONE_PCT {
            TrendDirection::Up
        } else if change_percentage < -TREND_DEAD_ZONE_PCT {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        };

        let now = Utc::now();
        metric.previous_value = Some(previous);
        metric.current_value = new_value;
        metric.trend = Some(trend);
        metric.change_percentage = Some(change_percentage);
        metric.history.push(MetricValue {
            value: new_value,
            timestamp: now,
        });
        metric.metadata.last_updated = Some(now);

        self.store.save(metric).await
    }

    /// Delete a metric, reporting whether it existed
    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete(id).await
    }

    /// Historical values for a metric within an inclusive time range
    pub async fn history_for_range(
        &self,
        id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<MetricValue>> {
        self.store.history(id, from, to).await
    }

    /// Check whether a metric's current value has crossed its thresholds
    ///
    /// Both flags are false when the metric or its thresholds are absent.
    pub async fn check_thresholds(&self, id: &str) -> Result<ThresholdStatus> {
        let status = match self.store.get(id).await? {
            Some(metric) => match metric.thresholds {
                Some(thresholds) => ThresholdStatus {
                    has_crossed_warning: metric.current_value >= thresholds.warning,
                    has_crossed_critical: metric.current_value >= thresholds.critical,
                },
                None => ThresholdStatus {
                    has_crossed_warning: false,
                    has_crossed_critical: false,
                },
            },
            None => ThresholdStatus {
                has_crossed_warning: false,
                has_crossed_critical: false,
            },
        };

        Ok(status)
    }
}
