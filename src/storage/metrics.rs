//! Metric store
//!
//! Store trait plus the in-memory implementation backing it. The trait is
//! the seam for swapping in a real database later; the in-memory variant
//! owns its own lock so concurrent handlers stay consistent.

use crate::core::entities::{Metric, MetricPeriod, MetricType, MetricValue};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Typed filter for metric listings
#[derive(Debug, Clone, Default)]
pub struct MetricFilter {
    /// Restrict to these metric types
    pub types: Option<Vec<MetricType>>,
    /// Restrict to these reporting periods
    pub periods: Option<Vec<MetricPeriod>>,
    /// Case-insensitive substring match against key, name and description
    pub search: Option<String>,
    /// Inclusive lower bound on `metadata.last_updated`
    pub from_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `metadata.last_updated`
    pub to_date: Option<DateTime<Utc>>,
}

impl MetricFilter {
    /// Whether a metric passes every populated criterion
    pub fn matches(&self, metric: &Metric) -> bool {
        if let Some(types) = &self.types {
            if !types.is_empty() && !types.contains(&metric.metric_type) {
                return false;
            }
        }

        if let Some(periods) = &self.periods {
            if !periods.is_empty() && !periods.contains(&metric.period) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let search = search.to_lowercase();
            let matched = metric.key.to_lowercase().contains(&search)
                || metric.metadata.name.to_lowercase().contains(&search)
                || metric.metadata.description.to_lowercase().contains(&search);
            if !matched {
                return false;
            }
        }

        if self.from_date.is_some() || self.to_date.is_some() {
            // A metric without a last-updated stamp passes the date filter
            if let Some(last_updated) = metric.metadata.last_updated {
                if let Some(from) = self.from_date {
                    if last_updated < from {
                        return false;
                    }
                }
                if let Some(to) = self.to_date {
                    if last_updated > to {
                        return false;
                    }
                }
            }
        }

        true
    }
}

/// Persistence seam for metrics
#[async_trait]
pub trait MetricStore: Send + Sync {
    /// Get a metric by its ID
    async fn get(&self, id: &str) -> Result<Option<Metric>>;

    /// Get metrics by their IDs (missing ids are skipped)
    async fn get_many(&self, ids: &[String]) -> Result<Vec<Metric>>;

    /// Get all metrics passing the filter
    async fn get_all(&self, filter: &MetricFilter) -> Result<Vec<Metric>>;

    /// Save a metric (create or update)
    async fn save(&self, metric: Metric) -> Result<Metric>;

    /// Delete a metric by its ID, reporting whether it existed
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Historical values for a metric, optionally bounded (inclusive)
    async fn history(
        &self,
        id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<MetricValue>>;
}

/// In-memory metric store
#[derive(Debug, Default)]
pub struct InMemoryMetricStore {
    metrics: RwLock<HashMap<String, Metric>>,
}

impl InMemoryMetricStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetricStore for InMemoryMetricStore {
    async fn get(&self, id: &str) -> Result<Option<Metric>> {
        Ok(self.metrics.read().get(id).cloned())
    }

    async fn get_many(&self, ids: &[String]) -> Result<Vec<Metric>> {
        let metrics = self.metrics.read();
        Ok(ids.iter().filter_map(|id| metrics.get(id).cloned()).collect())
    }

    async fn get_all(&self, filter: &MetricFilter) -> Result<Vec<Metric>> {
        let metrics = self.metrics.read();
        Ok(metrics
            .values()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }

    async fn save(&self, metric: Metric) -> Result<Metric> {
        self.metrics
            .write()
            .insert(metric.id.clone(), metric.clone());
        Ok(metric)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.metrics.write().remove(id).is_some())
    }

    async fn history(
        &self,
        id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<MetricValue>> {
        let metrics = self.metrics.read();
        let Some(metric) = metrics.get(id) else {
            return Ok(Vec::new());
        };

        Ok(metric
            .history
            .iter()
            .filter(|entry| {
                from.is_none_or(|f| entry.timestamp >= f) && to.is_none_or(|t| entry.timestamp <= t)
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entities::{MetricPeriod, MetricType};

    fn sample(key: &str, name: &str, metric_type: MetricType) -> Metric {
        Metric::new(key, name, metric_type, MetricPeriod::Daily, 10.0)
    }

    #[tokio::test]
    async fn test_save_get_delete_roundtrip() {
        let store = InMemoryMetricStore::new();
        let metric = sample("api_requests", "API Requests", MetricType::Count);
        let id = metric.id.clone();

        store.save(metric).await.unwrap();
        assert!(store.get(&id).await.unwrap().is_some());
        assert!(store.delete(&id).await.unwrap());
        assert!(store.get(&id).await.unwrap().is_none());
        // Second delete reports absence instead of erroring
        assert!(!store.delete(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_many_skips_missing_ids() {
        let store = InMemoryMetricStore::new();
        let metric = sample("api_requests", "API Requests", MetricType::Count);
        let id = metric.id.clone();
        store.save(metric).await.unwrap();

        let found = store
            .get_many(&[id.clone(), "missing".to_string()])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);
    }

    #[tokio::test]
    async fn test_filter_by_type_and_search() {
        let store = InMemoryMetricStore::new();
        store
            .save(sample("api_requests", "API Requests", MetricType::Count))
            .await
            .unwrap();
        store
            .save(sample("error_rate", "Error Rate", MetricType::Percentage))
            .await
            .unwrap();

        let filter = MetricFilter {
            types: Some(vec![MetricType::Percentage]),
            ..Default::default()
        };
        let result = store.get_all(&filter).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].key, "error_rate");

        let filter = MetricFilter {
            search: Some("API".to_string()),
            ..Default::default()
        };
        let result = store.get_all(&filter).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].key, "api_requests");
    }

    #[tokio::test]
    async fn test_metric_without_last_updated_passes_date_filter() {
        let store = InMemoryMetricStore::new();
        let mut metric = sample("uptime", "Uptime", MetricType::Percentage);
        metric.metadata.last_updated = None;
        store.save(metric).await.unwrap();

        let filter = MetricFilter {
            from_date: Some(Utc::now()),
            ..Default::default()
        };
        assert_eq!(store.get_all(&filter).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_history_bounds_are_inclusive() {
        let store = InMemoryMetricStore::new();
        let metric = sample("latency", "Latency", MetricType::Duration);
        let id = metric.id.clone();
        let seeded_at = metric.history[0].timestamp;
        store.save(metric).await.unwrap();

        let history = store
            .history(&id, Some(seeded_at), Some(seeded_at))
            .await
            .unwrap();
        assert_eq!(history.len(), 1);

        assert!(store.history("no-such-id", None, None).await.unwrap().is_empty());
    }
}
