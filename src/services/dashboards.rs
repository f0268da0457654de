//! Dashboard service
//!
//! Orchestrates dashboard CRUD and widget management. Widget additions
//! validate every referenced metric id through the metric service before
//! anything is appended, so a failed add never mutates the dashboard.

use crate::core::entities::{Dashboard, Widget, WidgetPosition, WidgetSize, WidgetType};
use crate::services::metrics::MetricService;
use crate::storage::dashboards::{DashboardFilter, DashboardStore};
use crate::utils::error::{PulseboardError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Parameters for adding a widget
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWidget {
    pub title: String,
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    pub size: WidgetSize,
    pub metric_ids: Vec<String>,
    pub position: WidgetPosition,
}

/// Field-level updates merged onto an existing widget
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetUpdate {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub widget_type: Option<WidgetType>,
    pub size: Option<WidgetSize>,
    pub metric_ids: Option<Vec<String>>,
    pub position: Option<WidgetPosition>,
    pub config: Option<HashMap<String, serde_json::Value>>,
}

/// Field-level updates merged onto an existing dashboard
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Service for dashboard business logic
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DashboardStore>,
    metrics: MetricService,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DashboardStore>, metrics: MetricService) -> Self {
        Self { store, metrics }
    }

    /// Get a dashboard by its ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Dashboard>> {
        self.store.get(id).await
    }

    /// Get all dashboards passing the filter
    pub async fn get_all(&self, filter: &DashboardFilter) -> Result<Vec<Dashboard>> {
        self.store.get_all(filter).await
    }

    /// Create a new dashboard
    pub async fn create(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        owner: impl Into<String>,
        tags: Option<Vec<String>>,
    ) -> Result<Dashboard> {
        let mut dashboard = Dashboard::new(name, description, owner);
        if let Some(tags) = tags.filter(|t| !t.is_empty()) {
            dashboard.tags = Some(tags);
        }
        self.store.save(dashboard).await
    }

    /// Update dashboard properties (shallow merge)
    pub async fn update(&self, id: &str, updates: DashboardUpdate) -> Result<Dashboard> {
        let mut dashboard = self.require(id).await?;

        if let Some(name) = updates.name {
            dashboard.name = name;
        }
        if let Some(description) = updates.description {
            dashboard.description = description;
        }
        if let Some(tags) = updates.tags {
            dashboard.tags = Some(tags);
        }

        self.store.save(dashboard).await
    }

    /// Delete a dashboard, reporting whether it existed
    pub async fn delete(&self, id: &str) -> Result<bool> {
        self.store.delete(id).await
    }

    /// Add a widget to a dashboard
    ///
    /// Every referenced metric id must resolve; validation is sequential and
    /// fails fast on the first missing id, before the widget is constructed.
    pub async fn add_widget(&self, dashboard_id: &str, new_widget: NewWidget) -> Result<Dashboard> {
        self.require(dashboard_id).await?;

        for metric_id in &new_widget.metric_ids {
            if self.metrics.get_by_id(metric_id).await?.is_none() {
                return Err(PulseboardError::not_found(format!(
                    "Metric with ID {} not found",
                    metric_id
                )));
            }
        }

        let widget = Widget::new(
            new_widget.title,
            new_widget.widget_type,
            new_widget.size,
            new_widget.metric_ids,
            new_widget.position,
        );
        self.store.add_widget(dashboard_id, widget).await
    }

    /// Update a widget on a dashboard (shallow field overwrite)
    pub async fn update_widget(
        &self,
        dashboard_id: &str,
        widget_id: &str,
        updates: WidgetUpdate,
    ) -> Result<Dashboard> {
        let dashboard = self.require(dashboard_id).await?;

        let mut widget = dashboard
            .widgets
            .iter()
            .find(|w| w.id == widget_id)
            .cloned()
            .ok_or_else(|| {
                PulseboardError::not_found(format!(
                    "Widget with ID {} not found on dashboard",
                    widget_id
                ))
            })?;

        if let Some(title) = updates.title {
            widget.title = title;
        }
        if let Some(widget_type) = updates.widget_type {
            widget.widget_type = widget_type;
        }
        if let Some(size) = updates.size {
            widget.size = size;
        }
        if let Some(metric_ids) = updates.metric_ids {
            widget.metric_ids = metric_ids;
        }
        if let Some(position) = updates.position {
            widget.position = position;
        }
        if let Some(config) = updates.config {
            widget.config = Some(config);
        }

        self.store.update_widget(dashboard_id, widget).await
    }

    /// Remove a widget from a dashboard (idempotent for the widget)
    pub async fn remove_widget(&self, dashboard_id: &str, widget_id: &str) -> Result<Dashboard> {
        self.store.remove_widget(dashboard_id, widget_id).await
    }

    /// Set a dashboard as the default for a user
    ///
    /// Returns false without error when the dashboard does not exist.
    pub async fn set_as_default(&self, dashboard_id: &str, user_id: &str) -> Result<bool> {
        self.store.set_default(dashboard_id, user_id).await
    }

    async fn require(&self, id: &str) -> Result<Dashboard> {
        self.store.get(id).await?.ok_or_else(|| {
            PulseboardError::not_found(format!("Dashboard with ID {} not found", id))
        })
    }
}
