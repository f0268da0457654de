//! Dashboard store
//!
//! In-memory dashboards plus the per-user default-dashboard assignment map.
//! Deleting a dashboard clears any default assignment pointing at it.

use crate::core::entities::{Dashboard, Widget};
use crate::utils::error::{PulseboardError, Result};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Typed filter for dashboard listings
#[derive(Debug, Clone, Default)]
pub struct DashboardFilter {
    /// Exact owner match
    pub owner: Option<String>,
    /// Case-insensitive substring match against name and description
    pub search: Option<String>,
    /// Match dashboards carrying any of these tags
    pub tags: Option<Vec<String>>,
    /// Match on the `is_default` flag
    pub is_default: Option<bool>,
}

impl DashboardFilter {
    /// Whether a dashboard passes every populated criterion
    pub fn matches(&self, dashboard: &Dashboard) -> bool {
        if let Some(owner) = &self.owner {
            if &dashboard.owner != owner {
                return false;
            }
        }

        if let Some(is_default) = self.is_default {
            if dashboard.is_default.unwrap_or(false) != is_default {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let search = search.to_lowercase();
            let matched = dashboard.name.to_lowercase().contains(&search)
                || dashboard.description.to_lowercase().contains(&search);
            if !matched {
                return false;
            }
        }

        if let Some(tags) = &self.tags {
            if !tags.is_empty() {
                let overlaps = dashboard
                    .tags
                    .as_ref()
                    .is_some_and(|own| own.iter().any(|t| tags.contains(t)));
                if !overlaps {
                    return false;
                }
            }
        }

        true
    }
}

/// Persistence seam for dashboards
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Get a dashboard by its ID
    async fn get(&self, id: &str) -> Result<Option<Dashboard>>;

    /// Get all dashboards passing the filter
    async fn get_all(&self, filter: &DashboardFilter) -> Result<Vec<Dashboard>>;

    /// Save a dashboard (create or update), refreshing `updated_at`
    async fn save(&self, dashboard: Dashboard) -> Result<Dashboard>;

    /// Delete a dashboard, clearing any default assignments pointing at it
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Append a widget to a dashboard
    async fn add_widget(&self, dashboard_id: &str, widget: Widget) -> Result<Dashboard>;

    /// Replace a widget on a dashboard, matched by widget id
    async fn update_widget(&self, dashboard_id: &str, widget: Widget) -> Result<Dashboard>;

    /// Remove a widget by id; removing an absent widget is not an error
    async fn remove_widget(&self, dashboard_id: &str, widget_id: &str) -> Result<Dashboard>;

    /// Record a user's default dashboard; false when the dashboard is absent
    async fn set_default(&self, dashboard_id: &str, user_id: &str) -> Result<bool>;

    /// The dashboard id a user has marked as default, if any
    async fn default_for_user(&self, user_id: &str) -> Result<Option<String>>;
}

/// In-memory dashboard store
#[derive(Debug, Default)]
pub struct InMemoryDashboardStore {
    dashboards: RwLock<HashMap<String, Dashboard>>,
    user_defaults: RwLock<HashMap<String, String>>,
}

impl InMemoryDashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn missing(id: &str) -> PulseboardError {
        PulseboardError::not_found(format!("Dashboard with ID {} not found", id))
    }
}

#[async_trait]
impl DashboardStore for InMemoryDashboardStore {
    async fn get(&self, id: &str) -> Result<Option<Dashboard>> {
        Ok(self.dashboards.read().get(id).cloned())
    }

    async fn get_all(&self, filter: &DashboardFilter) -> Result<Vec<Dashboard>> {
        let dashboards = self.dashboards.read();
        Ok(dashboards
            .values()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect())
    }

    async fn save(&self, mut dashboard: Dashboard) -> Result<Dashboard> {
        dashboard.updated_at = Utc::now();
        self.dashboards
            .write()
            .insert(dashboard.id.clone(), dashboard.clone());
        Ok(dashboard)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        self.user_defaults
            .write()
            .retain(|_, dashboard_id| dashboard_id != id);
        Ok(self.dashboards.write().remove(id).is_some())
    }

    async fn add_widget(&self, dashboard_id: &str, widget: Widget) -> Result<Dashboard> {
        let mut dashboards = self.dashboards.write();
        let dashboard = dashboards
            .get_mut(dashboard_id)
            .ok_or_else(|| Self::missing(dashboard_id))?;

        dashboard.widgets.push(widget);
        dashboard.updated_at = Utc::now();
        Ok(dashboard.clone())
    }

    async fn update_widget(&self, dashboard_id: &str, widget: Widget) -> Result<Dashboard> {
        let mut dashboards = self.dashboards.write();
        let dashboard = dashboards
            .get_mut(dashboard_id)
            .ok_or_else(|| Self::missing(dashboard_id))?;

        let slot = dashboard
            .widgets
            .iter_mut()
            .find(|w| w.id == widget.id)
            .ok_or_else(|| {
                PulseboardError::not_found(format!(
                    "Widget with ID {} not found on dashboard",
                    widget.id
                ))
            })?;

        *slot = widget;
        dashboard.updated_at = Utc::now();
        Ok(dashboard.clone())
    }

    async fn remove_widget(&self, dashboard_id: &str, widget_id: &str) -> Result<Dashboard> {
        let mut dashboards = self.dashboards.write();
        let dashboard = dashboards
            .get_mut(dashboard_id)
            .ok_or_else(|| Self::missing(dashboard_id))?;

        dashboard.widgets.retain(|w| w.id != widget_id);
        dashboard.updated_at = Utc::now();
        Ok(dashboard.clone())
    }

    async fn set_default(&self, dashboard_id: &str, user_id: &str) -> Result<bool> {
        if !self.dashboards.read().contains_key(dashboard_id) {
            return Ok(false);
        }

        self.user_defaults
            .write()
            .insert(user_id.to_string(), dashboard_id.to_string());
        Ok(true)
    }

    async fn default_for_user(&self, user_id: &str) -> Result<Option<String>> {
        Ok(self.user_defaults.read().get(user_id).cloned())
    }
}
