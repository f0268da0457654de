//! Dashboard and widget entities
//!
//! A dashboard aggregates an ordered sequence of widgets, each referencing
//! the metrics it displays. Widgets are exclusively owned by their parent
//! dashboard and have no independent lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Visual size of a widget on the dashboard grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
}

/// Rendering style of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetType {
    Counter,
    Gauge,
    LineChart,
    BarChart,
    Table,
    StatusCard,
}

/// Widget placement in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetPosition {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A widget on a dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    pub size: WidgetSize,
    pub metric_ids: Vec<String>,
    pub position: WidgetPosition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, serde_json::Value>>,
}

impl Widget {
    /// Create a new widget with an empty configuration map
    pub fn new(
        title: impl Into<String>,
        widget_type: WidgetType,
        size: WidgetSize,
        metric_ids: Vec<String>,
        position: WidgetPosition,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            widget_type,
            size,
            metric_ids,
            position,
            config: Some(HashMap::new()),
        }
    }
}

/// Dashboard entity
///
/// `updated_at` is refreshed on every mutation, including widget add,
/// update and removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub widgets: Vec<Widget>,
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dashboard {
    /// Create a new dashboard with an empty widget sequence
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            widgets: Vec::new(),
            owner: owner.into(),
            is_default: None,
            tags: None,
            created_at: now,
            updated_at: now,
        }
    }
}
