//! Dashboard API endpoints

use crate::server::routes::split_csv;
use crate::server::state::AppState;
use crate::services::dashboards::{DashboardUpdate, NewWidget, WidgetUpdate};
use crate::storage::dashboards::DashboardFilter;
use crate::utils::error::{PulseboardError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Query parameters for the dashboard listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDashboardsQuery {
    /// Exact owner match
    pub owner: Option<String>,
    /// Free-text match against name and description
    pub search: Option<String>,
    /// Comma-separated list of tags
    pub tags: Option<String>,
    /// "true" or "false"
    pub is_default: Option<String>,
}

impl ListDashboardsQuery {
    /// Validate the raw query into a typed filter
    fn into_filter(self) -> Result<DashboardFilter> {
        let mut filter = DashboardFilter {
            owner: self.owner,
            search: self.search,
            ..Default::default()
        };

        if let Some(tags) = self.tags.as_deref() {
            filter.tags = Some(split_csv(tags));
        }
        if let Some(raw) = self.is_default.as_deref() {
            filter.is_default = Some(match raw {
                "true" | "1" => true,
                "false" | "0" => false,
                other => {
                    return Err(PulseboardError::validation(format!(
                        "Invalid isDefault value: {}",
                        other
                    )));
                }
            });
        }

        Ok(filter)
    }
}

/// Request payload for creating a dashboard
#[derive(Debug, Deserialize)]
pub struct CreateDashboardRequest {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub tags: Option<Vec<String>>,
}

/// Request payload for marking a dashboard as a user's default
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDefaultRequest {
    pub user_id: String,
}

/// List dashboards with optional filtering
/// GET /dashboards
pub async fn list_dashboards(
    data: web::Data<AppState>,
    query: web::Query<ListDashboardsQuery>,
) -> Result<HttpResponse> {
    let filter = query.into_inner().into_filter()?;
    let dashboards = data.dashboards.get_all(&filter).await?;

    Ok(HttpResponse::Ok().json(json!({ "dashboards": dashboards })))
}

/// Create a new dashboard
/// POST /dashboards
pub async fn create_dashboard(
    data: web::Data<AppState>,
    payload: web::Json<CreateDashboardRequest>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let dashboard = data
        .dashboards
        .create(payload.name, payload.description, payload.owner, payload.tags)
        .await?;

    info!("Created dashboard {} ({})", dashboard.name, dashboard.id);
    Ok(HttpResponse::Created().json(json!({ "dashboard": dashboard })))
}

/// Fetch a single dashboard
/// GET /dashboards/{id}
pub async fn get_dashboard(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let dashboard = data.dashboards.get_by_id(&id).await?.ok_or_else(|| {
        PulseboardError::not_found(format!("Dashboard with ID {} not found", id))
    })?;

    Ok(HttpResponse::Ok().json(json!({ "dashboard": dashboard })))
}

/// Update dashboard properties
/// PUT /dashboards/{id}
pub async fn update_dashboard(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<DashboardUpdate>,
) -> Result<HttpResponse> {
    let dashboard = data
        .dashboards
        .update(&path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "dashboard": dashboard })))
}

/// Delete a dashboard
/// DELETE /dashboards/{id}
pub async fn delete_dashboard(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    if !data.dashboards.delete(&id).await? {
        return Err(PulseboardError::not_found(format!(
            "Dashboard with ID {} not found",
            id
        )));
    }

    info!("Deleted dashboard {}", id);
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

/// Add a widget to a dashboard
/// POST /dashboards/{id}/widgets
pub async fn add_widget(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<NewWidget>,
) -> Result<HttpResponse> {
    let dashboard = data
        .dashboards
        .add_widget(&path.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(json!({ "dashboard": dashboard })))
}

/// Update a widget on a dashboard
/// PUT /dashboards/{id}/widgets/{widgetId}
pub async fn update_widget(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
    payload: web::Json<WidgetUpdate>,
) -> Result<HttpResponse> {
    let (dashboard_id, widget_id) = path.into_inner();
    let dashboard = data
        .dashboards
        .update_widget(&dashboard_id, &widget_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "dashboard": dashboard })))
}

/// Remove a widget from a dashboard
/// DELETE /dashboards/{id}/widgets/{widgetId}
pub async fn remove_widget(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (dashboard_id, widget_id) = path.into_inner();
    let dashboard = data
        .dashboards
        .remove_widget(&dashboard_id, &widget_id)
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "dashboard": dashboard })))
}

/// Mark a dashboard as a user's default
/// PUT /dashboards/{id}/default
pub async fn set_default_dashboard(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<SetDefaultRequest>,
) -> Result<HttpResponse> {
    let success = data
        .dashboards
        .set_as_default(&path.into_inner(), &payload.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(json!({ "success": success })))
}

/// Configure dashboard endpoints
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboards")
            .route("", web::get().to(list_dashboards))
            .route("", web::post().to(create_dashboard))
            .route("/{id}", web::get().to(get_dashboard))
            .route("/{id}", web::put().to(update_dashboard))
            .route("/{id}", web::delete().to(delete_dashboard))
            .route("/{id}/widgets", web::post().to(add_widget))
            .route("/{id}/widgets/{widget_id}", web::put().to(update_widget))
            .route("/{id}/widgets/{widget_id}", web::delete().to(remove_widget))
            .route("/{id}/default", web::put().to(set_default_dashboard)),
    );
}
