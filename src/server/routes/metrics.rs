//! Metric API endpoints

use crate::core::entities::{MetricPeriod, MetricThreshold, MetricType};
use crate::server::routes::{parse_iso_date, parse_list};
use crate::server::state::AppState;
use crate::services::metrics::NewMetric;
use crate::storage::metrics::MetricFilter;
use crate::utils::error::{PulseboardError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Query parameters for the metric listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetricsQuery {
    /// Free-text match against key, name and description
    pub search: Option<String>,
    /// Comma-separated list of metric types
    pub types: Option<String>,
    /// Comma-separated list of periods
    pub periods: Option<String>,
    /// ISO date, inclusive lower bound on last update
    pub from_date: Option<String>,
    /// ISO date, inclusive upper bound on last update
    pub to_date: Option<String>,
}

impl ListMetricsQuery {
    /// Validate the raw query into a typed filter
    fn into_filter(self) -> Result<MetricFilter> {
        let mut filter = MetricFilter {
            search: self.search,
            ..Default::default()
        };

        if let Some(types) = self.types.as_deref() {
            filter.types = Some(parse_list::<MetricType>("types", types)?);
        }
        if let Some(periods) = self.periods.as_deref() {
            filter.periods = Some(parse_list::<MetricPeriod>("periods", periods)?);
        }
        if let Some(from) = self.from_date.as_deref() {
            filter.from_date = Some(parse_iso_date("fromDate", from)?);
        }
        if let Some(to) = self.to_date.as_deref() {
            filter.to_date = Some(parse_iso_date("toDate", to)?);
        }

        Ok(filter)
    }
}

/// Request payload for creating a metric
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMetricRequest {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub metric_type: MetricType,
    pub period: MetricPeriod,
    pub initial_value: f64,
    pub description: Option<String>,
    pub thresholds: Option<MetricThreshold>,
}

/// Request payload for updating a metric's value
#[derive(Debug, Deserialize)]
pub struct UpdateMetricRequest {
    pub value: f64,
}

/// List metrics with optional filtering
/// GET /metrics
pub async fn list_metrics(
    data: web::Data<AppState>,
    query: web::Query<ListMetricsQuery>,
) -> Result<HttpResponse> {
    let filter = query.into_inner().into_filter()?;
    let metrics = data.metrics.get_all(&filter).await?;

    Ok(HttpResponse::Ok().json(json!({ "metrics": metrics })))
}

/// Create a new metric
/// POST /metrics
pub async fn create_metric(
    data: web::Data<AppState>,
    payload: web::Json<CreateMetricRequest>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let metric = data
        .metrics
        .create(NewMetric {
            key: payload.key,
            name: payload.name,
            metric_type: payload.metric_type,
            period: payload.period,
            initial_value: payload.initial_value,
            description: payload.description,
            thresholds: payload.thresholds,
        })
        .await?;

    info!("Created metric {} ({})", metric.key, metric.id);
    Ok(HttpResponse::Created().json(json!({ "metric": metric })))
}

/// Fetch a single metric
/// GET /metrics/{id}
pub async fn get_metric(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let metric = data.metrics.get_by_id(&id).await?.ok_or_else(|| {
        PulseboardError::not_found(format!("Metric with ID {} not found", id))
    })?;

    Ok(HttpResponse::Ok().json(json!({ "metric": metric })))
}

/// Record a new value for a metric
/// PUT /metrics/{id}
pub async fn update_metric(
    data: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateMetricRequest>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    let metric = data.metrics.update_value(&id, payload.value).await?;

    Ok(HttpResponse::Ok().json(json!({ "metric": metric })))
}

/// Delete a metric
/// DELETE /metrics/{id}
pub async fn delete_metric(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    if !data.metrics.delete(&id).await? {
        return Err(PulseboardError::not_found(format!(
            "Metric with ID {} not found",
            id
        )));
    }

    info!("Deleted metric {}", id);
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

/// Configure metric endpoints
pub fn configure_metric_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/metrics")
            .route("", web::get().to(list_metrics))
            .route("", web::post().to(create_metric))
            .route("/{id}", web::get().to(get_metric))
            .route("/{id}", web::put().to(update_metric))
            .route("/{id}", web::delete().to(delete_metric)),
    );
}
