//! GitHub Copilot usage API endpoints
//!
//! Read-only integration surface. Each usage response pairs the raw
//! snapshot with the analytics derived from it.

use crate::server::routes::parse_iso_date;
use crate::server::state::AppState;
use crate::storage::github::DateRange;
use crate::utils::error::{PulseboardError, Result};
use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;

/// Query parameters for usage endpoints (GitHub wire names)
#[derive(Debug, Deserialize)]
pub struct UsageQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl UsageQuery {
    /// Build the reporting window; both bounds are required to form one
    fn into_range(self) -> Result<Option<DateRange>> {
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) => Ok(Some(DateRange {
                start_date: parse_iso_date("start_time", start)?,
                end_date: parse_iso_date("end_time", end)?,
            })),
            _ => Ok(None),
        }
    }
}

/// Copilot usage for an organization
/// GET /github/copilot/org/{org}
pub async fn org_usage(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<UsageQuery>,
) -> Result<HttpResponse> {
    let org = path.into_inner();
    let range = query.into_inner().into_range()?;

    let usage = data.copilot.org_usage(Some(&org), range).await?;
    let metrics = data.copilot.calculate_org_metrics(&usage);

    Ok(HttpResponse::Ok().json(json!({
        "usageData": usage,
        "metrics": metrics
    })))
}

/// Copilot usage for a team
/// GET /github/copilot/team/{id}
pub async fn team_usage(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<UsageQuery>,
) -> Result<HttpResponse> {
    let team_id: u64 = path
        .into_inner()
        .parse()
        .map_err(|_| PulseboardError::validation("Invalid team ID"))?;
    let range = query.into_inner().into_range()?;

    let usage = data.copilot.team_usage(team_id, range).await?;
    let metrics = data.copilot.calculate_team_metrics(&usage);

    Ok(HttpResponse::Ok().json(json!({
        "usageData": usage,
        "metrics": metrics
    })))
}

/// Organizations visible to the authenticated identity
/// GET /github/orgs
pub async fn list_organizations(data: web::Data<AppState>) -> Result<HttpResponse> {
    let organizations = data.copilot.user_organizations().await?;
    Ok(HttpResponse::Ok().json(json!({ "organizations": organizations })))
}

/// Teams within a named organization
/// GET /github/orgs/{org}/teams
pub async fn list_organization_teams(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let org = path.into_inner();
    let teams = data.copilot.organization_teams(Some(&org)).await?;
    Ok(HttpResponse::Ok().json(json!({ "teams": teams })))
}

/// Teams within the configured organization
/// GET /github/teams
pub async fn list_teams(data: web::Data<AppState>) -> Result<HttpResponse> {
    let teams = data.copilot.organization_teams(None).await?;
    Ok(HttpResponse::Ok().json(json!({ "teams": teams })))
}

/// Configure GitHub integration endpoints
pub fn configure_github_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/github")
            .route("/copilot/org/{org}", web::get().to(org_usage))
            .route("/copilot/team/{id}", web::get().to(team_usage))
            .route("/orgs", web::get().to(list_organizations))
            .route("/orgs/{org}/teams", web::get().to(list_organization_teams))
            .route("/teams", web::get().to(list_teams)),
    );
}
