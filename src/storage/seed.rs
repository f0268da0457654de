//! Sample-data seeding
//!
//! Explicit startup step replacing any lazy first-request initialization:
//! stores are populated once, and only when they are empty, so restarting a
//! process that already holds data (or pointing at a future persistent
//! backend) never duplicates the fixtures.

use crate::core::entities::{
    Dashboard, Metric, MetricPeriod, MetricThreshold, MetricType, Widget, WidgetPosition,
    WidgetSize, WidgetType,
};
use crate::storage::dashboards::{DashboardFilter, DashboardStore};
use crate::storage::metrics::{MetricFilter, MetricStore};
use crate::utils::error::Result;
use tracing::{debug, info};

/// Seed sample metrics and a sample dashboard into empty stores
pub async fn seed_sample_data(
    metrics: &dyn MetricStore,
    dashboards: &dyn DashboardStore,
) -> Result<()> {
    if !metrics.get_all(&MetricFilter::default()).await?.is_empty()
        || !dashboards
            .get_all(&DashboardFilter::default())
            .await?
            .is_empty()
    {
        debug!("Stores already hold data, skipping sample seeding");
        return Ok(());
    }

    info!("Seeding sample metrics and dashboard");

    let mut requests = Metric::new(
        "api_requests",
        "API Requests",
        MetricType::Count,
        MetricPeriod::Hourly,
        12_450.0,
    );
    requests.metadata.description = "Total API requests served".to_string();
    requests.metadata.unit = Some("requests".to_string());
    let requests = metrics.save(requests).await?;

    let mut error_rate = Metric::new(
        "error_rate",
        "Error Rate",
        MetricType::Percentage,
        MetricPeriod::Daily,
        0.8,
    );
    error_rate.metadata.description = "Share of requests ending in an error".to_string();
    error_rate.metadata.unit = Some("%".to_string());
    error_rate.thresholds = Some(MetricThreshold {
        warning: 2.0,
        critical: 5.0,
    });
    let error_rate = metrics.save(error_rate).await?;

    let mut response_time = Metric::new(
        "response_time_p95",
        "Response Time (p95)",
        MetricType::Duration,
        MetricPeriod::Hourly,
        184.0,
    );
    response_time.metadata.description = "95th percentile response time".to_string();
    response_time.metadata.unit = Some("ms".to_string());
    response_time.thresholds = Some(MetricThreshold {
        warning: 300.0,
        critical: 500.0,
    });
    let response_time = metrics.save(response_time).await?;

    let mut revenue = Metric::new(
        "monthly_revenue",
        "Monthly Revenue",
        MetricType::Monetary,
        MetricPeriod::Monthly,
        48_200.0,
    );
    revenue.metadata.description = "Recognized revenue for the current month".to_string();
    revenue.metadata.unit = Some("USD".to_string());
    let revenue = metrics.save(revenue).await?;

    let mut dashboard = Dashboard::new(
        "Operations Overview",
        "Service health and traffic at a glance",
        "system",
    );
    dashboard.tags = Some(vec!["sample".to_string(), "operations".to_string()]);
    dashboard.widgets = vec![
        Widget::new(
            "Requests",
            WidgetType::Counter,
            WidgetSize::Small,
            vec![requests.id.clone()],
            WidgetPosition {
                x: 0,
                y: 0,
                width: 1,
                height: 1,
            },
        ),
        Widget::new(
            "Error Rate",
            WidgetType::Gauge,
            WidgetSize::Small,
            vec![error_rate.id.clone()],
            WidgetPosition {
                x: 1,
                y: 0,
                width: 1,
                height: 1,
            },
        ),
        Widget::new(
            "Latency Trend",
            WidgetType::LineChart,
            WidgetSize::Large,
            vec![response_time.id.clone()],
            WidgetPosition {
                x: 0,
                y: 1,
                width: 2,
                height: 2,
            },
        ),
        Widget::new(
            "Revenue",
            WidgetType::StatusCard,
            WidgetSize::Medium,
            vec![revenue.id.clone()],
            WidgetPosition {
                x: 2,
                y: 0,
                width: 1,
                height: 1,
            },
        ),
    ];
    dashboards.save(dashboard).await?;

    info!("Sample data seeded: 4 metrics, 1 dashboard");
    Ok(())
}
