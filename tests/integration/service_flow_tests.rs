//! Service flows over the in-memory stores

use crate::common::dashboard_services;
use pulseboard::PulseboardError;
use pulseboard::core::entities::{
    MetricPeriod, MetricThreshold, MetricType, WidgetPosition, WidgetSize, WidgetType,
};
use pulseboard::services::{NewMetric, NewWidget};
use pulseboard::storage::{DashboardFilter, MetricFilter};

fn metric_spec(key: &str, initial_value: f64) -> NewMetric {
    NewMetric {
        key: key.to_string(),
        name: key.to_string(),
        metric_type: MetricType::Count,
        period: MetricPeriod::Daily,
        initial_value,
        description: Some(format!("{} description", key)),
        thresholds: None,
    }
}

fn widget_spec(title: &str, metric_ids: Vec<String>) -> NewWidget {
    NewWidget {
        title: title.to_string(),
        widget_type: WidgetType::BarChart,
        size: WidgetSize::Medium,
        metric_ids,
        position: WidgetPosition {
            x: 0,
            y: 0,
            width: 2,
            height: 1,
        },
    }
}

#[tokio::test]
async fn test_metric_lifecycle_through_services() {
    let (metrics, _) = dashboard_services();

    let metric = metrics.create(metric_spec("deploys", 4.0)).await.unwrap();
    assert_eq!(metric.history.len(), 1);

    let updated = metrics.update_value(&metric.id, 6.0).await.unwrap();
    assert_eq!(updated.previous_value, Some(4.0));
    assert_eq!(updated.history.len(), 2);
    assert!((updated.change_percentage.unwrap() - 50.0).abs() < 1e-9);

    let all = metrics.get_all(&MetricFilter::default()).await.unwrap();
    assert_eq!(all.len(), 1);

    assert!(metrics.delete(&metric.id).await.unwrap());
    assert!(metrics.get_by_id(&metric.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_threshold_checks_through_services() {
    let (metrics, _) = dashboard_services();

    let mut spec = metric_spec("error_rate", 1.0);
    spec.metric_type = MetricType::Percentage;
    spec.thresholds = Some(MetricThreshold {
        warning: 2.0,
        critical: 5.0,
    });
    let metric = metrics.create(spec).await.unwrap();

    let status = metrics.check_thresholds(&metric.id).await.unwrap();
    assert!(!status.has_crossed_warning);

    metrics.update_value(&metric.id, 3.5).await.unwrap();
    let status = metrics.check_thresholds(&metric.id).await.unwrap();
    assert!(status.has_crossed_warning);
    assert!(!status.has_crossed_critical);
}

#[tokio::test]
async fn test_dashboard_round_trip_with_widgets() {
    let (metrics, dashboards) = dashboard_services();

    let m1 = metrics.create(metric_spec("one", 1.0)).await.unwrap();
    let m2 = metrics.create(metric_spec("two", 2.0)).await.unwrap();

    let dashboard = dashboards
        .create("Delivery", "Deploy health", "lead", Some(vec!["ci".into()]))
        .await
        .unwrap();

    dashboards
        .add_widget(&dashboard.id, widget_spec("First", vec![m1.id.clone()]))
        .await
        .unwrap();
    dashboards
        .add_widget(
            &dashboard.id,
            widget_spec("Second", vec![m1.id.clone(), m2.id.clone()]),
        )
        .await
        .unwrap();

    let fetched = dashboards.get_by_id(&dashboard.id).await.unwrap().unwrap();
    assert_eq!(fetched.widgets.len(), 2);
    assert_eq!(fetched.widgets[0].title, "First");
    assert_eq!(fetched.widgets[1].title, "Second");
    assert_eq!(fetched.widgets[1].metric_ids.len(), 2);
}

#[tokio::test]
async fn test_failed_widget_add_is_atomic() {
    let (metrics, dashboards) = dashboard_services();
    let metric = metrics.create(metric_spec("real", 1.0)).await.unwrap();
    let dashboard = dashboards.create("Ops", "", "lead", None).await.unwrap();

    let err = dashboards
        .add_widget(
            &dashboard.id,
            widget_spec("Broken", vec![metric.id, "ghost".to_string()]),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, PulseboardError::NotFound(_)));

    let fetched = dashboards.get_by_id(&dashboard.id).await.unwrap().unwrap();
    assert!(fetched.widgets.is_empty());
}

#[tokio::test]
async fn test_deleting_dashboard_clears_user_default() {
    let (_, dashboards) = dashboard_services();

    let dashboard = dashboards.create("Ops", "", "lead", None).await.unwrap();
    assert!(
        dashboards
            .set_as_default(&dashboard.id, "lead")
            .await
            .unwrap()
    );

    assert!(dashboards.delete(&dashboard.id).await.unwrap());

    // Re-creating and re-assigning works from a clean slate
    let replacement = dashboards.create("Ops v2", "", "lead", None).await.unwrap();
    assert!(
        dashboards
            .set_as_default(&replacement.id, "lead")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_dashboard_filters_compose() {
    let (_, dashboards) = dashboard_services();

    dashboards
        .create("Ops", "Operational overview", "lead", Some(vec!["prod".into()]))
        .await
        .unwrap();
    dashboards
        .create("Sandbox", "Scratch space", "dev", None)
        .await
        .unwrap();

    let filter = DashboardFilter {
        owner: Some("lead".to_string()),
        search: Some("overview".to_string()),
        tags: Some(vec!["prod".to_string()]),
        ..Default::default()
    };
    let result = dashboards.get_all(&filter).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Ops");
}
