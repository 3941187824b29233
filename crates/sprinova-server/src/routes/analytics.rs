use axum::Json;
use sprinova_core::analytics;

/// GET /api/analytics — the mock analytics dashboard.
pub async fn get_dashboard() -> Json<serde_json::Value> {
    Json(serde_json::json!(analytics::dashboard()))
}

/// GET /api/analytics/sample-report — pre-fill data for the summary tool.
pub async fn get_sample_report() -> Json<serde_json::Value> {
    Json(analytics::sample_report())
}
