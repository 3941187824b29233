use axum::Json;
use sprinova_core::seo;

/// GET /api/seo — the mock SEO analyzer dashboard.
pub async fn get_dashboard() -> Json<serde_json::Value> {
    Json(serde_json::json!(seo::dashboard()))
}
