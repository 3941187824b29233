use axum::Json;
use sprinova_core::content;

/// GET /api/site — brand metadata, navigation, and contact details.
pub async fn get_site() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "meta": content::site_meta(),
        "nav": content::nav_links(),
        "contact": content::contact_info(),
    }))
}

/// GET /api/services — the services catalogue.
pub async fn list_services() -> Json<serde_json::Value> {
    Json(serde_json::json!(content::services()))
}
