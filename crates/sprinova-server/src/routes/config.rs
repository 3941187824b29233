use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/config — effective configuration plus AI availability.
/// API keys are read from the environment and never echoed here.
pub async fn get_config(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "version": app.config.version,
        "site": app.config.site,
        "ai": {
            "model": app.config.ai.model,
            "enabled": app.config.ai.enabled,
            "available": app.ai.is_some(),
        },
        "notifications": app.config.notifications,
        "server": app.config.server,
    }))
}
