//! Notification center API. Every mutation responds with the queue snapshot
//! after the operation; operations on absent ids succeed as no-ops, matching
//! the manager's total-operation contract.

use axum::extract::{Path, State};
use axum::Json;
use sprinova_core::notification::{NotificationId, ToastPatch, ToastRequest};

use crate::state::AppState;

/// GET /api/notifications — current queue, newest first.
pub async fn list(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!(app.notifier.snapshot()))
}

/// POST /api/notifications — add a toast; returns its id and the new queue.
pub async fn add(
    State(app): State<AppState>,
    Json(request): Json<ToastRequest>,
) -> Json<serde_json::Value> {
    let handle = app.notifier.add(request);
    Json(serde_json::json!({
        "id": handle.id(),
        "queue": app.notifier.snapshot(),
    }))
}

/// PATCH /api/notifications/{id} — merge a partial update into one entry.
pub async fn update(
    State(app): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<ToastPatch>,
) -> Json<serde_json::Value> {
    app.notifier.update(NotificationId::from_raw(id), patch);
    Json(serde_json::json!(app.notifier.snapshot()))
}

/// POST /api/notifications/{id}/dismiss — close one entry and schedule its
/// removal.
pub async fn dismiss(State(app): State<AppState>, Path(id): Path<u64>) -> Json<serde_json::Value> {
    app.notifier.dismiss(Some(NotificationId::from_raw(id)));
    Json(serde_json::json!(app.notifier.snapshot()))
}

/// POST /api/notifications/dismiss — close every entry.
pub async fn dismiss_all(State(app): State<AppState>) -> Json<serde_json::Value> {
    app.notifier.dismiss(None);
    Json(serde_json::json!(app.notifier.snapshot()))
}

/// DELETE /api/notifications/{id} — purge one entry immediately.
pub async fn remove(State(app): State<AppState>, Path(id): Path<u64>) -> Json<serde_json::Value> {
    app.notifier.remove(Some(NotificationId::from_raw(id)));
    Json(serde_json::json!(app.notifier.snapshot()))
}

/// DELETE /api/notifications — empty the queue.
pub async fn remove_all(State(app): State<AppState>) -> Json<serde_json::Value> {
    app.notifier.remove(None);
    Json(serde_json::json!(app.notifier.snapshot()))
}
