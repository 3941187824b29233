use axum::extract::State;
use axum::Json;
use sprinova_core::contact::ContactMessage;
use sprinova_core::notification::ToastRequest;

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/contact — take in a contact form submission.
///
/// There is no mailer behind this; the submission is logged and acknowledged
/// with a success toast.
pub async fn submit(
    State(app): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> Result<Json<serde_json::Value>, AppError> {
    message.validate()?;

    let id = uuid::Uuid::new_v4();
    tracing::info!(%id, from = %message.email, subject = %message.subject, "contact message received");

    app.notifier.add(ToastRequest::success(
        "Message sent",
        "Thanks for reaching out. We'll get back to you shortly.",
    ));

    Ok(Json(serde_json::json!({
        "id": id,
        "status": "received",
    })))
}
