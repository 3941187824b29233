//! AI tool endpoints. Single-shot calls: validate, prompt, generate. A
//! provider failure produces exactly one error toast and a gateway error;
//! there is no retry and no partial result.

use axum::extract::State;
use axum::Json;
use gemini_client::GeminiClient;
use sprinova_core::flows::{AnalyticsSummaryInput, DraftInput};
use sprinova_core::notification::ToastRequest;

use crate::error::AppError;
use crate::state::AppState;

fn available_client(app: &AppState) -> Result<&GeminiClient, AppError> {
    match &app.ai {
        Some(client) if app.config.ai.enabled => Ok(client),
        _ => {
            app.notifier.add(ToastRequest::error(
                "AI unavailable",
                "Content generation is not configured on this server.",
            ));
            Err(AppError::unavailable("AI generation is not configured"))
        }
    }
}

/// POST /api/generate/draft — generate an initial content draft.
pub async fn draft(
    State(app): State<AppState>,
    Json(input): Json<DraftInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    input.validate()?;
    let client = available_client(&app)?;

    match client.generate(&input.prompt()).await {
        Ok(text) => Ok(Json(serde_json::json!({ "draft_content": text }))),
        Err(e) => {
            tracing::warn!(error = %e, "draft generation failed");
            app.notifier.add(ToastRequest::error(
                "Error",
                "Could not generate content. Please try again.",
            ));
            Err(AppError(e.into()))
        }
    }
}

/// POST /api/generate/summary — summarize an analytics report.
pub async fn summary(
    State(app): State<AppState>,
    Json(input): Json<AnalyticsSummaryInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    input.validate()?;
    let client = available_client(&app)?;

    match client.generate(&input.prompt()).await {
        Ok(text) => Ok(Json(serde_json::json!({ "summary": text }))),
        Err(e) => {
            tracing::warn!(error = %e, "analytics summary failed");
            app.notifier.add(ToastRequest::error(
                "Error",
                "Could not generate analytics summary. Please try again.",
            ));
            Err(AppError(e.into()))
        }
    }
}
