pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, patch, post};
use axum::Router;
use gemini_client::GeminiClient;
use sprinova_core::config::Config;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(config: Config, ai: Option<GeminiClient>) -> Router {
    let app_state = state::AppState::new(config, ai);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Events (SSE)
        .route("/api/events", get(routes::events::sse_events))
        // Site content
        .route("/api/site", get(routes::site::get_site))
        .route("/api/services", get(routes::site::list_services))
        // Mock dashboards
        .route("/api/analytics", get(routes::analytics::get_dashboard))
        .route(
            "/api/analytics/sample-report",
            get(routes::analytics::get_sample_report),
        )
        .route("/api/seo", get(routes::seo::get_dashboard))
        // Contact intake
        .route("/api/contact", post(routes::contact::submit))
        // AI tools
        .route("/api/generate/draft", post(routes::generate::draft))
        .route("/api/generate/summary", post(routes::generate::summary))
        // Notification center
        .route(
            "/api/notifications",
            get(routes::notifications::list)
                .post(routes::notifications::add)
                .delete(routes::notifications::remove_all),
        )
        .route(
            "/api/notifications/dismiss",
            post(routes::notifications::dismiss_all),
        )
        .route(
            "/api/notifications/{id}",
            patch(routes::notifications::update).delete(routes::notifications::remove),
        )
        .route(
            "/api/notifications/{id}/dismiss",
            post(routes::notifications::dismiss),
        )
        // Config
        .route("/api/config", get(routes::config::get_config))
        .fallback(embed::static_handler)
        .layer(cors)
        .with_state(app_state)
}

/// Start the site server.
///
/// The AI client is built from the environment when `config.ai.enabled`;
/// without an API key the AI endpoints degrade to 503 instead of failing
/// startup.
pub async fn serve(config: Config, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(config, listener, open_browser).await
}

/// Start the site server on a pre-bound listener.
///
/// Accepts a `TcpListener` that was already bound so the caller can read the
/// actual port before starting (useful when `port = 0` and the OS picks a
/// free port).
pub async fn serve_on(
    config: Config,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();

    let ai = if config.ai.enabled {
        let client = GeminiClient::from_env().map(|c| c.with_model(config.ai.model.clone()));
        if client.is_none() {
            tracing::warn!("no API key in environment; AI tool endpoints will return 503");
        }
        client
    } else {
        None
    };

    let app = build_router(config, ai);

    tracing::info!("Sprinova site listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
