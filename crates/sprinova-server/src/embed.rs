use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "../../frontend/dist/"]
struct SiteAssets;

/// Serve the embedded brochure pages. Unknown paths fall back to index.html
/// so client-side navigation keeps working.
pub async fn static_handler(uri: axum::http::Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Exact asset first, with "/" mapping to the landing page.
    let candidate = if path.is_empty() { "index.html" } else { path };
    if let Some(content) = <SiteAssets as Embed>::get(candidate) {
        let mime = mime_guess::from_path(candidate).first_or_octet_stream();
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.to_vec(),
        )
            .into_response();
    }

    // Pretty URLs: "/about" serves "about.html".
    let with_ext = format!("{candidate}.html");
    if let Some(content) = <SiteAssets as Embed>::get(&with_ext) {
        return (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            content.data.to_vec(),
        )
            .into_response();
    }

    match <SiteAssets as Embed>::get("index.html") {
        Some(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            content.data.to_vec(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "site assets not built").into_response(),
    }
}
