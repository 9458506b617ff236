//! Static file serving using rust-embed

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// The browser client, embedded at compile time
#[derive(RustEmbed)]
#[folder = "../../client"]
struct ClientAssets;

fn asset_response(path: &str) -> Option<Response> {
    let content = ClientAssets::get(path)?;
    let mime_type = mime_guess::from_path(path).first_or_text_plain();
    Some(
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime_type.as_ref().to_string())],
            content.data.into_owned(),
        )
            .into_response(),
    )
}

/// Serve a client file; unknown paths get the page itself.
pub async fn static_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    asset_response(path)
        .or_else(|| asset_response("index.html"))
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, "Not Found").into_response())
}
