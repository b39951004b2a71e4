//! Static viewer pages, compiled into the binary.

use axum::response::Html;

/// Viewer page: connects to the push channel and lists incoming messages.
pub const HOME_PAGE: &str = include_str!("../../../static/index.html");

/// Confirmation page returned after an ingest POST.
pub const RESPONSE_PAGE: &str = include_str!("../../../static/response.html");

/// GET / - Home page.
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// Confirmation page for `POST /gsi`.
pub fn confirmation() -> Html<&'static str> {
    Html(RESPONSE_PAGE)
}
