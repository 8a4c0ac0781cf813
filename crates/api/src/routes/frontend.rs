//! Static frontend bundle.

use std::path::Path;

use axum::Json;
use serde::Serialize;
use tower_http::services::ServeDir;

/// Shown at `/` when no frontend bundle is on disk.
pub const NOT_BUILT_MESSAGE: &str =
    "Frontend not built yet. Build it by running `npm run build` in ./frontend";

#[derive(Serialize)]
pub struct FrontendMessage {
    pub message: &'static str,
}

/// Serves files under `dir`, with `index.html` for directory requests.
pub fn serve_dir(dir: &Path) -> ServeDir {
    ServeDir::new(dir).append_index_html_on_directories(true)
}

/// GET / — instructions when the bundle is missing.
pub async fn root_fallback() -> Json<FrontendMessage> {
    Json(FrontendMessage {
        message: NOT_BUILT_MESSAGE,
    })
}
