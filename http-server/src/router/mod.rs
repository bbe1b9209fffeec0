mod folder;
mod folders;

/// `Cache-Control` applied to every successful listing response: fresh for an
/// hour, servable stale for a day while revalidating.
pub(crate) const CACHE_CONTROL: &str =
    "public, max-age=3600, s-maxage=3600, stale-while-revalidate=86400";

/// Fallback when the upstream failure carries no message
pub(crate) const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(serde::Serialize)]
pub(crate) struct ErrorEnvelope {
    success: bool,
    error: &'static str,
    message: String,
}

impl ErrorEnvelope {
    pub(crate) fn new(error: &'static str, source: &gdrive::error::Error) -> Self {
        Self {
            success: false,
            error,
            message: source
                .message()
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        }
    }
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/api/drive/folders", axum::routing::get(folders::handler))
        .route("/api/drive/folder/:id", axum::routing::get(folder::handler))
}
