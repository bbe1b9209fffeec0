use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use gdrive::client::HttpClient;
use gdrive::folder::list::FolderListCommand;
use gdrive::folder::Folder;
use gdrive::image::list::ImageListCommand;
use gdrive::image::Image;
use gdrive::prelude::HttpCommand;

use super::ErrorEnvelope;

const FETCH_ERROR: &str = "Failed to fetch folder contents from Google Drive";

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("unable to fetch folder contents")]
    UnableFetchContents(#[source] gdrive::error::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let Self::UnableFetchContents(ref inner) = self;
        tracing::error!("{self}: {inner}");
        let body = ErrorEnvelope::new(FETCH_ERROR, inner);

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FolderContentResponse {
    success: bool,
    images: Vec<Image>,
    subfolders: Vec<Folder>,
    image_count: usize,
    subfolder_count: usize,
}

impl FolderContentResponse {
    fn new(images: Vec<Image>, subfolders: Vec<Folder>) -> Self {
        Self {
            success: true,
            image_count: images.len(),
            subfolder_count: subfolders.len(),
            images,
            subfolders,
        }
    }
}

impl IntoResponse for FolderContentResponse {
    fn into_response(self) -> axum::response::Response {
        ([(header::CACHE_CONTROL, super::CACHE_CONTROL)], Json(self)).into_response()
    }
}

/// Fetches the folder's images and immediate subfolders concurrently. Both
/// calls have to settle; a failure of either one fails the whole request
/// without partial results.
pub(crate) async fn handler(
    Extension(client): Extension<HttpClient>,
    Path(folder_id): Path<String>,
) -> Result<FolderContentResponse, Error> {
    let (images, subfolders) = tokio::join!(
        ImageListCommand::new(folder_id.as_str()).execute(&client),
        FolderListCommand::new(folder_id.as_str()).execute(&client),
    );
    let images = images.map_err(Error::UnableFetchContents)?;
    let subfolders = subfolders.map_err(Error::UnableFetchContents)?;
    Ok(FolderContentResponse::new(images, subfolders))
}
