use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use gdrive::client::HttpClient;
use gdrive::folder::list::FolderListCommand;
use gdrive::folder::Folder;
use gdrive::prelude::HttpCommand;

use super::ErrorEnvelope;
use crate::RootFolder;

const FETCH_ERROR: &str = "Failed to fetch folders from Google Drive";

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("unable to list top level folders")]
    UnableListFolders(#[source] gdrive::error::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let Self::UnableListFolders(ref inner) = self;
        tracing::error!("{self}: {inner}");
        let body = ErrorEnvelope::new(FETCH_ERROR, inner);

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[derive(serde::Serialize)]
pub(crate) struct FolderListResponse {
    success: bool,
    folders: Vec<Folder>,
    count: usize,
}

impl FolderListResponse {
    fn new(folders: Vec<Folder>) -> Self {
        Self {
            success: true,
            count: folders.len(),
            folders,
        }
    }
}

impl IntoResponse for FolderListResponse {
    fn into_response(self) -> axum::response::Response {
        ([(header::CACHE_CONTROL, super::CACHE_CONTROL)], Json(self)).into_response()
    }
}

pub(crate) async fn handler(
    Extension(client): Extension<HttpClient>,
    Extension(root): Extension<RootFolder>,
) -> Result<FolderListResponse, Error> {
    let folders = FolderListCommand::new(root.0)
        .execute(&client)
        .await
        .map_err(Error::UnableListFolders)?;
    Ok(FolderListResponse::new(folders))
}
