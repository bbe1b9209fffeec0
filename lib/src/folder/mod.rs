pub mod list;

/// The mime type identifying folders on Drive
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// A gallery folder on Drive
///
/// A freshly listed folder has empty `images` and `subfolders`; aggregation
/// fills them.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub images: Vec<crate::image::Image>,
    pub subfolders: Vec<Folder>,
}

impl From<crate::entry::FileMetadata> for Folder {
    fn from(value: crate::entry::FileMetadata) -> Self {
        Self {
            id: value.id,
            name: value.name,
            images: Vec::new(),
            subfolders: Vec::new(),
        }
    }
}

/// An access gated gallery folder
///
/// Password verification lives in a separate service; only the wire types
/// are declared here.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedFolder {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

/// The outcome of a password verification against a [`ProtectedFolder`](ProtectedFolder)
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPasswordResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_attempts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
