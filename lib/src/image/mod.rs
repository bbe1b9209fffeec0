pub mod list;

/// An image stored in a gallery folder
///
/// The three urls are derived from the file identifier: `url` points at the
/// full resolution view, `thumbnail_url` at a width bound preview and
/// `fallback_url` at the googleusercontent mirror used when the first two are
/// rate limited.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub name: String,
    pub url: String,
    pub thumbnail_url: String,
    pub fallback_url: String,
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Name of the owning folder, filled when images from several folders
    /// are merged into a single list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl From<crate::entry::FileMetadata> for Image {
    fn from(value: crate::entry::FileMetadata) -> Self {
        Self {
            url: format!("https://drive.google.com/uc?export=view&id={}", value.id),
            thumbnail_url: format!(
                "https://drive.google.com/thumbnail?id={}&sz=w1000",
                value.id
            ),
            fallback_url: format!("https://lh3.googleusercontent.com/d/{}", value.id),
            id: value.id,
            name: value.name,
            mime_type: value.mime_type.unwrap_or_default(),
            size: value.size,
            folder: None,
        }
    }
}
