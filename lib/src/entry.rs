//! Raw metadata as returned by the Drive `files` endpoint, before being
//! mapped to the gallery types.

/// The fields requested on every listing call
pub(crate) const LIST_FIELDS: &str = "nextPageToken, files(id, name, mimeType, size)";

/// A single file or folder as described by the Drive API
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_size")]
    pub size: Option<u64>,
}

// the api returns sizes as decimal strings
fn deserialize_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value: Option<String> = Option::deserialize(deserializer)?;
    match value {
        Some(inner) => inner
            .parse::<u64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileListResponse {
    #[serde(default)]
    pub files: Vec<FileMetadata>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct FileListParams<'a> {
    q: &'a str,
    #[serde(rename = "orderBy")]
    order_by: &'static str,
    fields: &'static str,
    #[serde(rename = "pageToken", skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

impl<'a> FileListParams<'a> {
    pub(crate) fn new(q: &'a str) -> Self {
        Self {
            q,
            order_by: "name",
            fields: LIST_FIELDS,
            page_token: None,
        }
    }

    pub(crate) fn with_page_token(mut self, value: Option<&'a str>) -> Self {
        self.page_token = value;
        self
    }
}
