//! The errors thrown by the commands

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server side error, properly handled, returning a code and a message
    #[error("drive api error ({0}): {1}")]
    Api(u16, String),
    /// Error specific to the [`HttpClient`](crate::client::HttpClient)
    #[error("transport error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Unable to read the response due to its format
    #[error("unable to read the response due to its format")]
    ResponseFormat(#[source] serde_json::Error),
}

impl Error {
    /// The human readable message carried by the upstream failure, when one exists.
    ///
    /// An API error body without a `message` field yields `None`.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Api(_, msg) if msg.is_empty() => None,
            Self::Api(_, msg) => Some(msg.clone()),
            Self::Reqwest(inner) => Some(inner.to_string()),
            Self::ResponseFormat(inner) => Some(inner.to_string()),
        }
    }
}
