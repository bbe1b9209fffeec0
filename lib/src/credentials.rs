//! The structure required to authenticate with the Google Drive API.
//!
//! Public gallery data only needs an API key, passed as the `key` query
//! parameter on every call.

/// The credentials used for authentication
#[derive(Clone, Debug, serde::Serialize)]
pub struct Credentials {
    key: String,
}

impl Credentials {
    /// Creates a credential based on the environment variables
    ///
    /// When `GDRIVE_API_KEY` is set, a `Some(Credentials)` will be created,
    /// otherwise `None` is returned.
    ///
    /// ```rust
    /// use gdrive::credentials::Credentials;
    ///
    /// match Credentials::from_env() {
    ///     Some(_) => println!("uses an api key"),
    ///     None => eprintln!("no credentials provided"),
    /// }
    /// ```
    pub fn from_env() -> Option<Self> {
        std::env::var("GDRIVE_API_KEY")
            .ok()
            .map(|key| Self { key })
    }

    pub fn api_key<S: Into<String>>(key: S) -> Self {
        Self { key: key.into() }
    }
}
