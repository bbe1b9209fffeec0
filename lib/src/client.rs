//! The client implementing the [Drive API v3 protocol](https://developers.google.com/drive/api/reference/rest/v3)

use std::time::Duration;

use crate::credentials::Credentials;
use crate::error::Error;

/// The default user agent for the http client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// The default base url for the Drive API
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/drive/v3";

/// The errors when generating a [`HttpClient`](HttpClient) from a [`HttpClientBuilder`](HttpClientBuilder)
#[derive(Debug, thiserror::Error)]
pub enum HttpClientBuilderError {
    #[error("credentials missing")]
    CredentialsMissing,
    #[error("unable to build http client: {0}")]
    Reqwest(reqwest::Error),
}

/// A builder for the [`HttpClient`](HttpClient) structure
///
/// ```
/// use gdrive::client::HttpClientBuilder;
/// use gdrive::credentials::Credentials;
///
/// let _client = HttpClientBuilder::default()
///    .with_credentials(Credentials::api_key("my-key"))
///    .build()
///    .expect("unable to build http client");
/// ```
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    pub client_builder: reqwest::ClientBuilder,
    pub credentials: Option<Credentials>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

fn duration_from_env() -> Option<Duration> {
    std::env::var("GDRIVE_TIMEOUT")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
}

impl HttpClientBuilder {
    /// Builds a http client builder from the environment variables. See [`Credentials`](crate::credentials::Credentials).
    ///
    /// The base url can be overridden with the `GDRIVE_BASE_URL` environment variable
    /// and the timeout, in milliseconds, comes from `GDRIVE_TIMEOUT`.
    pub fn from_env() -> Self {
        Self {
            client_builder: reqwest::ClientBuilder::default(),
            credentials: Credentials::from_env(),
            base_url: std::env::var("GDRIVE_BASE_URL").ok(),
            timeout: duration_from_env(),
        }
    }

    pub fn set_client_builder(&mut self, value: reqwest::ClientBuilder) {
        self.client_builder = value;
    }

    pub fn with_client_builder(mut self, value: reqwest::ClientBuilder) -> Self {
        self.client_builder = value;
        self
    }

    pub fn set_credentials(&mut self, value: Credentials) {
        self.credentials = Some(value);
    }

    pub fn with_credentials(mut self, value: Credentials) -> Self {
        self.credentials = Some(value);
        self
    }

    pub fn set_base_url<S: Into<String>>(&mut self, value: S) {
        self.base_url = Some(value.into());
    }

    pub fn with_base_url<S: Into<String>>(mut self, value: S) -> Self {
        self.base_url = Some(value.into());
        self
    }

    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = Some(value);
    }

    pub fn with_timeout(mut self, value: Duration) -> Self {
        self.timeout = Some(value);
        self
    }

    pub fn build(self) -> Result<HttpClient, HttpClientBuilderError> {
        let credentials = self
            .credentials
            .ok_or(HttpClientBuilderError::CredentialsMissing)?;
        let mut client_builder = self.client_builder.user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        let inner = client_builder
            .build()
            .map_err(HttpClientBuilderError::Reqwest)?;
        Ok(HttpClient {
            inner,
            credentials,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

/// The http client calling the Drive API
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    message: Option<String>,
}

async fn read_response<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    if status.is_success() {
        let body = res.text().await?;
        return serde_json::from_str::<T>(&body).map_err(Error::ResponseFormat);
    }
    let body = res.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(payload) => Err(Error::Api(
            payload.error.code.unwrap_or_else(|| status.as_u16()),
            payload.error.message.unwrap_or_default(),
        )),
        Err(_) => Err(Error::Api(status.as_u16(), body)),
    }
}

impl HttpClient {
    fn build_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    #[tracing::instrument(name = "get", skip(self, params))]
    pub(crate) async fn get_request<T: serde::de::DeserializeOwned, P: serde::Serialize>(
        &self,
        method: &str,
        params: P,
    ) -> Result<T, Error> {
        let uri = self.build_url(method);
        let res = self
            .inner
            .get(uri)
            .query(&WithCredentials {
                credentials: &self.credentials,
                inner: params,
            })
            .send()
            .await?;
        read_response(res).await
    }
}

#[derive(serde::Serialize)]
struct WithCredentials<'a, I> {
    #[serde(flatten)]
    credentials: &'a Credentials,
    #[serde(flatten)]
    inner: I,
}
