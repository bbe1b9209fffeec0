//! Resources needed to list the images stored in a folder

use std::borrow::Cow;

use crate::client::HttpClient;
use crate::entry::{FileListParams, FileListResponse};
use crate::error::Error;
use crate::image::Image;
use crate::prelude::HttpCommand;

/// Command to list the images directly contained in a folder
///
/// Executing this command will return a list of [`Image`](crate::image::Image) on success,
/// ordered by name. Pagination is followed until the listing is exhausted.
///
/// # Example using the [`HttpClient`](crate::client::HttpClient)
///
/// ```no_run
/// use gdrive::client::HttpClientBuilder;
/// use gdrive::image::list::ImageListCommand;
/// use gdrive::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::from_env().build().unwrap();
/// let cmd = ImageListCommand::new("folder-id");
/// match cmd.execute(&client).await {
///   Ok(res) => println!("success"),
///   Err(err) => eprintln!("error: {:?}", err),
/// }
/// # })
/// ```
#[derive(Debug)]
pub struct ImageListCommand<'a> {
    pub parent_id: Cow<'a, str>,
}

impl<'a> ImageListCommand<'a> {
    pub fn new<P: Into<Cow<'a, str>>>(parent_id: P) -> Self {
        Self {
            parent_id: parent_id.into(),
        }
    }
}

#[async_trait::async_trait]
impl<'a> HttpCommand for ImageListCommand<'a> {
    type Output = Vec<Image>;

    async fn execute(self, client: &HttpClient) -> Result<Self::Output, Error> {
        let query = format!(
            "'{}' in parents and mimeType contains 'image/' and trashed = false",
            self.parent_id.replace('\'', "\\'"),
        );
        let mut images = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let params = FileListParams::new(&query).with_page_token(page_token.as_deref());
            let result: FileListResponse = client.get_request("files", &params).await?;
            images.extend(result.files.into_iter().map(Image::from));
            match result.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        Ok(images)
    }
}

#[cfg(test)]
mod http_tests {
    use mockito::Matcher;

    use super::ImageListCommand;
    use crate::client::HttpClientBuilder;
    use crate::credentials::Credentials;
    use crate::prelude::HttpCommand;

    fn query_for(parent: &str) -> String {
        format!("'{parent}' in parents and mimeType contains 'image/' and trashed = false")
    }

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/files")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "api-key".into()),
                Matcher::UrlEncoded("q".into(), query_for("d10")),
            ]))
            .with_status(200)
            .with_body(
                r#"{
    "files": [
        { "id": "f1", "name": "stage.jpg", "mimeType": "image/jpeg", "size": "204800" },
        { "id": "f2", "name": "venue.png", "mimeType": "image/png" }
    ]
}"#,
            )
            .create_async()
            .await;
        let client = HttpClientBuilder::default()
            .with_credentials(Credentials::api_key("api-key"))
            .with_base_url(server.url())
            .build()
            .unwrap();
        let images = ImageListCommand::new("d10").execute(&client).await.unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(
            images[0].url,
            "https://drive.google.com/uc?export=view&id=f1"
        );
        assert_eq!(
            images[0].thumbnail_url,
            "https://drive.google.com/thumbnail?id=f1&sz=w1000"
        );
        assert_eq!(
            images[0].fallback_url,
            "https://lh3.googleusercontent.com/d/f1"
        );
        assert_eq!(images[0].size, Some(204800));
        assert_eq!(images[1].mime_type, "image/png");
        assert_eq!(images[1].size, None);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn error_without_message() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/files")
            .match_query(Matcher::UrlEncoded("q".into(), query_for("d10")))
            .with_status(500)
            .with_body(r#"{ "error": { "code": 500 } }"#)
            .create_async()
            .await;
        let client = HttpClientBuilder::default()
            .with_credentials(Credentials::api_key("api-key"))
            .with_base_url(server.url())
            .build()
            .unwrap();
        let error = ImageListCommand::new("d10")
            .execute(&client)
            .await
            .unwrap_err();
        assert!(matches!(error, crate::error::Error::Api(500, _)));
        assert!(error.message().is_none());
        m.assert_async().await;
    }
}
