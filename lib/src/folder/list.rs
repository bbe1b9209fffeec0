//! Resources needed to list the child folders of a folder

use std::borrow::Cow;

use crate::client::HttpClient;
use crate::entry::{FileListParams, FileListResponse};
use crate::error::Error;
use crate::folder::{Folder, FOLDER_MIME_TYPE};
use crate::prelude::HttpCommand;

/// Command to list the immediate child folders of a folder
///
/// Executing this command will return a list of [`Folder`](crate::folder::Folder) on success,
/// ordered by name. Pagination is followed until the listing is exhausted.
///
/// # Example using the [`HttpClient`](crate::client::HttpClient)
///
/// ```no_run
/// use gdrive::client::HttpClientBuilder;
/// use gdrive::folder::list::FolderListCommand;
/// use gdrive::prelude::HttpCommand;
///
/// # tokio_test::block_on(async {
/// let client = HttpClientBuilder::from_env().build().unwrap();
/// let cmd = FolderListCommand::new("root-folder-id");
/// match cmd.execute(&client).await {
///   Ok(res) => println!("success"),
///   Err(err) => eprintln!("error: {:?}", err),
/// }
/// # })
/// ```
#[derive(Debug)]
pub struct FolderListCommand<'a> {
    pub parent_id: Cow<'a, str>,
}

impl<'a> FolderListCommand<'a> {
    pub fn new<P: Into<Cow<'a, str>>>(parent_id: P) -> Self {
        Self {
            parent_id: parent_id.into(),
        }
    }
}

#[async_trait::async_trait]
impl<'a> HttpCommand for FolderListCommand<'a> {
    type Output = Vec<Folder>;

    async fn execute(self, client: &HttpClient) -> Result<Self::Output, Error> {
        let query = format!(
            "'{}' in parents and mimeType = '{FOLDER_MIME_TYPE}' and trashed = false",
            self.parent_id.replace('\'', "\\'"),
        );
        let mut folders = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let params = FileListParams::new(&query).with_page_token(page_token.as_deref());
            let result: FileListResponse = client.get_request("files", &params).await?;
            folders.extend(result.files.into_iter().map(Folder::from));
            match result.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        Ok(folders)
    }
}

#[cfg(test)]
mod http_tests {
    use mockito::Matcher;

    use super::FolderListCommand;
    use crate::client::HttpClientBuilder;
    use crate::credentials::Credentials;
    use crate::prelude::HttpCommand;

    fn query_for(parent: &str) -> String {
        format!(
            "'{parent}' in parents and mimeType = 'application/vnd.google-apps.folder' and trashed = false"
        )
    }

    #[tokio::test]
    async fn success() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/files")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "api-key".into()),
                Matcher::UrlEncoded("q".into(), query_for("root")),
                Matcher::UrlEncoded("orderBy".into(), "name".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
    "files": [
        { "id": "d10", "name": "Conferences", "mimeType": "application/vnd.google-apps.folder" },
        { "id": "d11", "name": "Weddings", "mimeType": "application/vnd.google-apps.folder" }
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
        let folders = FolderListCommand::new("root")
            .execute(&client)
            .await
            .unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].id, "d10");
        assert_eq!(folders[1].name, "Weddings");
        assert!(folders[0].images.is_empty());
        assert!(folders[0].subfolders.is_empty());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn success_paginated() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        // mockito matches mocks in reverse creation order, so the page
        // without a token has to be declared first
        let first = server
            .mock("GET", "/files")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), query_for("root")),
            ]))
            .with_status(200)
            .with_body(
                r#"{
    "files": [{ "id": "d10", "name": "Conferences", "mimeType": "application/vnd.google-apps.folder" }],
    "nextPageToken": "page-2"
}"#,
            )
            .create_async()
            .await;
        let second = server
            .mock("GET", "/files")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), query_for("root")),
                Matcher::UrlEncoded("pageToken".into(), "page-2".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
    "files": [{ "id": "d11", "name": "Weddings", "mimeType": "application/vnd.google-apps.folder" }]
}"#,
            )
            .create_async()
            .await;
        let client = HttpClientBuilder::default()
            .with_credentials(Credentials::api_key("api-key"))
            .with_base_url(server.url())
            .build()
            .unwrap();
        let folders = FolderListCommand::new("root")
            .execute(&client)
            .await
            .unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[1].id, "d11");
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn error() {
        crate::tests::init();
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/files")
            .match_query(Matcher::UrlEncoded("q".into(), query_for("root")))
            .with_status(403)
            .with_body(
                r#"{ "error": { "code": 403, "message": "The user does not have sufficient permissions" } }"#,
            )
            .create_async()
            .await;
        let client = HttpClientBuilder::default()
            .with_credentials(Credentials::api_key("api-key"))
            .with_base_url(server.url())
            .build()
            .unwrap();
        let error = FolderListCommand::new("root")
            .execute(&client)
            .await
            .unwrap_err();
        assert!(matches!(error, crate::error::Error::Api(403, _)));
        assert_eq!(
            error.message().unwrap(),
            "The user does not have sufficient permissions"
        );
        m.assert_async().await;
    }
}
