mod router;

use clap::Parser;
use gdrive::client::HttpClientBuilder;
use tower_http::trace::TraceLayer;

/// Folder whose children are the top level galleries.
#[derive(Clone, Debug)]
pub(crate) struct RootFolder(pub String);

#[derive(Debug, Parser)]
#[command(about, version)]
struct Args {
    #[arg(long, env = "HOST", default_value = "localhost")]
    host: String,
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,
    /// Identifier of the Drive folder containing the top level galleries
    #[arg(long, env = "GDRIVE_ROOT_FOLDER")]
    root_folder: String,
}

impl Args {
    fn binding(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = HttpClientBuilder::from_env()
        .build()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    let app = router::router()
        .layer(axum::Extension(client))
        .layer(axum::Extension(RootFolder(args.root_folder.clone())))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(args.binding()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
