use tracing_subscriber::EnvFilter;

use reumacal_api::{AppState, Backend, Config, StoreKind};
use reumacal_storage::{MemoryScoreStore, S3ScoreStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;

    let backend = match config.store {
        StoreKind::S3 => {
            let s3 = reumacal_storage::client::build_client().await;
            tracing::info!(bucket = %config.bucket, "using S3 score store");
            Backend::S3(S3ScoreStore::new(s3, config.bucket.clone()))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory score store; records are lost on exit");
            Backend::Memory(MemoryScoreStore::new())
        }
    };

    let app = reumacal_api::router(AppState::new(backend));

    match config.listen_addr {
        Some(addr) => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
    }
}
