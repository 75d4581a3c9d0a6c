mod config;
mod crawler;
mod storage;

use config::Config;
use crawler::service::ScrapingService;
use storage::ingest::IngestClient;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = Config::from_env();
    let catalog = ScrapingService::new(cfg.clone()).run().await?;

    println!("{}", serde_json::to_string(&catalog)?);

    if let Some(endpoint) = cfg.ingest_url {
        IngestClient::new(endpoint).upload(&catalog).await?;
    } else {
        info!("CATALOG_INGEST_URL not set, skipping upload");
    }

    Ok(())
}
