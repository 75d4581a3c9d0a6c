use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::crawler::models::Catalog;

/// Hands the finished catalog to the downstream ingestion endpoint.
pub struct IngestClient {
    client: Client,
    endpoint: String,
}

impl IngestClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub async fn upload(&self, catalog: &Catalog) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(catalog)
            .send()
            .await?;
        response.error_for_status()?;

        info!(
            complexes = catalog.residential_complexes.len(),
            "Catalog uploaded"
        );
        Ok(())
    }
}
