use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::crawler;
use crate::crawler::fetcher;
use crate::crawler::models::Catalog;

const SYSTEM_NAME: &str = "ЭНКО";
const DEVELOPER_NAME: &str = "ИНВЕСТИЦИОННАЯ СТРОИТЕЛЬНАЯ КОМПАНИЯ \"ЭНКО\"";

pub struct ScrapingService {
    cfg: Config,
    client: reqwest::Client,
}

impl ScrapingService {
    pub fn new(cfg: Config) -> Self {
        Self {
            client: fetcher::build_client(),
            cfg,
        }
    }

    pub async fn run(&self) -> Result<Catalog> {
        let mut complexes = crawler::crawl_projects(&self.client, &self.cfg).await?;
        info!(count = complexes.len(), "Projects extracted");

        for complex in &mut complexes {
            let flats =
                crawler::crawl_flats(&self.client, &self.cfg, &complex.internal_id).await?;
            info!(
                slug = %complex.internal_id,
                flats = flats.len(),
                "Complex flats parsed"
            );
            complex.flats = flats;
        }

        Ok(Catalog {
            system_name: SYSTEM_NAME.to_string(),
            name: DEVELOPER_NAME.to_string(),
            residential_complexes: complexes,
        })
    }
}
