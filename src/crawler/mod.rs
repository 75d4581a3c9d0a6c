use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::crawler::error::ScrapeError;
use crate::crawler::models::{Flat, ResidentialComplex};

mod embedded;
pub mod error;
mod fetcher;
pub mod models;
mod normalize;
mod parser;
pub mod service;

/// The listing index shows a fixed 12 flats per page.
const FLATS_PER_PAGE: usize = 12;

pub async fn crawl_projects(
    client: &Client,
    cfg: &Config,
) -> Result<Vec<ResidentialComplex>, ScrapeError> {
    debug!(url = %cfg.projects_url, "Fetching projects page");
    let html = fetcher::fetch_html(client, &cfg.projects_url).await?;
    embedded::extract_projects(&html, &cfg.base_url)
}

pub async fn crawl_flats(
    client: &Client,
    cfg: &Config,
    slug: &str,
) -> Result<Vec<Flat>, ScrapeError> {
    let index_url = format!("{}/search/apartments/project/{}", cfg.base_url, slug);

    let mut html = fetcher::fetch_html(client, &index_url).await?;
    let flats_total = parser::parse_flats_total(&html)?;
    let pages = page_count(flats_total);

    let mut flats = Vec::with_capacity(flats_total);
    for page in 1..=pages {
        // Page 1 reuses the body already fetched for the total count.
        if page > 1 {
            html = fetcher::fetch_html(client, &format!("{index_url}?PAGEN_1={page}")).await?;
        }

        for link in parser::collect_flat_links(&html, &cfg.base_url)? {
            debug!(%link, "Fetching flat detail page");
            let detail = fetcher::fetch_html(client, &link).await?;
            flats.push(parser::scrape_flat_details(&detail, &link, slug, &cfg.base_url)?);
        }

        info!(slug, page, pages, parsed = flats.len(), "Flats index page parsed");
    }

    Ok(flats)
}

fn page_count(flats_total: usize) -> usize {
    flats_total.div_ceil(FLATS_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::page_count;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(25), 3);
        assert_eq!(page_count(13), 2);
        assert_eq!(page_count(12), 1);
        assert_eq!(page_count(1), 1);
    }

    #[test]
    fn zero_flats_means_zero_pages() {
        assert_eq!(page_count(0), 0);
    }
}
