use reqwest::Client;

use crate::crawler::error::ScrapeError;

pub fn build_client() -> Client {
    Client::builder()
        .user_agent("EncoCatalog-Crawler/1.0")
        .build()
        .expect("failed to build http client")
}

pub async fn fetch_html(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let res = client.get(url).send().await?;
    Ok(res.text().await?)
}
