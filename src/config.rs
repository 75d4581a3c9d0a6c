use std::env;

const BASE_URL: &str = "https://enco.ru";
const PROJECTS_URL: &str = "https://nur.enco.ru/projects/";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub projects_url: String,
    pub ingest_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("ENCO_BASE_URL").unwrap_or_else(|_| BASE_URL.to_string()),
            projects_url: env::var("ENCO_PROJECTS_URL").unwrap_or_else(|_| PROJECTS_URL.to_string()),
            ingest_url: env::var("CATALOG_INGEST_URL").ok(),
        }
    }
}
