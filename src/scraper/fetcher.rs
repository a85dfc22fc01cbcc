use crate::config::AppConfig;
use crate::model::ScraperError;
use crate::query::SearchQuery;
use crate::scraper::traits::{RawResponse, Scraper};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

pub struct ScraperImpl {
    pub client: Client,
    pub search_url: String,
}

impl ScraperImpl {
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .default_headers(build_headers(config)?)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| ScraperError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
        })
    }
}

fn build_headers(config: &AppConfig) -> Result<HeaderMap, ScraperError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ScraperError::HttpError(format!("header {}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ScraperError::HttpError(format!("header {}: {}", name, e)))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    async fn fetch(&self, query: &SearchQuery) -> Result<RawResponse, ScraperError> {
        info!(
            "Searching award itineraries {} -> {} on {}",
            query.origin, query.destination, query.departure_date
        );

        let response = self
            .client
            .post(&self.search_url)
            .json(&query.body())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;
        debug!("Upstream responded [{}] with {} bytes", status, body.len());

        Ok(RawResponse { status, body })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ScraperError {
    if e.is_timeout() {
        ScraperError::Timeout
    } else {
        ScraperError::HttpError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers_are_valid() {
        let headers = build_headers(&AppConfig::default()).unwrap();
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert!(headers.get("user-agent").is_some());
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let mut config = AppConfig::default();
        config.headers.insert("bad header".into(), "x".into());
        assert!(matches!(build_headers(&config), Err(ScraperError::HttpError(_))));
    }
}
