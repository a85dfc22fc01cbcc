use crate::model::ScraperError;
use crate::query::SearchQuery;

/// Status and body of an upstream response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    async fn fetch(&self, query: &SearchQuery) -> Result<RawResponse, ScraperError>;
}
