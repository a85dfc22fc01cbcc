// Transport boundary for the award search endpoint

pub mod fetcher;
pub mod traits;

pub use fetcher::ScraperImpl;
pub use traits::{RawResponse, Scraper};

use crate::model::{Airline, ScraperError};
use crate::parser::{parse_itinerary, ItineraryResponse};
use crate::query::SearchQuery;
use crate::utils::is_truthy;
use tracing::warn;

/// Accepts only a 200 response whose envelope carries no error flag.
pub fn validate_envelope(
    airline: Airline,
    query: &SearchQuery,
    raw: RawResponse,
) -> Result<ItineraryResponse, ScraperError> {
    let scraping_error = |data: String| ScraperError::Scraping {
        airline: airline.to_string(),
        origin: query.origin.clone(),
        destination: query.destination.clone(),
        date: query.departure_date.clone(),
        data: Some(data),
    };

    if raw.status != 200 {
        warn!("Upstream rejected search with status {}", raw.status);
        return Err(scraping_error(raw.body));
    }

    let response =
        parse_itinerary(&raw.body).map_err(|e| ScraperError::InvalidResponse(e.to_string()))?;

    if response.error.as_ref().is_some_and(is_truthy) {
        warn!("Upstream flagged an error in the search envelope");
        return Err(scraping_error(raw.body));
    }

    Ok(response)
}
