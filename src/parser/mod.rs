// Upstream itinerary response parsing

pub mod itinerary;

pub use itinerary::{ItineraryResponse, PricingDetail, Segment, Slice};

/// Decodes a raw search response body.
pub fn parse_itinerary(body: &str) -> Result<ItineraryResponse, serde_json::Error> {
    serde_json::from_str(body)
}
