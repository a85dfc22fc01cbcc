// Live award availability checks: query -> upstream -> normalized offers
use crate::config::CabinClassTables;
use crate::filter::SearchCriteria;
use crate::model::{Airline, CheckerError, FlightPointInfo, LiveCheckRequest, LiveCheckResponse};
use crate::normalizer::{lookup_flight_points, normalize_all};
use crate::parser::ItineraryResponse;
use crate::query::SearchQuery;
use crate::scraper::{validate_envelope, Scraper};
use tracing::info;

pub struct AwardChecker<S: Scraper> {
    scraper: S,
    tables: CabinClassTables,
}

impl<S: Scraper> AwardChecker<S> {
    pub fn new(scraper: S, tables: CabinClassTables) -> Self {
        Self { scraper, tables }
    }

    /// Routes a request to the single-flight lookup when a flight number is
    /// given, otherwise to the full offer list.
    pub async fn check(&self, req: &LiveCheckRequest) -> Result<LiveCheckResponse, CheckerError> {
        let has_flight_no = req.flight_no.as_deref().is_some_and(|f| !f.is_empty());
        if has_flight_no {
            self.get_flight_points(req).await.map(LiveCheckResponse::Points)
        } else {
            self.get_flight_offers(req).await.map(LiveCheckResponse::Offers)
        }
    }

    pub async fn get_flight_offers(
        &self,
        req: &LiveCheckRequest,
    ) -> Result<Vec<FlightPointInfo>, CheckerError> {
        let response = self.search(req).await?;
        let criteria = SearchCriteria::from_request(req);
        let offers = normalize_all(&response, &criteria, &self.tables)?;
        info!(
            "{} offers for {} -> {} on {}",
            offers.len(),
            req.origin,
            req.destination,
            req.departure_date
        );
        Ok(offers)
    }

    /// `-1` covers both a missing flight and a missing award price.
    pub async fn get_flight_points(&self, req: &LiveCheckRequest) -> Result<i64, CheckerError> {
        let response = self.search(req).await?;
        let criteria = SearchCriteria::from_request(req);
        let points = lookup_flight_points(&response, &criteria, &self.tables);
        info!(
            "Flight {} {} -> {} on {}: {} points",
            req.flight_no.as_deref().unwrap_or("-"),
            req.origin,
            req.destination,
            req.departure_date,
            points
        );
        Ok(points)
    }

    async fn search(&self, req: &LiveCheckRequest) -> Result<ItineraryResponse, CheckerError> {
        let airline: Airline = req.airline.parse()?;
        let query = SearchQuery::new(&req.origin, &req.destination, &req.departure_date);
        let raw = self.scraper.fetch(&query).await?;
        Ok(validate_envelope(airline, &query, raw)?)
    }
}
