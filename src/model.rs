// Core structs: FlightPointInfo, FlightSegment, LiveCheckRequest
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A decomposed offset-datetime: `2024-05-01T08:15:00.000-05:00` becomes
/// `2024-05-01` / `08:15:00` / `-05:00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightTime {
    pub date: String,
    pub time: String,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSegment {
    pub origin: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_timezone: Option<String>,
    pub flight_number: String,
    pub aircraft: String,
    pub amenities: Vec<String>,
}

/// One priced offer: a slice combined with one of its cabin prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightPointInfo {
    pub origin: String,
    pub destination: String,
    pub cabin_class: String,
    pub airline_cabin_class: String,
    pub duration: i64,
    pub stops: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_timezone: Option<String>,
    /// `-1` when the cabin has no award price.
    pub points: i64,
    pub cash_fee: f64,
    pub stop_cities: Vec<String>,
    pub carriers: Vec<String>,
    pub segments: Vec<FlightSegment>,
}

/// Payload accepted by the live checker endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveCheckRequest {
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    #[serde(default)]
    pub departure_time: Option<String>,
    #[serde(default)]
    pub flight_no: Option<String>,
    #[serde(default)]
    pub cabin_class: Option<String>,
}

/// Either the full offer list or the single-flight points lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiveCheckResponse {
    Offers(Vec<FlightPointInfo>),
    Points(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Airline {
    AmericanAirlines,
}

impl Airline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Airline::AmericanAirlines => "aa",
        }
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Airline {
    type Err = CheckerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("aa") {
            Ok(Airline::AmericanAirlines)
        } else {
            Err(CheckerError::UnsupportedAirline(s.to_string()))
        }
    }
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("{airline} ({origin} - {destination}) on {date}: {}", .data.as_deref().unwrap_or("None"))]
    Scraping {
        airline: String,
        origin: String,
        destination: String,
        date: String,
        data: Option<String>,
    },
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("malformed timestamp {value:?}")]
    MalformedTimestamp {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
}

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("unsupported airline: {0}")]
    UnsupportedAirline(String),
    #[error(transparent)]
    Scraper(#[from] ScraperError),
    #[error(transparent)]
    Parser(#[from] ParserError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scraping_error_message_carries_query_context() {
        let err = ScraperError::Scraping {
            airline: "aa".into(),
            origin: "JFK".into(),
            destination: "LHR".into(),
            date: "2024-06-01".into(),
            data: Some("Forbidden".into()),
        };
        assert_eq!(err.to_string(), "aa (JFK - LHR) on 2024-06-01: Forbidden");
    }

    #[test]
    fn airline_parses_case_insensitively() {
        assert_eq!("AA".parse::<Airline>().unwrap(), Airline::AmericanAirlines);
        assert!(matches!(
            "dl".parse::<Airline>(),
            Err(CheckerError::UnsupportedAirline(code)) if code == "dl"
        ));
    }

    #[test]
    fn live_check_request_optional_filters_default_to_none() {
        let req: LiveCheckRequest = serde_json::from_str(
            r#"{"airline":"aa","origin":"JFK","destination":"LHR","departure_date":"2024-06-01"}"#,
        )
        .unwrap();
        assert!(req.departure_time.is_none());
        assert!(req.flight_no.is_none());
        assert!(req.cabin_class.is_none());
    }
}
