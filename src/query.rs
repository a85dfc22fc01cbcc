// Award itinerary search request body
use serde::Serialize;
use serde_json::{Map, Value};

/// Route and date of one search; everything else about the trip is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
}

impl SearchQuery {
    pub fn new(origin: &str, destination: &str, departure_date: &str) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: departure_date.to_string(),
        }
    }

    pub fn body(&self) -> SearchBody<'_> {
        build_search_body(self)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody<'a> {
    pub metadata: Metadata,
    pub passengers: Vec<Passenger>,
    pub request_header: RequestHeader,
    pub slices: Vec<SliceRequest<'a>>,
    pub trip_options: TripOptions,
    pub loyalty_info: Option<Value>,
    pub query_params: QueryParams,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub selected_products: Vec<Value>,
    pub trip_type: &'static str,
    pub udo: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct Passenger {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub count: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    pub client_id: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceRequest<'a> {
    pub all_carriers: bool,
    pub cabin: &'static str,
    pub departure_date: &'a str,
    pub destination: &'a str,
    pub destination_nearby_airports: bool,
    pub max_stops: Option<u32>,
    pub origin: &'a str,
    pub origin_nearby_airports: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripOptions {
    pub search_type: &'static str,
    pub corporate_booking: bool,
    pub locale: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub slice_index: u32,
    pub session_id: &'static str,
    pub solution_set: &'static str,
    pub solution_id: &'static str,
}

/// One-way, one adult, any carrier, no stop limit, award pricing.
pub fn build_search_body(query: &SearchQuery) -> SearchBody<'_> {
    SearchBody {
        metadata: Metadata {
            selected_products: Vec::new(),
            trip_type: "OneWay",
            udo: Map::new(),
        },
        passengers: vec![Passenger {
            kind: "adult",
            count: 1,
        }],
        request_header: RequestHeader { client_id: "AAcom" },
        slices: vec![SliceRequest {
            all_carriers: true,
            cabin: "",
            departure_date: &query.departure_date,
            destination: &query.destination,
            destination_nearby_airports: false,
            max_stops: None,
            origin: &query.origin,
            origin_nearby_airports: false,
        }],
        trip_options: TripOptions {
            search_type: "Award",
            corporate_booking: false,
            locale: "en_US",
        },
        loyalty_info: None,
        query_params: QueryParams {
            slice_index: 0,
            session_id: "",
            solution_set: "",
            solution_id: "",
        },
    }
}
