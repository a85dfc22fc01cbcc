// Itinerary search response, as loosely as the upstream sends it
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::utils::{value_as_f64, value_as_i64};

/// Reads `null` as the type's default instead of failing.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts any number or numeric string; anything else reads as absent.
fn loose_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(value_as_i64))
}

fn loose_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(value_as_f64))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryResponse {
    pub error: Option<Value>,
    #[serde(deserialize_with = "nullable")]
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slice {
    pub origin: Option<Airport>,
    pub destination: Option<Airport>,
    #[serde(deserialize_with = "loose_i64")]
    pub duration_in_minutes: Option<i64>,
    #[serde(deserialize_with = "loose_i64")]
    pub stops: Option<i64>,
    pub departure_date_time: Option<String>,
    pub arrival_date_time: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub connecting_cities: Vec<Vec<Airport>>,
    #[serde(deserialize_with = "nullable")]
    pub carrier_names: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub segments: Vec<Segment>,
    #[serde(deserialize_with = "nullable")]
    pub pricing_detail: Vec<PricingDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Airport {
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Segment {
    pub origin: Option<Airport>,
    pub destination: Option<Airport>,
    pub departure_date_time: Option<String>,
    pub arrival_date_time: Option<String>,
    pub flight: Option<Flight>,
    #[serde(deserialize_with = "nullable")]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Flight {
    pub flight_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Leg {
    pub aircraft: Option<Aircraft>,
    #[serde(deserialize_with = "nullable")]
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Aircraft {
    pub code: Option<String>,
    pub short_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingDetail {
    pub product_type: Option<String>,
    pub per_passenger_award_points: Option<Value>,
    pub per_passenger_taxes_and_fees: Option<Money>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Money {
    #[serde(deserialize_with = "loose_f64")]
    pub amount: Option<f64>,
}

fn code_of(airport: Option<&Airport>) -> String {
    airport
        .and_then(|a| a.code.clone())
        .unwrap_or_default()
}

impl Slice {
    pub fn origin_code(&self) -> String {
        code_of(self.origin.as_ref())
    }

    pub fn destination_code(&self) -> String {
        code_of(self.destination.as_ref())
    }

    /// Codes of the first connecting-city group, empty codes dropped.
    pub fn stop_cities(&self) -> Vec<String> {
        self.connecting_cities
            .first()
            .map(|group| {
                group
                    .iter()
                    .filter_map(|city| city.code.clone())
                    .filter(|code| !code.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Segment {
    pub fn origin_code(&self) -> String {
        code_of(self.origin.as_ref())
    }

    pub fn destination_code(&self) -> String {
        code_of(self.destination.as_ref())
    }

    pub fn flight_number(&self) -> &str {
        self.flight
            .as_ref()
            .and_then(|f| f.flight_number.as_deref())
            .unwrap_or("")
    }

    pub fn first_leg(&self) -> Option<&Leg> {
        self.legs.first()
    }
}

impl PricingDetail {
    pub fn product_type(&self) -> &str {
        self.product_type.as_deref().unwrap_or("")
    }

    /// Points per passenger; absent, null, zero or unreadable all mean no award price (`-1`).
    pub fn award_points(&self) -> i64 {
        self.per_passenger_award_points
            .as_ref()
            .and_then(value_as_i64)
            .filter(|points| *points > 0)
            .unwrap_or(-1)
    }

    pub fn cash_fee(&self) -> f64 {
        self.per_passenger_taxes_and_fees
            .as_ref()
            .and_then(|m| m.amount)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let response: ItineraryResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.error.is_none());
        assert!(response.slices.is_empty());

        let slice: Slice = serde_json::from_value(json!({})).unwrap();
        assert_eq!(slice.origin_code(), "");
        assert!(slice.stop_cities().is_empty());
        assert!(slice.duration_in_minutes.is_none());
    }

    #[test]
    fn explicit_nulls_are_treated_as_absent() {
        let segment: Segment = serde_json::from_value(json!({
            "origin": null,
            "flight": {"flightNumber": null},
            "departureDateTime": null,
            "legs": null
        }))
        .unwrap();
        assert_eq!(segment.origin_code(), "");
        assert_eq!(segment.flight_number(), "");
        assert!(segment.departure_date_time.is_none());
        assert!(segment.first_leg().is_none());
    }

    #[test]
    fn stop_cities_come_from_the_first_group_only() {
        let slice: Slice = serde_json::from_value(json!({
            "connectingCities": [
                [{"code": "ORD"}, {"code": ""}, {}],
                [{"code": "DFW"}]
            ]
        }))
        .unwrap();
        assert_eq!(slice.stop_cities(), vec!["ORD".to_string()]);
    }

    #[test]
    fn cash_fee_defaults_to_zero() {
        let pricing: PricingDetail =
            serde_json::from_value(json!({"productType": "COACH"})).unwrap();
        assert_eq!(pricing.cash_fee(), 0.0);
        assert_eq!(pricing.product_type(), "COACH");
    }

    #[test]
    fn award_points_use_minus_one_for_missing_or_zero() {
        let points = |v: Value| {
            serde_json::from_value::<PricingDetail>(json!({"perPassengerAwardPoints": v}))
                .unwrap()
                .award_points()
        };
        assert_eq!(points(json!(12500)), 12500);
        assert_eq!(points(json!(0)), -1);
        assert_eq!(points(json!("0")), -1);
        assert_eq!(points(json!("57500")), 57500);
        assert_eq!(points(json!("")), -1);
        assert_eq!(points(Value::Null), -1);
        assert_eq!(PricingDetail::default().award_points(), -1);
    }

    #[test]
    fn loosely_typed_numbers_do_not_fail_the_parse() {
        let response = crate::parser::parse_itinerary(
            r#"{"slices": [{
                "durationInMinutes": 415.0,
                "stops": "1",
                "pricingDetail": [{
                    "productType": "COACH",
                    "perPassengerTaxesAndFees": {"amount": "5.60"}
                }]
            }]}"#,
        )
        .unwrap();
        let slice = &response.slices[0];
        assert_eq!(slice.duration_in_minutes, Some(415));
        assert_eq!(slice.stops, Some(1));
        assert_eq!(slice.pricing_detail[0].cash_fee(), 5.6);
    }

    #[test]
    fn unreadable_numbers_fall_back_to_defaults() {
        let slice: Slice = serde_json::from_value(json!({
            "durationInMinutes": "long",
            "stops": {"count": 1},
            "pricingDetail": [{"perPassengerTaxesAndFees": {"amount": null}}]
        }))
        .unwrap();
        assert!(slice.duration_in_minutes.is_none());
        assert!(slice.stops.is_none());
        assert_eq!(slice.pricing_detail[0].cash_fee(), 0.0);
    }
}
