use crate::config::CabinClassTables;
use crate::filter::SearchCriteria;
use crate::model::{FlightPointInfo, FlightSegment, FlightTime, ParserError};
use crate::parser::{ItineraryResponse, PricingDetail, Segment, Slice};
use crate::utils::{join_aircraft, split_datetime};
use tracing::debug;

/// Flattens every slice into one offer per matching cabin price.
///
/// Slices outside the departure-time filter, and cabin prices outside the
/// requested cabin class, produce nothing. A malformed timestamp in a slice
/// that would produce output fails the whole call.
pub fn normalize_all(
    response: &ItineraryResponse,
    criteria: &SearchCriteria,
    tables: &CabinClassTables,
) -> Result<Vec<FlightPointInfo>, ParserError> {
    let mut offers = Vec::new();
    for slice in &response.slices {
        normalize_slice(slice, criteria, tables, &mut offers)?;
    }
    Ok(offers)
}

fn normalize_slice(
    slice: &Slice,
    criteria: &SearchCriteria,
    tables: &CabinClassTables,
    offers: &mut Vec<FlightPointInfo>,
) -> Result<(), ParserError> {
    if !criteria.matches_departure_time(slice) {
        return Ok(());
    }

    let prices: Vec<(&PricingDetail, String, String)> = slice
        .pricing_detail
        .iter()
        .filter_map(|pricing| {
            let (label, identifier) = tables.resolve(pricing.product_type());
            criteria
                .matches_cabin_class(&identifier)
                .then_some((pricing, label, identifier))
        })
        .collect();
    if prices.is_empty() {
        debug!(
            "No matching cabin in slice {} -> {}",
            slice.origin_code(),
            slice.destination_code()
        );
        return Ok(());
    }

    let departure = split_optional(slice.departure_date_time.as_deref())?;
    let arrival = split_optional(slice.arrival_date_time.as_deref())?;
    let segments = slice
        .segments
        .iter()
        .map(build_segment)
        .collect::<Result<Vec<_>, _>>()?;

    for (pricing, label, identifier) in prices {
        offers.push(FlightPointInfo {
            origin: slice.origin_code(),
            destination: slice.destination_code(),
            cabin_class: identifier,
            airline_cabin_class: label,
            duration: slice.duration_in_minutes.unwrap_or(0),
            stops: slice.stops.unwrap_or(0),
            departure_date: departure.as_ref().map(|t| t.date.clone()),
            departure_time: departure.as_ref().map(|t| t.time.clone()),
            departure_timezone: departure.as_ref().map(|t| t.timezone.clone()),
            arrival_date: arrival.as_ref().map(|t| t.date.clone()),
            arrival_time: arrival.as_ref().map(|t| t.time.clone()),
            arrival_timezone: arrival.as_ref().map(|t| t.timezone.clone()),
            points: pricing.award_points(),
            cash_fee: pricing.cash_fee(),
            stop_cities: slice.stop_cities(),
            carriers: slice.carrier_names.clone(),
            segments: segments.clone(),
        });
    }
    Ok(())
}

fn build_segment(segment: &Segment) -> Result<FlightSegment, ParserError> {
    let departure = split_optional(segment.departure_date_time.as_deref())?;
    let arrival = split_optional(segment.arrival_date_time.as_deref())?;
    let leg = segment.first_leg();
    let aircraft = leg.and_then(|l| l.aircraft.as_ref());

    Ok(FlightSegment {
        origin: segment.origin_code(),
        destination: segment.destination_code(),
        departure_date: departure.as_ref().map(|t| t.date.clone()),
        departure_time: departure.as_ref().map(|t| t.time.clone()),
        departure_timezone: departure.map(|t| t.timezone),
        arrival_date: arrival.as_ref().map(|t| t.date.clone()),
        arrival_time: arrival.as_ref().map(|t| t.time.clone()),
        arrival_timezone: arrival.map(|t| t.timezone),
        flight_number: segment.flight_number().to_string(),
        aircraft: join_aircraft(
            aircraft.and_then(|a| a.code.as_deref()),
            aircraft.and_then(|a| a.short_name.as_deref()),
        ),
        amenities: leg.map(|l| l.amenities.clone()).unwrap_or_default(),
    })
}

fn split_optional(value: Option<&str>) -> Result<Option<FlightTime>, ParserError> {
    value.map(split_datetime).transpose()
}

/// Points for one specific flight, or `-1` when the flight or the cabin price is missing.
pub fn lookup_flight_points(
    response: &ItineraryResponse,
    criteria: &SearchCriteria,
    tables: &CabinClassTables,
) -> i64 {
    for slice in &response.slices {
        if !criteria.matches_departure_time(slice) {
            continue;
        }
        for segment in &slice.segments {
            if !criteria.matches_flight_number(segment) {
                continue;
            }
            let matched = slice.pricing_detail.iter().find(|pricing| {
                let (_, identifier) = tables.resolve(pricing.product_type());
                criteria.matches_cabin_class(&identifier)
            });
            if let Some(pricing) = matched {
                return pricing.award_points();
            }
        }
    }
    -1
}
