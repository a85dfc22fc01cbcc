// Caller-supplied criteria applied while slices are normalized
use crate::model::LiveCheckRequest;
use crate::parser::{Segment, Slice};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub departure_time: Option<String>,
    pub flight_no: Option<String>,
    pub cabin_class: Option<String>,
}

impl SearchCriteria {
    pub fn from_request(req: &LiveCheckRequest) -> Self {
        Self {
            departure_time: non_empty(req.departure_time.as_deref()),
            flight_no: non_empty(req.flight_no.as_deref()),
            cabin_class: non_empty(req.cabin_class.as_deref()),
        }
    }

    /// Loose substring match against the slice's combined departure timestamp.
    pub fn matches_departure_time(&self, slice: &Slice) -> bool {
        match self.departure_time.as_deref() {
            None => true,
            Some(wanted) => slice
                .departure_date_time
                .as_deref()
                .unwrap_or("")
                .contains(wanted),
        }
    }

    pub fn matches_flight_number(&self, segment: &Segment) -> bool {
        match self.flight_no.as_deref() {
            None => true,
            Some(wanted) => segment.flight_number() == wanted,
        }
    }

    /// Case-insensitive comparison with the caller-facing cabin identifier.
    pub fn matches_cabin_class(&self, identifier: &str) -> bool {
        match self.cabin_class.as_deref() {
            None => true,
            Some(wanted) => identifier.to_lowercase() == wanted.to_lowercase(),
        }
    }
}

// Empty strings from the caller behave like an omitted filter.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
