// HTTP entry point in front of the award checker
use crate::checker::AwardChecker;
use crate::model::{CheckerError, LiveCheckRequest, LiveCheckResponse};
use crate::scraper::Scraper;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

pub fn router<S: Scraper + 'static>(checker: Arc<AwardChecker<S>>) -> Router {
    Router::new()
        .route("/api/live_checker", post(live_checker::<S>))
        .with_state(checker)
}

pub async fn live_checker<S: Scraper + 'static>(
    State(checker): State<Arc<AwardChecker<S>>>,
    Json(req): Json<LiveCheckRequest>,
) -> Result<Json<LiveCheckResponse>, TriggerError> {
    info!(
        "Live check request: {} {} -> {} on {}",
        req.airline, req.origin, req.destination, req.departure_date
    );
    let response = checker.check(&req).await?;
    Ok(Json(response))
}

#[derive(Debug)]
pub struct TriggerError(pub CheckerError);

impl From<CheckerError> for TriggerError {
    fn from(err: CheckerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for TriggerError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CheckerError::UnsupportedAirline(_) => StatusCode::BAD_REQUEST,
            _ => {
                error!("Exception {}", self.0);
                StatusCode::BAD_GATEWAY
            }
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
