use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::middleware::request_id::RequestId;
use crate::models::{
    ContactForm, ContactReceipt, RecommendationRequest, RecommendationResponse, RequestPhase,
};
use crate::services::contact::submit_contact;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub current: RequestPhase,
    pub last_outcome: Option<RequestPhase>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommend books similar to the submitted title
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let seed = request.title.trim().to_string();

    tracing::info!(
        request_id = %request_id,
        seed = %seed,
        "Processing recommendation request"
    );

    let outcome = state.fetcher.recommend(&seed).await?;

    Ok(Json(RecommendationResponse::new(seed, &outcome)))
}

/// Current and last reported phase of the recommendation session
pub async fn recommendation_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let session = state.fetcher.session();
    Json(StatusResponse {
        current: session.phase(),
        last_outcome: session.last_outcome(),
    })
}

/// Simulated contact form submission
pub async fn contact(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(mut form): Json<ContactForm>,
) -> AppResult<Json<ContactReceipt>> {
    tracing::info!(request_id = %request_id, "Processing contact submission");

    let receipt = submit_contact(&mut form, state.contact_delay).await?;
    Ok(Json(receipt))
}
