//! Profile generation handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{error_response, AppState};
use crate::resolver::AddressQuery;

/// `GET /api/generate?country=&city=&state=&zipcode=`
pub async fn generate_get_handler(
    State(state): State<AppState>,
    query: Result<Query<AddressQuery>, QueryRejection>,
) -> Response {
    match query {
        Ok(Query(query)) => generate(&state, query).await,
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    }
}

/// `POST /api/generate` with the same fields as a JSON body
pub async fn generate_post_handler(
    State(state): State<AppState>,
    body: Result<Json<AddressQuery>, JsonRejection>,
) -> Response {
    match body {
        Ok(Json(query)) => generate(&state, query).await,
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    }
}

async fn generate(state: &AppState, query: AddressQuery) -> Response {
    log::info!(
        "Generate request: country={:?} city={:?} state={:?} zipcode={:?}",
        query.country_raw,
        query.city,
        query.state,
        query.zipcode
    );
    match state.generator.generate(&query).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => {
            log::warn!("Generate request failed: {}", e);
            e.into_response()
        }
    }
}
