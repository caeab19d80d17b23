use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use busline_catalog::{trip::locations, Route};
use busline_core::search::{TripOption, TripSearchRequest, TripSearchResult};
use chrono::Utc;
use tracing::info;
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/routes/popular", get(popular_routes))
        .route("/v1/locations", get(list_locations))
        .route("/v1/trips/search", post(search_trips))
}

/// GET /v1/routes/popular
async fn popular_routes(State(state): State<AppState>) -> Result<Json<Vec<Route>>, AppError> {
    let routes = state
        .trip_repo
        .popular_routes()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(routes))
}

/// GET /v1/locations
/// Cities offered in the origin/destination pickers
async fn list_locations(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let routes = state
        .trip_repo
        .popular_routes()
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    Ok(Json(locations(&routes)))
}

/// POST /v1/trips/search
async fn search_trips(
    State(state): State<AppState>,
    Json(req): Json<TripSearchRequest>,
) -> Result<Json<TripSearchResult>, AppError> {
    let query = req.validate(Utc::now().date_naive())?;

    let trips = state.trip_repo.search_trips(&query).await.map_err(|e| {
        info!("Search failed: {}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    info!(
        "Found {} trips from {} to {} on {}",
        trips.len(),
        query.origin,
        query.destination,
        query.date
    );

    let options = trips
        .iter()
        .map(|trip| TripOption::from_trip(trip, query.date))
        .collect();

    Ok(Json(TripSearchResult {
        origin: query.origin,
        destination: query.destination,
        date: query.date,
        trips: options,
    }))
}
