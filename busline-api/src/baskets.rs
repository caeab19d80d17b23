use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use busline_basket::{FareBasket, TripContext};
use busline_catalog::{seating::random_availability, SeatCategory, SeatMapBuilder, SeatOffer};
use busline_shared::BookingConfirmedEvent;
use busline_store::BasketSession;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;
use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenBasketRequest {
    pub trip_id: String,
    pub date: NaiveDate,
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BasketResponse {
    pub id: Uuid,
    pub trip_id: String,
    pub operator_name: String,
    pub travel_date: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub seats: Vec<SeatResponse>,
    pub selected_seats: Vec<String>,
    pub subtotal: i64,
    pub service_fee: i64,
    pub total: i64,
    pub currency: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeatResponse {
    pub id: String,
    pub label: String,
    pub category: SeatCategory,
    pub fare: i64,
    pub available: bool,
    pub selected: bool,
}

impl From<&SeatOffer> for SeatResponse {
    fn from(seat: &SeatOffer) -> Self {
        Self {
            id: seat.id.clone(),
            label: seat.label.clone(),
            category: seat.category,
            fare: seat.fare(),
            available: seat.available,
            selected: seat.selected,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmBookingResponse {
    pub booking_id: Uuid,
    pub seat_count: usize,
    pub total_amount: i64,
    pub currency: String,
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/baskets", post(open_basket))
        .route("/v1/baskets/{id}", get(get_basket).delete(abandon_basket))
        .route("/v1/baskets/{id}/seats/{seat_id}/toggle", post(toggle_seat))
        .route("/v1/baskets/{id}/confirm", post(confirm_booking))
}

/// POST /v1/baskets
/// Open the seat map of a listed trip
async fn open_basket(
    State(state): State<AppState>,
    Json(req): Json<OpenBasketRequest>,
) -> Result<(StatusCode, Json<BasketResponse>), AppError> {
    let trip = state
        .trip_repo
        .get_trip(&req.trip_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Trip not found: {}", req.trip_id)))?;

    let rules = &state.business_rules;
    let seats = {
        let mut rng = state
            .seat_rng
            .lock()
            .map_err(|_| AppError::InternalServerError("Seat seeding lock poisoned".to_string()))?;
        let availability = random_availability(&mut *rng, rules.booked_ratio)?;
        SeatMapBuilder::new(&trip.id, trip.base_price)
            .window_surcharge(rules.window_surcharge)
            .build(availability)?
    };

    let context = TripContext {
        trip_id: trip.id.clone(),
        travel_date: req.date,
        origin: req.origin,
        destination: req.destination,
    };
    // The seat map is built here, so a rejected catalog is a server fault
    let basket = FareBasket::initialize(context, seats)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    let session = BasketSession::new(basket, trip.operator_name);
    let response = basket_response(&session, &state);

    state.baskets.insert(session).await;

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /v1/baskets/{id}
async fn get_basket(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BasketResponse>, AppError> {
    let handle = find_session(&state, &id).await?;
    let session = handle.lock().await;
    ensure_open(&session)?;

    Ok(Json(basket_response(&session, &state)))
}

/// POST /v1/baskets/{id}/seats/{seat_id}/toggle
async fn toggle_seat(
    State(state): State<AppState>,
    Path((id, seat_id)): Path<(Uuid, String)>,
) -> Result<Json<BasketResponse>, AppError> {
    let handle = find_session(&state, &id).await?;
    let mut session = handle.lock().await;
    ensure_open(&session)?;

    session.basket.toggle_selection(&seat_id)?;

    Ok(Json(basket_response(&session, &state)))
}

/// POST /v1/baskets/{id}/confirm
/// Hand the selection to the booking collaborator and discard the basket
async fn confirm_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConfirmBookingResponse>, AppError> {
    let handle = find_session(&state, &id).await?;
    let mut session = handle.lock().await;
    ensure_open(&session)?;

    let service_fee = state.business_rules.service_fee;
    let result = session.basket.confirm_booking(service_fee)?;

    let context = session.basket.context();
    let event = BookingConfirmedEvent {
        booking_id: Uuid::new_v4(),
        basket_id: session.id,
        trip_id: context.trip_id.clone(),
        operator_name: session.operator_name.clone(),
        travel_date: context.travel_date,
        origin: context.origin.clone(),
        destination: context.destination.clone(),
        seat_labels: session
            .basket
            .selected_seats()
            .iter()
            .map(|seat| seat.label.clone())
            .collect(),
        seat_count: result.seat_count,
        total_amount: result.total_amount,
        currency: state.business_rules.currency.clone(),
        timestamp: Utc::now().timestamp(),
    };

    state.booking_gateway.submit(&event).await.map_err(|e| {
        warn!("Booking gateway rejected basket {}: {}", id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    session.closed = true;
    drop(session);
    state.baskets.remove(&id).await;

    info!("{}", event.summary());

    Ok(Json(ConfirmBookingResponse {
        booking_id: event.booking_id,
        seat_count: result.seat_count,
        total_amount: result.total_amount,
        currency: event.currency.clone(),
        message: event.summary(),
    }))
}

/// DELETE /v1/baskets/{id}
async fn abandon_basket(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let handle = find_session(&state, &id).await?;
    handle.lock().await.closed = true;
    state.baskets.remove(&id).await;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Helpers
// ============================================================================

async fn find_session(state: &AppState, id: &Uuid) -> Result<Arc<Mutex<BasketSession>>, AppError> {
    state
        .baskets
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFoundError(format!("Basket not found: {}", id)))
}

fn ensure_open(session: &BasketSession) -> Result<(), AppError> {
    if session.closed {
        return Err(AppError::NotFoundError(format!("Basket not found: {}", session.id)));
    }
    Ok(())
}

fn basket_response(session: &BasketSession, state: &AppState) -> BasketResponse {
    let basket = &session.basket;
    let context = basket.context();
    let service_fee = state.business_rules.service_fee;

    BasketResponse {
        id: session.id,
        trip_id: context.trip_id.clone(),
        operator_name: session.operator_name.clone(),
        travel_date: context.travel_date,
        origin: context.origin.clone(),
        destination: context.destination.clone(),
        seats: basket.seats().iter().map(SeatResponse::from).collect(),
        selected_seats: basket
            .selected_seats()
            .iter()
            .map(|seat| seat.label.clone())
            .collect(),
        subtotal: basket.subtotal(),
        service_fee,
        total: basket.total(service_fee),
        currency: state.business_rules.currency.clone(),
    }
}
