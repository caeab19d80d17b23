use std::collections::HashMap;
use busline_catalog::SeatOffer;
use crate::models::{BookingResult, TripContext};

/// Seat catalog of one trip plus the traveller's current selection.
///
/// Selection only ever changes through [`FareBasket::toggle_selection`], which
/// refuses unavailable seats, so every selected seat is also available.
#[derive(Debug, Clone)]
pub struct FareBasket {
    context: TripContext,
    seats: Vec<SeatOffer>,
    index: HashMap<String, usize>,
}

impl FareBasket {
    /// Take ownership of a trip's seat catalog, keeping its order.
    pub fn initialize(context: TripContext, catalog: Vec<SeatOffer>) -> Result<Self, BasketError> {
        let mut index = HashMap::with_capacity(catalog.len());
        // Fare of the whole catalog; bounds any selection's subtotal
        let mut catalog_fare: i64 = 0;

        for (position, seat) in catalog.iter().enumerate() {
            if seat.base_price < 0 || seat.surcharge < 0 {
                return Err(BasketError::InvalidCatalog(format!(
                    "seat {} has a negative price",
                    seat.id
                )));
            }
            catalog_fare = seat
                .checked_fare()
                .and_then(|fare| catalog_fare.checked_add(fare))
                .ok_or_else(|| {
                    BasketError::InvalidCatalog(format!("fare total overflows at seat {}", seat.id))
                })?;
            if seat.selected && !seat.available {
                return Err(BasketError::InvalidCatalog(format!(
                    "seat {} is selected but not available",
                    seat.id
                )));
            }
            if index.insert(seat.id.clone(), position).is_some() {
                return Err(BasketError::InvalidCatalog(format!(
                    "duplicate seat id {}",
                    seat.id
                )));
            }
        }

        tracing::debug!(trip_id = %context.trip_id, seats = catalog.len(), "Fare basket initialized");

        Ok(Self {
            context,
            seats: catalog,
            index,
        })
    }

    pub fn context(&self) -> &TripContext {
        &self.context
    }

    /// Full catalog in its original order
    pub fn seats(&self) -> &[SeatOffer] {
        &self.seats
    }

    /// Flip the selection of an available seat. Unavailable seats are left
    /// untouched without error.
    pub fn toggle_selection(&mut self, seat_id: &str) -> Result<(), BasketError> {
        let position = *self
            .index
            .get(seat_id)
            .ok_or_else(|| BasketError::UnknownSeat(seat_id.to_string()))?;

        let seat = &mut self.seats[position];
        if !seat.available {
            tracing::debug!(seat_id, "Ignoring toggle on unavailable seat");
            return Ok(());
        }

        seat.selected = !seat.selected;
        Ok(())
    }

    /// Current selection in catalog order
    pub fn selected_seats(&self) -> Vec<&SeatOffer> {
        self.seats.iter().filter(|seat| seat.selected).collect()
    }

    pub fn subtotal(&self) -> i64 {
        self.seats
            .iter()
            .filter(|seat| seat.selected)
            .map(SeatOffer::fare)
            .sum()
    }

    /// `service_fee` is a flat, non-negative amount owned by the caller's
    /// pricing policy and added once per booking. Saturates at `i64::MAX`.
    pub fn total(&self, service_fee: i64) -> i64 {
        self.subtotal().saturating_add(service_fee)
    }

    /// Summarize the selection for the booking collaborator. Leaves the
    /// basket unchanged.
    pub fn confirm_booking(&self, service_fee: i64) -> Result<BookingResult, BasketError> {
        let seat_count = self.seats.iter().filter(|seat| seat.selected).count();
        if seat_count == 0 {
            return Err(BasketError::EmptySelection);
        }

        Ok(BookingResult {
            seat_count,
            total_amount: self.total(service_fee),
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BasketError {
    #[error("Invalid seat catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown seat: {0}")]
    UnknownSeat(String),

    #[error("No seats selected")]
    EmptySelection,
}
