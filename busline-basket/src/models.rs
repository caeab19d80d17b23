use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// Trip a basket was opened for. Carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripContext {
    pub trip_id: String,
    pub travel_date: NaiveDate,
    pub origin: String,
    pub destination: String,
}

/// Handed to the booking collaborator on confirmation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingResult {
    pub seat_count: usize,
    pub total_amount: i64,
}
