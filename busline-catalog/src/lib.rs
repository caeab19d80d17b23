pub mod seat;
pub mod layout;
pub mod seating;
pub mod trip;

pub use seat::{SeatOffer, SeatCategory};
pub use layout::{SeatLayout, SeatMapBuilder};
pub use trip::{BusTrip, Route};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid seat layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid booked ratio: {0}")]
    InvalidRatio(f64),
}
