pub mod models;
pub mod basket;

pub use models::{TripContext, BookingResult};
pub use basket::{FareBasket, BasketError};
