pub mod app_config;
pub mod trip_repo;
pub mod basket_store;
pub mod events;

pub use trip_repo::InMemoryTripRepository;
pub use basket_store::{BasketSession, BasketStore};
pub use events::LogBookingGateway;
