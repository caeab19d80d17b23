use std::sync::{Arc, Mutex};
use busline_core::repository::{BookingGateway, TripRepository};
use busline_store::app_config::BusinessRules;
use busline_store::BasketStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone)]
pub struct AppState {
    pub trip_repo: Arc<dyn TripRepository>,
    pub booking_gateway: Arc<dyn BookingGateway>,
    pub baskets: Arc<BasketStore>,
    pub business_rules: BusinessRules,
    /// Seeds seat availability on new seat maps
    pub seat_rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(
        trip_repo: Arc<dyn TripRepository>,
        booking_gateway: Arc<dyn BookingGateway>,
        business_rules: BusinessRules,
    ) -> Self {
        let rng = match business_rules.seat_map_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            trip_repo,
            booking_gateway,
            baskets: Arc::new(BasketStore::new()),
            business_rules,
            seat_rng: Arc::new(Mutex::new(rng)),
        }
    }
}
