use async_trait::async_trait;
use chrono::NaiveTime;
use busline_catalog::{BusTrip, Route};
use busline_core::repository::TripRepository;
use busline_core::search::TripQuery;
use std::error::Error;

/// Trips and routes held in memory. The listing is the same for every
/// route; only the seat maps differ per trip.
pub struct InMemoryTripRepository {
    trips: Vec<BusTrip>,
    routes: Vec<Route>,
}

impl InMemoryTripRepository {
    pub fn new(trips: Vec<BusTrip>, routes: Vec<Route>) -> Self {
        Self { trips, routes }
    }

    /// The storefront's sample operators and popular routes
    pub fn with_sample_data() -> Self {
        Self::new(sample_trips(), sample_routes())
    }
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn search_trips(
        &self,
        query: &TripQuery,
    ) -> Result<Vec<BusTrip>, Box<dyn Error + Send + Sync>> {
        tracing::debug!(
            origin = %query.origin,
            destination = %query.destination,
            date = %query.date,
            "Listing sample trips"
        );
        Ok(self.trips.clone())
    }

    async fn get_trip(
        &self,
        trip_id: &str,
    ) -> Result<Option<BusTrip>, Box<dyn Error + Send + Sync>> {
        Ok(self.trips.iter().find(|t| t.id == trip_id).cloned())
    }

    async fn popular_routes(&self) -> Result<Vec<Route>, Box<dyn Error + Send + Sync>> {
        Ok(self.routes.clone())
    }
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn amenities(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn sample_trips() -> Vec<BusTrip> {
    vec![
        BusTrip {
            id: "bus1".to_string(),
            operator_name: "Karnataka State Express".to_string(),
            bus_type: "AC Sleeper".to_string(),
            departure_time: time(21, 0),
            arrival_time: time(6, 0),
            duration_minutes: 540,
            base_price: 950,
            available_seats: 23,
            rating: 4.5,
            amenities: amenities(&["Charging Point", "Blankets", "Water Bottle", "Reading Light"]),
        },
        BusTrip {
            id: "bus2".to_string(),
            operator_name: "Seabird Tourists".to_string(),
            bus_type: "Non-AC Sleeper".to_string(),
            departure_time: time(20, 30),
            arrival_time: time(5, 30),
            duration_minutes: 540,
            base_price: 750,
            available_seats: 15,
            rating: 4.2,
            amenities: amenities(&["Water Bottle", "Reading Light"]),
        },
        BusTrip {
            id: "bus3".to_string(),
            operator_name: "VRL Travels".to_string(),
            bus_type: "AC Seater".to_string(),
            departure_time: time(22, 15),
            arrival_time: time(6, 45),
            duration_minutes: 510,
            base_price: 850,
            available_seats: 32,
            rating: 4.7,
            amenities: amenities(&["Charging Point", "WiFi", "Water Bottle", "Snacks"]),
        },
        BusTrip {
            id: "bus4".to_string(),
            operator_name: "SRS Travels".to_string(),
            bus_type: "Volvo AC Sleeper".to_string(),
            departure_time: time(23, 0),
            arrival_time: time(7, 30),
            duration_minutes: 510,
            base_price: 1050,
            available_seats: 8,
            rating: 4.8,
            amenities: amenities(&["Charging Point", "Blankets", "Water Bottle", "Reading Light", "WiFi"]),
        },
    ]
}

pub fn sample_routes() -> Vec<Route> {
    vec![
        Route::new("Bangalore", "Bhatkal"),
        Route::new("Bangalore", "Mantralaya"),
        Route::new("Bangalore", "Goa"),
        Route::new("Chikkamagaluru", "Bangalore"),
        Route::new("Hassan", "Bhatkal"),
    ]
}
