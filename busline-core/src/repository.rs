use async_trait::async_trait;
use busline_catalog::{BusTrip, Route};
use busline_shared::BookingConfirmedEvent;
use crate::search::TripQuery;

/// Source of scheduled trips
#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn search_trips(
        &self,
        query: &TripQuery,
    ) -> Result<Vec<BusTrip>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get_trip(
        &self,
        trip_id: &str,
    ) -> Result<Option<BusTrip>, Box<dyn std::error::Error + Send + Sync>>;

    async fn popular_routes(
        &self,
    ) -> Result<Vec<Route>, Box<dyn std::error::Error + Send + Sync>>;
}

/// External collaborator that reserves seats and issues the confirmation record
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn submit(
        &self,
        event: &BookingConfirmedEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
