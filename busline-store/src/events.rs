use async_trait::async_trait;
use busline_core::repository::BookingGateway;
use busline_shared::BookingConfirmedEvent;
use std::error::Error;
use tracing::{info, error};

/// Booking collaborator that only records the confirmation in the log.
/// Nothing is reserved or retained.
#[derive(Clone, Default)]
pub struct LogBookingGateway;

impl LogBookingGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BookingGateway for LogBookingGateway {
    async fn submit(&self, event: &BookingConfirmedEvent) -> Result<(), Box<dyn Error + Send + Sync>> {
        match serde_json::to_string(event) {
            Ok(payload) => {
                info!("Booking {} confirmed for trip {}: {}", event.booking_id, event.trip_id, payload);
                Ok(())
            }
            Err(e) => {
                error!("Failed to encode booking {}: {}", event.booking_id, e);
                Err(Box::new(e))
            }
        }
    }
}
