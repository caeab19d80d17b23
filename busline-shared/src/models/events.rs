use uuid::Uuid;

/// Emitted once a basket is confirmed. The booking collaborator that
/// receives it owns reservation and persistence.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub booking_id: Uuid,
    pub basket_id: Uuid,
    pub trip_id: String,
    pub operator_name: String,
    pub travel_date: chrono::NaiveDate,
    pub origin: String,
    pub destination: String,
    pub seat_labels: Vec<String>,
    pub seat_count: usize,
    pub total_amount: i64,
    pub currency: String,
    pub timestamp: i64,
}

impl BookingConfirmedEvent {
    /// Message shown to the traveller, e.g. "2 seats booked on VRL Travels for ₹1725"
    pub fn summary(&self) -> String {
        format!(
            "{} seats booked on {} for ₹{}",
            self.seat_count, self.operator_name, self.total_amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = BookingConfirmedEvent {
            booking_id: Uuid::new_v4(),
            basket_id: Uuid::new_v4(),
            trip_id: "bus2".to_string(),
            operator_name: "Seabird Tourists".to_string(),
            travel_date: chrono::NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            origin: "Bangalore".to_string(),
            destination: "Goa".to_string(),
            seat_labels: vec!["A1".to_string()],
            seat_count: 1,
            total_amount: 825,
            currency: "INR".to_string(),
            timestamp: 0,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["trip_id"], "bus2");
        assert_eq!(json["travel_date"], "2026-11-02");
        assert_eq!(event.summary(), "1 seats booked on Seabird Tourists for ₹825");
    }
}
