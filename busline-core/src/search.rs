use serde::{Deserialize, Serialize};
use chrono::{NaiveDate, NaiveTime};
use busline_catalog::BusTrip;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct TripSearchRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>, // Travel day only, time is ignored
}

/// A search request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

impl TripSearchRequest {
    /// Origin, destination and date are all required, the two cities must
    /// differ and the date may not be earlier than `today`.
    pub fn validate(&self, today: NaiveDate) -> CoreResult<TripQuery> {
        let origin = self
            .origin
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::ValidationError("origin is required".to_string()))?;
        let destination = self
            .destination
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::ValidationError("destination is required".to_string()))?;
        let date = self
            .date
            .ok_or_else(|| CoreError::ValidationError("date is required".to_string()))?;

        if date < today {
            return Err(CoreError::ValidationError(format!(
                "travel date {} is in the past",
                date
            )));
        }

        if origin.eq_ignore_ascii_case(destination) {
            return Err(CoreError::ValidationError(
                "origin and destination must differ".to_string(),
            ));
        }

        Ok(TripQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
            date,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TripSearchResult {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub trips: Vec<TripOption>,
}

/// One row of the bus listing
#[derive(Debug, Serialize)]
pub struct TripOption {
    pub trip_id: String,
    pub operator_name: String,
    pub bus_type: String,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub departure_date: NaiveDate,
    pub arrival_date: NaiveDate,
    pub duration: String,
    pub price: i64,
    pub available_seats: u32,
    pub rating: f32,
    pub amenities: Vec<String>,
}

impl TripOption {
    pub fn from_trip(trip: &BusTrip, date: NaiveDate) -> Self {
        Self {
            trip_id: trip.id.clone(),
            operator_name: trip.operator_name.clone(),
            bus_type: trip.bus_type.clone(),
            departure_time: trip.departure_time,
            arrival_time: trip.arrival_time,
            departure_date: date,
            arrival_date: trip.arrival_date(date),
            duration: trip.duration_label(),
            price: trip.base_price,
            available_seats: trip.available_seats,
            rating: trip.rating,
            amenities: trip.amenities.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_search_request_deserialization() {
        let json = r#"
            {
                "origin": "Bangalore",
                "destination": "Goa",
                "date": "2026-12-25"
            }
        "#;
        let req: TripSearchRequest = serde_json::from_str(json).expect("Failed to deserialize");
        let query = req.validate(today()).unwrap();
        assert_eq!(query.origin, "Bangalore");
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2026, 12, 25).unwrap());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let req: TripSearchRequest =
            serde_json::from_str(r#"{"origin": "Bangalore", "date": "2026-12-25"}"#).unwrap();
        assert!(matches!(req.validate(today()), Err(CoreError::ValidationError(_))));

        let req: TripSearchRequest =
            serde_json::from_str(r#"{"origin": " ", "destination": "Goa", "date": "2026-12-25"}"#).unwrap();
        assert!(req.validate(today()).is_err());

        let req: TripSearchRequest =
            serde_json::from_str(r#"{"origin": "Hassan", "destination": "Goa"}"#).unwrap();
        assert!(req.validate(today()).is_err());
    }

    #[test]
    fn test_past_date_rejected() {
        let mut req = TripSearchRequest {
            origin: Some("Bangalore".to_string()),
            destination: Some("Goa".to_string()),
            date: NaiveDate::from_ymd_opt(2000, 1, 1),
        };
        assert!(matches!(req.validate(today()), Err(CoreError::ValidationError(_))));

        req.date = NaiveDate::from_ymd_opt(2026, 10, 17);
        assert!(req.validate(today()).is_err());

        // Same-day travel is allowed
        req.date = Some(today());
        assert_eq!(req.validate(today()).unwrap().date, today());
    }

    #[test]
    fn test_same_city_rejected() {
        let req = TripSearchRequest {
            origin: Some("Goa".to_string()),
            destination: Some("goa".to_string()),
            date: NaiveDate::from_ymd_opt(2026, 12, 25),
        };
        assert!(matches!(req.validate(today()), Err(CoreError::ValidationError(_))));
    }
}
