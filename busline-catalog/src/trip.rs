use std::collections::BTreeSet;
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled coach service as shown in the listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusTrip {
    pub id: String,
    pub operator_name: String,
    pub bus_type: String,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    pub duration_minutes: u32,
    pub base_price: i64,
    /// Advertised count for the listing; the seat map carries real availability
    pub available_seats: u32,
    pub rating: f32,
    pub amenities: Vec<String>,
}

impl BusTrip {
    /// Overnight services arrive the day after departure.
    pub fn arrival_date(&self, travel_date: NaiveDate) -> NaiveDate {
        if self.arrival_time < self.departure_time {
            travel_date + Duration::days(1)
        } else {
            travel_date
        }
    }

    /// "9h", "8h 30m"
    pub fn duration_label(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        match (hours, minutes) {
            (0, m) => format!("{}m", m),
            (h, 0) => format!("{}h", h),
            (h, m) => format!("{}h {}m", h, m),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Every city served by the given routes, sorted and de-duplicated.
pub fn locations(routes: &[Route]) -> Vec<String> {
    routes
        .iter()
        .flat_map(|r| [r.origin.clone(), r.destination.clone()])
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
