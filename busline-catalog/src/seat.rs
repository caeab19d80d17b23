use serde::{Deserialize, Serialize};

/// Seat classification. Only `Window` affects pricing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatCategory {
    Window,
    Middle,
    Aisle,
}

/// One bookable seat on one scheduled trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatOffer {
    /// `{trip_id}-{label}`
    pub id: String,
    pub label: String,
    pub category: SeatCategory,
    pub base_price: i64,
    pub surcharge: i64,
    pub available: bool,
    #[serde(default)]
    pub selected: bool,
}

impl SeatOffer {
    pub fn new(
        trip_id: &str,
        label: impl Into<String>,
        category: SeatCategory,
        base_price: i64,
        surcharge: i64,
        available: bool,
    ) -> Self {
        let label = label.into();
        Self {
            id: format!("{}-{}", trip_id, label),
            label,
            category,
            base_price,
            surcharge,
            available,
            selected: false,
        }
    }

    /// Price charged for this seat: the surcharge only applies to window seats.
    /// `None` when the sum does not fit an `i64`.
    pub fn checked_fare(&self) -> Option<i64> {
        match self.category {
            SeatCategory::Window => self.base_price.checked_add(self.surcharge),
            SeatCategory::Middle | SeatCategory::Aisle => Some(self.base_price),
        }
    }

    /// Saturating form of [`SeatOffer::checked_fare`]
    pub fn fare(&self) -> i64 {
        self.checked_fare().unwrap_or(i64::MAX)
    }
}
