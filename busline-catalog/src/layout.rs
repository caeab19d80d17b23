use serde::{Deserialize, Serialize};
use crate::seat::{SeatCategory, SeatOffer};
use crate::CatalogError;

/// Flat surcharge applied to window seats unless configured otherwise
pub const DEFAULT_WINDOW_SURCHARGE: i64 = 50;

/// Physical seat grid of a coach.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatLayout {
    /// Row letters, front to back
    pub rows: Vec<char>,
    /// Number of column positions including the aisle gap
    pub columns: u8,
    /// Column position left empty for the aisle
    pub aisle_gap: Option<u8>,
}

impl Default for SeatLayout {
    /// Five rows of 2+3 seating, position 3 is the aisle.
    fn default() -> Self {
        Self {
            rows: vec!['A', 'B', 'C', 'D', 'E'],
            columns: 6,
            aisle_gap: Some(3),
        }
    }
}

impl SeatLayout {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.rows.is_empty() {
            return Err(CatalogError::InvalidLayout("layout has no rows".to_string()));
        }
        if self.columns < 2 {
            return Err(CatalogError::InvalidLayout(format!(
                "at least 2 columns required, got {}",
                self.columns
            )));
        }
        if let Some(gap) = self.aisle_gap {
            if gap <= 1 || gap >= self.columns {
                return Err(CatalogError::InvalidLayout(format!(
                    "aisle gap {} must sit between the window columns",
                    gap
                )));
            }
        }
        Ok(())
    }

    /// Outer columns are window seats, their neighbours middle, the rest aisle.
    pub fn category_for(&self, column: u8) -> SeatCategory {
        if column == 1 || column == self.columns {
            SeatCategory::Window
        } else if column == 2 || column + 1 == self.columns {
            SeatCategory::Middle
        } else {
            SeatCategory::Aisle
        }
    }

    /// Seat labels with their category, in row-major order.
    pub fn seats(&self) -> impl Iterator<Item = (String, SeatCategory)> + '_ {
        self.rows.iter().flat_map(move |row| {
            (1..=self.columns)
                .filter(move |col| Some(*col) != self.aisle_gap)
                .map(move |col| (format!("{}{}", row, col), self.category_for(col)))
        })
    }

    pub fn capacity(&self) -> usize {
        let per_row = (self.columns as usize).saturating_sub(usize::from(self.aisle_gap.is_some()));
        self.rows.len() * per_row
    }
}

/// Builds the seat catalog of one trip.
pub struct SeatMapBuilder {
    trip_id: String,
    base_price: i64,
    window_surcharge: i64,
    layout: SeatLayout,
}

impl SeatMapBuilder {
    pub fn new(trip_id: impl Into<String>, base_price: i64) -> Self {
        Self {
            trip_id: trip_id.into(),
            base_price,
            window_surcharge: DEFAULT_WINDOW_SURCHARGE,
            layout: SeatLayout::default(),
        }
    }

    pub fn window_surcharge(mut self, surcharge: i64) -> Self {
        self.window_surcharge = surcharge;
        self
    }

    pub fn layout(mut self, layout: SeatLayout) -> Self {
        self.layout = layout;
        self
    }

    /// `is_available` is asked once per seat label. Availability is data to
    /// the catalog, never computed here.
    pub fn build<F>(&self, mut is_available: F) -> Result<Vec<SeatOffer>, CatalogError>
    where
        F: FnMut(&str) -> bool,
    {
        self.layout.validate()?;

        let seats = self
            .layout
            .seats()
            .map(|(label, category)| {
                let surcharge = match category {
                    SeatCategory::Window => self.window_surcharge,
                    _ => 0,
                };
                let available = is_available(&label);
                SeatOffer::new(&self.trip_id, label, category, self.base_price, surcharge, available)
            })
            .collect();

        Ok(seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_shape() {
        let layout = SeatLayout::default();
        let seats: Vec<_> = layout.seats().collect();

        assert_eq!(seats.len(), 25);
        assert_eq!(layout.capacity(), 25);
        assert!(seats.iter().all(|(label, _)| !label.ends_with('3')));

        let row_a: Vec<_> = seats.iter().take(5).cloned().collect();
        assert_eq!(
            row_a,
            vec![
                ("A1".to_string(), SeatCategory::Window),
                ("A2".to_string(), SeatCategory::Middle),
                ("A4".to_string(), SeatCategory::Aisle),
                ("A5".to_string(), SeatCategory::Middle),
                ("A6".to_string(), SeatCategory::Window),
            ]
        );
    }

    #[test]
    fn test_build_prices_window_seats() {
        let seats = SeatMapBuilder::new("bus2", 750).build(|_| true).unwrap();

        let a1 = seats.iter().find(|s| s.label == "A1").unwrap();
        assert_eq!(a1.id, "bus2-A1");
        assert_eq!(a1.surcharge, 50);
        assert_eq!(a1.fare(), 800);

        let a4 = seats.iter().find(|s| s.label == "A4").unwrap();
        assert_eq!(a4.surcharge, 0);
        assert_eq!(a4.fare(), 750);
    }

    #[test]
    fn test_build_takes_supplied_availability() {
        let seats = SeatMapBuilder::new("bus1", 950)
            .window_surcharge(80)
            .build(|label| label.starts_with('A'))
            .unwrap();

        assert_eq!(seats.iter().filter(|s| s.available).count(), 5);
        assert!(seats.iter().all(|s| !s.selected));
        assert_eq!(seats[0].fare(), 1030);
    }

    #[test]
    fn test_invalid_layout() {
        let layout = SeatLayout {
            rows: vec!['A'],
            columns: 4,
            aisle_gap: Some(4),
        };
        let result = SeatMapBuilder::new("bus1", 100).layout(layout).build(|_| true);
        assert!(matches!(result, Err(CatalogError::InvalidLayout(_))));

        let degenerate = SeatLayout {
            rows: vec!['A'],
            columns: 0,
            aisle_gap: Some(3),
        };
        assert_eq!(degenerate.capacity(), 0);
        assert!(degenerate.validate().is_err());

        let empty = SeatLayout {
            rows: vec![],
            ..SeatLayout::default()
        };
        assert!(empty.validate().is_err());
    }
}
