//! Seeding of seat availability for sample trips.
//!
//! Sample data has no booking history, so a share of seats is marked as
//! already booked at random. Callers pass the RNG so tests can seed it.

use rand::Rng;
use crate::CatalogError;

/// Share of seats shown as booked on a freshly opened seat map
pub const DEFAULT_BOOKED_RATIO: f64 = 0.3;

/// Availability closure for [`crate::SeatMapBuilder::build`].
pub fn random_availability<R: Rng>(
    rng: &mut R,
    booked_ratio: f64,
) -> Result<impl FnMut(&str) -> bool + '_, CatalogError> {
    if !(0.0..=1.0).contains(&booked_ratio) {
        return Err(CatalogError::InvalidRatio(booked_ratio));
    }
    Ok(move |_label: &str| rng.gen::<f64>() >= booked_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeatMapBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_availability_is_reproducible() {
        let build = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let availability = random_availability(&mut rng, DEFAULT_BOOKED_RATIO).unwrap();
            SeatMapBuilder::new("bus3", 850).build(availability).unwrap()
        };

        assert_eq!(build(7), build(7));
    }

    #[test]
    fn test_ratio_bounds() {
        let mut rng = StdRng::seed_from_u64(1);

        let all_free = random_availability(&mut rng, 0.0).unwrap();
        let seats = SeatMapBuilder::new("bus1", 950).build(all_free).unwrap();
        assert!(seats.iter().all(|s| s.available));

        let all_booked = random_availability(&mut rng, 1.0).unwrap();
        let seats = SeatMapBuilder::new("bus1", 950).build(all_booked).unwrap();
        assert!(seats.iter().all(|s| !s.available));

        assert!(matches!(
            random_availability(&mut rng, 1.5),
            Err(CatalogError::InvalidRatio(_))
        ));
    }
}
