use std::sync::Arc;
use busline_store::BasketStore;
use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

/// Periodically discard baskets the traveller walked away from.
pub fn start_basket_expiry_worker(
    baskets: Arc<BasketStore>,
    ttl_seconds: u64,
    sweep_seconds: u64,
) -> JoinHandle<()> {
    let ttl = i64::try_from(ttl_seconds)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .unwrap_or(chrono::Duration::MAX);

    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(sweep_seconds.max(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Basket expiry worker started, ttl {}s every {}s", ttl_seconds, sweep_seconds);

        loop {
            ticker.tick().await;
            let removed = baskets.cleanup_expired(Utc::now(), ttl).await;
            debug!("Basket sweep removed {} sessions", removed);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use busline_basket::{FareBasket, TripContext};
    use busline_catalog::SeatMapBuilder;
    use busline_store::BasketSession;
    use chrono::NaiveDate;

    #[tokio::test(start_paused = true)]
    async fn test_worker_discards_stale_baskets() {
        let baskets = Arc::new(BasketStore::new());

        let context = TripContext {
            trip_id: "bus1".to_string(),
            travel_date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            origin: "Bangalore".to_string(),
            destination: "Goa".to_string(),
        };
        let seats = SeatMapBuilder::new("bus1", 950).build(|_| true).unwrap();
        let mut session = BasketSession::new(
            FareBasket::initialize(context, seats).unwrap(),
            "Karnataka State Express".to_string(),
        );
        session.created_at = Utc::now() - chrono::Duration::hours(2);
        baskets.insert(session).await;

        let worker = start_basket_expiry_worker(baskets.clone(), 1800, 60);

        // First tick fires immediately
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(baskets.is_empty().await);

        worker.abort();
    }
}
