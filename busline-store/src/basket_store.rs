use std::collections::HashMap;
use std::sync::Arc;
use busline_basket::FareBasket;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::info;
use uuid::Uuid;

/// A traveller's open basket together with listing details needed on confirmation
#[derive(Debug)]
pub struct BasketSession {
    pub id: Uuid,
    pub basket: FareBasket,
    pub operator_name: String,
    pub created_at: DateTime<Utc>,
    /// Set once the basket is confirmed or abandoned; later requests treat it as gone
    pub closed: bool,
}

impl BasketSession {
    pub fn new(basket: FareBasket, operator_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            basket,
            operator_name,
            created_at: Utc::now(),
            closed: false,
        }
    }
}

struct SessionEntry {
    created_at: DateTime<Utc>,
    session: Arc<Mutex<BasketSession>>,
}

/// In-memory session baskets. Each session sits behind its own mutex so
/// requests against one basket run one at a time.
#[derive(Default)]
pub struct BasketStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
}

impl BasketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: BasketSession) -> Uuid {
        let id = session.id;
        let entry = SessionEntry {
            created_at: session.created_at,
            session: Arc::new(Mutex::new(session)),
        };
        self.sessions.write().await.insert(id, entry);
        info!("Basket session opened: {}", id);
        id
    }

    pub async fn get(&self, id: &Uuid) -> Option<Arc<Mutex<BasketSession>>> {
        self.sessions.read().await.get(id).map(|entry| entry.session.clone())
    }

    /// Drop a session from the map. Callers mark it `closed` under its own
    /// lock first, since requests may still hold a handle to it.
    pub async fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            info!("Basket session discarded: {}", id);
        }
        removed
    }

    /// Discard sessions opened more than `ttl` before `now`. Returns how many
    /// were removed.
    pub async fn cleanup_expired(&self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let expired: Vec<Arc<Mutex<BasketSession>>> = {
            let mut sessions = self.sessions.write().await;
            let ids: Vec<Uuid> = sessions
                .iter()
                .filter(|(_, entry)| now.signed_duration_since(entry.created_at) >= ttl)
                .map(|(id, _)| *id)
                .collect();
            ids.iter()
                .filter_map(|id| sessions.remove(id))
                .map(|entry| entry.session)
                .collect()
        };

        // Requests still holding a handle must see the basket as gone
        for session in &expired {
            session.lock().await.closed = true;
        }

        if !expired.is_empty() {
            info!("Expired {} abandoned basket sessions", expired.len());
        }
        expired.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busline_basket::TripContext;
    use busline_catalog::SeatMapBuilder;
    use chrono::NaiveDate;

    fn session() -> BasketSession {
        let context = TripContext {
            trip_id: "bus1".to_string(),
            travel_date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            origin: "Bangalore".to_string(),
            destination: "Bhatkal".to_string(),
        };
        let seats = SeatMapBuilder::new("bus1", 950).build(|_| true).unwrap();
        let basket = FareBasket::initialize(context, seats).unwrap();
        BasketSession::new(basket, "Karnataka State Express".to_string())
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let store = BasketStore::new();
        assert!(store.is_empty().await);

        let id = store.insert(session()).await;
        assert_eq!(store.len().await, 1);

        let handle = store.get(&id).await.unwrap();
        handle.lock().await.basket.toggle_selection("bus1-A1").unwrap();

        let handle = store.get(&id).await.unwrap();
        assert_eq!(handle.lock().await.basket.subtotal(), 1000);

        handle.lock().await.closed = true;
        assert!(store.remove(&id).await);
        assert!(store.get(&id).await.is_none());
        assert!(!store.remove(&id).await);
    }

    #[tokio::test]
    async fn test_cleanup_expired_sessions() {
        let store = BasketStore::new();
        let now = Utc::now();
        let ttl = Duration::minutes(30);

        let mut stale_handles = Vec::new();
        for _ in 0..1000 {
            let mut stale = session();
            stale.created_at = now - Duration::days(30);
            let id = store.insert(stale).await;
            stale_handles.push(store.get(&id).await.unwrap());
        }
        let fresh = store.insert(session()).await;

        let removed = store.cleanup_expired(now, ttl).await;
        assert_eq!(removed, 1000);
        assert_eq!(store.len().await, 1);
        assert!(store.get(&fresh).await.is_some());
        assert!(stale_handles[0].lock().await.closed);

        // Nothing left to expire
        assert_eq!(store.cleanup_expired(now, ttl).await, 0);

        // Once the TTL passes the fresh session goes too
        assert_eq!(store.cleanup_expired(now + Duration::hours(1), ttl).await, 1);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = BasketStore::new();
        let first = store.insert(session()).await;
        let second = store.insert(session()).await;

        store.get(&first).await.unwrap().lock().await.basket.toggle_selection("bus1-B2").unwrap();

        let other = store.get(&second).await.unwrap();
        assert!(other.lock().await.basket.selected_seats().is_empty());
    }
}
