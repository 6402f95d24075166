//! Session cache: last career list per session token.
//!
//! Bounded by capacity (least recently used goes first) and by age. Entries
//! are advisory grounding for chat, so losing one is never an error.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use lru::LruCache;
use parking_lot::Mutex;
use tokio::time::Instant;
use uuid::Uuid;

use crate::careers::models::CareerRecord;

struct SessionEntry {
    careers: Vec<CareerRecord>,
    stored_at: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    entries: Arc<Mutex<LruCache<Uuid, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
            ttl,
        }
    }

    /// Stores the latest list for `session_id`, replacing any previous one.
    pub fn put(&self, session_id: Uuid, careers: Vec<CareerRecord>) {
        self.entries.lock().put(
            session_id,
            SessionEntry {
                careers,
                stored_at: Instant::now(),
            },
        );
    }

    /// Returns the list for `session_id` unless it is unknown or expired.
    pub fn get(&self, session_id: &Uuid) -> Option<Vec<CareerRecord>> {
        let mut entries = self.entries.lock();
        let expired = match entries.get(session_id) {
            Some(entry) => entry.stored_at.elapsed() > self.ttl,
            None => return None,
        };
        if expired {
            entries.pop(session_id);
            return None;
        }
        entries.get(session_id).map(|entry| entry.careers.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
