use cached::{Cached, TimedSizedCache};
use uuid::Uuid;

const CACHE_SIZE: usize = 1000;
const SESSION_LIFESPAN_SECONDS: u64 = 60 * 60 * 24 * 30;

/// Opaque bearer tokens handed out at login, each pointing to a user id.
/// Only 1000 sessions live at a time, and they expire after one month.
#[derive(Debug)]
pub struct SessionStorage {
    sessions: TimedSizedCache<String, i32>,
}

impl SessionStorage {
    /// Open a session for the user and return its token.
    pub fn open(&mut self, user_id: i32) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.cache_set(token.clone(), user_id);
        token
    }

    pub fn get(&mut self, token: &str) -> Option<i32> {
        self.sessions.cache_get(token).copied()
    }

    pub fn close(&mut self, token: &str) -> Option<i32> {
        self.sessions.cache_remove(token)
    }
}

impl Default for SessionStorage {
    fn default() -> Self {
        let sessions = TimedSizedCache::with_size_and_lifespan(CACHE_SIZE, SESSION_LIFESPAN_SECONDS);
        Self { sessions }
    }
}
