use moka::future::Cache;
use std::time::Duration;

/// Per-session one-shot flags.
///
/// A flag is unset until first claimed, then stays set for the rest of the
/// session. Entries are dropped once the session has been idle for the TTL.
#[derive(Clone)]
pub struct SessionFlags {
    cache: Cache<String, bool>,
}

impl SessionFlags {
    pub fn new(max_sessions: u64, ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(max_sessions)
                .time_to_idle(ttl)
                .build(),
        }
    }

    /// Marks the unfilled-attendance warning as handled for the session.
    ///
    /// true  => this call set the flag; the caller runs the check
    /// false => already set earlier in this session
    pub async fn claim_unfilled(&self, session_id: &str) -> bool {
        self.cache
            .entry(key(session_id))
            .or_insert(true)
            .await
            .is_fresh()
    }

    /// Clears a claim whose check could not complete.
    pub async fn release_unfilled(&self, session_id: &str) {
        self.cache.invalidate(&key(session_id)).await;
    }
}

fn key(session_id: &str) -> String {
    format!("{session_id}:hasUnfilledShown")
}
