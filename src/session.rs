use std::{collections::HashMap, sync::Arc};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jiff::{SignedDuration, Timestamp};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::state::{Action, ViewState};

pub const SESSION_COOKIE: &str = "holocron_session";

pub const DEFAULT_MAX_SESSIONS: usize = 10_000;
pub const DEFAULT_IDLE_TIMEOUT: SignedDuration = SignedDuration::from_hours(12);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SessionId(Uuid);

struct Entry {
    state: ViewState,
    last_seen: Timestamp,
}

impl Entry {
    fn new(now: Timestamp) -> Self {
        Self { state: ViewState::default(), last_seen: now }
    }
}

/// View state for every browser session, held in memory only.
///
/// Sessions idle for longer than `idle_timeout` are dropped, and the store
/// never holds more than `max_sessions` entries; the least recently seen
/// session goes first.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<SessionId, Entry>>>,
    max_sessions: usize,
    idle_timeout: SignedDuration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_MAX_SESSIONS, DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_sessions: usize, idle_timeout: SignedDuration) -> Self {
        Self { inner: Arc::default(), max_sessions: max_sessions.max(1), idle_timeout }
    }

    /// Finds the session named by the request cookie, or opens a new one and
    /// sets the cookie on the returned jar.
    pub async fn resolve(&self, jar: CookieJar) -> (CookieJar, SessionId) {
        let existing = jar
            .get(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok())
            .map(SessionId);

        let now = Timestamp::now();
        let mut sessions = self.inner.write().await;

        if let Some(id) = existing {
            if let Some(entry) = sessions.get_mut(&id) {
                entry.last_seen = now;
                return (jar, id);
            }
        }

        self.evict(&mut sessions, now);

        let id = SessionId(Uuid::new_v4());
        sessions.insert(id, Entry::new(now));
        debug!(session = %id.0, open = sessions.len(), "opened session");
        drop(sessions);

        let cookie = Cookie::build((SESSION_COOKIE, id.0.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        (jar.add(cookie), id)
    }

    pub async fn view(&self, id: SessionId) -> ViewState {
        self.inner.read().await.get(&id).map(|e| e.state.clone()).unwrap_or_default()
    }

    pub async fn dispatch(&self, id: SessionId, action: Action) -> ViewState {
        let mut sessions = self.inner.write().await;
        let entry = sessions.entry(id).or_insert_with(|| Entry::new(Timestamp::now()));
        debug!(session = %id.0, action = ?action, "dispatch");
        entry.state = std::mem::take(&mut entry.state).apply(action);
        entry.state.clone()
    }

    /// Marks the load-failure notice as shown. Returns true only for the call
    /// that flipped the flag, so exactly one page carries the alert.
    pub async fn acknowledge_load_failure(&self, id: SessionId) -> bool {
        let mut sessions = self.inner.write().await;
        let entry = sessions.entry(id).or_insert_with(|| Entry::new(Timestamp::now()));
        if entry.state.load_notice_shown {
            return false;
        }
        entry.state = std::mem::take(&mut entry.state).apply(Action::AcknowledgeLoadFailure);
        true
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Drops idle sessions, then the oldest ones until there is room for one more.
    fn evict(&self, sessions: &mut HashMap<SessionId, Entry>, now: Timestamp) {
        let before = sessions.len();
        sessions.retain(|_, e| now.duration_since(e.last_seen) <= self.idle_timeout);

        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions.iter().min_by_key(|(_, e)| e.last_seen).map(|(id, _)| *id)
            else {
                break;
            };
            sessions.remove(&oldest);
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, open = sessions.len(), "evicted sessions");
        }
    }

    #[cfg(test)]
    async fn backdate(&self, id: SessionId, by: SignedDuration) {
        if let Some(entry) = self.inner.write().await.get_mut(&id) {
            entry.last_seen = entry.last_seen - by;
        }
    }
}
