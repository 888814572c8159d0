//! Session gate: client-side access speed-bump for the dashboard.
//!
//! The expected value ships inside the client bundle, so anyone reading the
//! bundle can pass the gate. This is a convenience barrier, not an
//! authentication boundary, and the server never sees or verifies the
//! session token minted here.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Value the `hash` navigation parameter must equal (case-insensitively).
pub const EXPECTED_HASH: &str = "0e7517141fb53f21ee439b355b5a1d0a";

/// Navigation parameter carrying the candidate credential.
pub const HASH_PARAM: &str = "hash";

/// Storage key for the opaque session token.
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key for the issue time, epoch milliseconds as a decimal string.
pub const ISSUED_AT_KEY: &str = "auth_time";

/// How long a minted session stays valid.
pub fn session_ttl() -> Duration {
    Duration::hours(24)
}

/// Key/value storage scoped to one browser session.
///
/// The browser implementation wraps `sessionStorage`; [`MemorySessionStore`]
/// backs tests and non-browser hosts.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Marker that a gate check was passed in this browser session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCredential {
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

impl SessionCredential {
    /// Mint a fresh credential. The token is a random UUID v4.
    pub fn issue(now: DateTime<Utc>) -> Self {
        Self {
            token: Uuid::new_v4().simple().to_string(),
            issued_at: now,
        }
    }

    /// Read the credential back. A missing or malformed entry yields `None`.
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Option<Self> {
        let token = store.get(TOKEN_KEY)?;
        let millis = store.get(ISSUED_AT_KEY)?.trim().parse::<i64>().ok()?;
        let issued_at = DateTime::from_timestamp_millis(millis)?;
        Some(Self { token, issued_at })
    }

    pub fn save<S: SessionStore + ?Sized>(&self, store: &mut S) {
        store.set(TOKEN_KEY, &self.token);
        store.set(ISSUED_AT_KEY, &self.issued_at.timestamp_millis().to_string());
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.issued_at) > session_ttl()
    }
}

pub fn clear_session<S: SessionStore + ?Sized>(store: &mut S) {
    store.remove(TOKEN_KEY);
    store.remove(ISSUED_AT_KEY);
}

pub fn credential_matches(candidate: &str) -> bool {
    candidate.to_lowercase() == EXPECTED_HASH
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Token stored; navigate (replace) to the dashboard.
    Granted,
    /// Terminal: render the denial and do nothing else.
    Denied,
}

/// Run the gate check for the candidate taken from the navigation parameter.
///
/// Nothing is written to the store on denial.
pub fn admit<S: SessionStore + ?Sized>(
    store: &mut S,
    candidate: Option<&str>,
    now: DateTime<Utc>,
) -> GateOutcome {
    match candidate {
        Some(candidate) if credential_matches(candidate) => {
            SessionCredential::issue(now).save(store);
            log::info!("Gate passed, session token issued");
            GateOutcome::Granted
        }
        _ => {
            log::warn!("Gate denied access");
            GateOutcome::Denied
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    Fresh(SessionCredential),
    Missing,
    Expired,
}

impl Freshness {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Freshness::Fresh(_))
    }
}

/// Check run on every dashboard entry. Anything but a fresh credential
/// clears the store; the caller then replaces navigation with the gate.
pub fn check_session<S: SessionStore + ?Sized>(store: &mut S, now: DateTime<Utc>) -> Freshness {
    match SessionCredential::load(store) {
        Some(credential) if credential.is_expired(now) => {
            log::info!("Session expired, returning to gate");
            clear_session(store);
            Freshness::Expired
        }
        Some(credential) => Freshness::Fresh(credential),
        None => {
            clear_session(store);
            Freshness::Missing
        }
    }
}
