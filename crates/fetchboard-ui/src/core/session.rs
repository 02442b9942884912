//! Injectable session context holding the bearer token.
//!
//! # Design
//! - One trait seam so the poller and submitter can be exercised with a fake
//!   session instead of browser storage.
//! - Blank tokens count as absent; callers never have to trim.
//! - Last write wins; the UI runs on a single thread.

/// Storage for the at-most-one bearer token of the current session.
pub trait SessionStore {
    /// Current token, or `None` when logged out.
    fn token(&self) -> Option<String>;

    /// Replace the stored token.
    fn set_token(&mut self, token: &str);

    /// Drop the stored token (logout).
    fn clear(&mut self);
}

/// In-memory session used by tests and native builds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySession {
    token: Option<String>,
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .map(ToOwned::to_owned)
    }

    fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn clear(&mut self) {
        self.token = None;
    }
}
