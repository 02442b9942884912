//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Errors land in an explicit slice instead of vanishing into the console,
//!   so the shell can choose how to surface them.

use yewdux::store::Store;

use crate::features::downloads::state::DownloadsState;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Bearer-token session state.
    pub session: SessionSlice,
    /// Downloads table state.
    pub downloads: DownloadsState,
    /// Error channel and submission feedback.
    pub system: SystemState,
}

/// Shared session state for the UI.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionSlice {
    /// Active bearer token; `None` means logged out.
    pub token: Option<String>,
    /// A login request is in flight.
    pub login_busy: bool,
}

impl SessionSlice {
    /// Whether the session holds a usable token.
    #[must_use]
    pub fn logged_in(&self) -> bool {
        self.token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }
}

/// System-level state: the error channel and submission feedback.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SystemState {
    /// Most recent swallowed error, shown as a dismissible notice.
    pub last_error: Option<String>,
    /// Verbatim service response (or the local "Login first" message) for the
    /// latest submission; `None` hides the feedback area.
    pub submit_feedback: Option<String>,
}
