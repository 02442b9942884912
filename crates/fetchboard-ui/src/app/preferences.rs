//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

use crate::core::session::SessionStore;

pub(crate) const TOKEN_KEY: &str = "fetchboard.token";

/// Session backed by browser LocalStorage, surviving page reloads but not a
/// browser-data wipe.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserSession;

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    fn set_token(&mut self, token: &str) {
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
            console::error!("storage write failed", TOKEN_KEY, err.to_string());
        }
    }

    fn clear(&mut self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// Service base URL derived from the page location, so the client works
/// wherever the service hosts it.
pub(crate) fn api_base_url() -> String {
    let location = window().location();
    location
        .origin()
        .unwrap_or_else(|_| "http://localhost:8000".to_string())
}
