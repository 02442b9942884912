//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - One client is built at boot from the page origin and handed to timers,
//!   futures, and callbacks by reference count.
//! - Equality is pointer identity: the client is stateless, so two contexts
//!   are interchangeable exactly when they share an instance, and memoed
//!   holders never re-render for a clone of the same client.

use std::rc::Rc;

use crate::services::api::ApiClient;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context with the configured base URL.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
