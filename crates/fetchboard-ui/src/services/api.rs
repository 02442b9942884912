//! HTTP client for the download service (REST).
//!
//! # Design
//! - This module only moves bytes: status classification, change detection,
//!   and submission gating all live in DOM-free core modules.
//! - Poll and submission results come back as raw text; the poller and the
//!   feedback area decide what to do with it.

use fetchboard_api_models::DownloadRequest;
use gloo_net::http::Request;

use crate::core::auth::{AuthError, basic_credentials, classify_login};

/// Thin client bound to the service base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Base URL without a trailing slash.
    pub base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Exchange credentials for a bearer token via the basic-auth challenge.
    ///
    /// # Errors
    /// [`AuthError::Authentication`] when the service rejects the
    /// credentials, [`AuthError::Request`] on transport failure or any other
    /// non-success status.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let credentials = basic_credentials(username, password);
        let response = Request::get(&format!("{}/auth", self.base_url))
            .header("Authorization", &format!("Basic {credentials}"))
            .send()
            .await
            .map_err(|_| AuthError::Request)?;
        let status = response.status();
        let body = response.text().await.map_err(|_| AuthError::Request)?;
        classify_login(status, &body)
    }

    /// Fetch the authoritative row set as raw text for the poller.
    ///
    /// # Errors
    /// A human-readable detail string on transport failure or a non-2xx
    /// status; the poller wraps it into its request-failure outcome.
    pub async fn fetch_downloads(&self, token: &str) -> Result<String, String> {
        let response = Request::get(&format!("{}/restricted/data", self.base_url))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|err| err.to_string())?;
        if response.ok() {
            response.text().await.map_err(|err| err.to_string())
        } else {
            Err(format!("status {}", response.status()))
        }
    }

    /// Submit a download request and return the service's response text
    /// verbatim, success or failure alike.
    ///
    /// # Errors
    /// A detail string only when the transport itself fails; HTTP error
    /// statuses still resolve to their body text.
    pub async fn submit_download(
        &self,
        token: &str,
        request: &DownloadRequest,
    ) -> Result<String, String> {
        let response = Request::post(&format!("{}/restricted/download", self.base_url))
            .header("Authorization", &format!("Bearer {token}"))
            .json(request)
            .map_err(|err| err.to_string())?
            .send()
            .await
            .map_err(|err| err.to_string())?;
        response.text().await.map_err(|err| err.to_string())
    }
}
