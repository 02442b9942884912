//! Login request encoding and response classification.
//!
//! # Design
//! - Keep header encoding and status classification DOM-free so the login
//!   path is testable without a browser or a server.
//! - The transport client in `services::api` only moves bytes; every decision
//!   lives here.

use std::fmt::{self, Display, Formatter};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Login failures surfaced to the error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The service rejected the credentials (401).
    Authentication,
    /// Any other non-success status or transport failure.
    Request,
}

impl Display for AuthError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication => formatter.write_str("Incorrect username or password"),
            Self::Request => formatter.write_str("Request failed"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Encode a username/password pair for a basic-auth challenge header.
#[must_use]
pub fn basic_credentials(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{username}:{password}"))
}

/// Classify an `/auth` response into a token or an [`AuthError`].
///
/// The service serialises the token as a JSON string; some deployments return
/// it as plain text, so a non-JSON body is accepted verbatim after trimming.
///
/// # Errors
/// [`AuthError::Authentication`] on 401, [`AuthError::Request`] on any other
/// non-2xx status or an empty success body.
pub fn classify_login(status: u16, body: &str) -> Result<String, AuthError> {
    match status {
        200..=299 => {
            let token = serde_json::from_str::<String>(body)
                .unwrap_or_else(|_| body.trim().to_string());
            if token.is_empty() {
                Err(AuthError::Request)
            } else {
                Ok(token)
            }
        }
        401 => Err(AuthError::Authentication),
        _ => Err(AuthError::Request),
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthError, basic_credentials, classify_login};

    #[test]
    fn credentials_encode_as_standard_base64() {
        assert_eq!(basic_credentials("user", "pass"), "dXNlcjpwYXNz");
        assert_eq!(basic_credentials("", ""), "Og==");
    }

    #[test]
    fn success_decodes_json_string_token() {
        assert_eq!(classify_login(200, "\"tok-123\""), Ok("tok-123".to_string()));
    }

    #[test]
    fn success_accepts_plain_text_token() {
        assert_eq!(classify_login(200, "tok-123\n"), Ok("tok-123".to_string()));
    }

    #[test]
    fn empty_success_body_is_a_request_failure() {
        assert_eq!(classify_login(200, ""), Err(AuthError::Request));
    }

    #[test]
    fn unauthorized_maps_to_authentication_error() {
        assert_eq!(
            classify_login(401, "\"Incorrect username or password\""),
            Err(AuthError::Authentication)
        );
    }

    #[test]
    fn other_statuses_map_to_request_error() {
        assert_eq!(classify_login(500, ""), Err(AuthError::Request));
        assert_eq!(classify_login(302, ""), Err(AuthError::Request));
    }

    #[test]
    fn error_messages_match_the_ui_contract() {
        assert_eq!(
            AuthError::Authentication.to_string(),
            "Incorrect username or password"
        );
        assert_eq!(AuthError::Request.to_string(), "Request failed");
    }
}
