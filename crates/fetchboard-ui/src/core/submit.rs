//! Local gating for download submissions.

use fetchboard_api_models::DownloadRequest;

/// Feedback shown when a submission is attempted while logged out.
pub const LOGIN_FIRST: &str = "Login first";

/// What to do with a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitPlan {
    /// No usable token: show [`LOGIN_FIRST`] and issue no request.
    RequireLogin,
    /// Send the request; the URL is already trimmed.
    Send(DownloadRequest),
}

/// Decide whether a submission goes out.
///
/// The URL is trimmed and nothing else: validating it is the service's job,
/// and its response text is what the user sees either way.
#[must_use]
pub fn plan_submission(token: Option<&str>, raw_url: &str) -> SubmitPlan {
    match token {
        Some(token) if !token.trim().is_empty() => SubmitPlan::Send(DownloadRequest {
            download_url: raw_url.trim().to_string(),
        }),
        _ => SubmitPlan::RequireLogin,
    }
}
