//! Polling state machine and payload change detection.
//!
//! # Design
//! - The poller owns no timer and does no I/O; the wasm driver feeds it the
//!   token before a tick and the transport result after, so every transition
//!   can be single-stepped in tests.
//! - The last successful payload is an explicit field, which makes the
//!   byte-for-byte change guard testable away from the network.
//! - A failed tick never changes the schedule: the driver re-arms after every
//!   settlement, so one bad poll can never stop the loop.

use std::fmt::{self, Display, Formatter};

use fetchboard_api_models::Download;

/// Delay between poll ticks, applied after success and failure alike.
pub const POLL_DELAY_MS: u32 = 1_000;

/// Where the poller currently is in its tick cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollPhase {
    /// No token available; ticks reschedule without issuing requests.
    #[default]
    WaitingForToken,
    /// A request is in flight.
    Polling,
    /// The last request settled; the next tick is pending.
    IdleBetweenPolls,
}

/// Poll failures surfaced to the error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    /// Transport failure or non-2xx status.
    Request(String),
    /// The payload was not a JSON array of downloads.
    Parse(String),
}

impl Display for PollError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(detail) => write!(formatter, "Request failed: {detail}"),
            Self::Parse(detail) => write!(formatter, "Malformed downloads payload: {detail}"),
        }
    }
}

impl std::error::Error for PollError {}

/// Result of settling one poll tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Payload identical to the previous one; skip parsing and rendering.
    Unchanged,
    /// New payload with the decoded rows to merge into the table.
    Rows(Vec<Download>),
    /// The tick failed; the table and token are untouched.
    Failed(PollError),
}

/// Self-contained polling state: current phase plus the last seen payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Poller {
    phase: PollPhase,
    last_payload: Option<String>,
}

impl Poller {
    /// Fresh poller in [`PollPhase::WaitingForToken`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, for drivers and tests.
    #[must_use]
    pub const fn phase(&self) -> PollPhase {
        self.phase
    }

    /// Gate a tick on token presence.
    ///
    /// Returns `false` (and stays in [`PollPhase::WaitingForToken`]) when the
    /// token is absent or blank; the driver reschedules without issuing a
    /// request, which makes starting the loop before login safe. With a
    /// usable token the poller enters [`PollPhase::Polling`] and the driver
    /// must later call [`Poller::complete`].
    pub fn begin(&mut self, token: Option<&str>) -> bool {
        match token {
            Some(token) if !token.trim().is_empty() => {
                self.phase = PollPhase::Polling;
                true
            }
            _ => {
                self.phase = PollPhase::WaitingForToken;
                false
            }
        }
    }

    /// Settle the in-flight tick with the raw transport result.
    ///
    /// A result arriving outside [`PollPhase::Polling`] is discarded: a
    /// logout reset the poller while the request was in flight, and its rows
    /// must not resurrect the cleared table. Otherwise the poller moves to
    /// [`PollPhase::IdleBetweenPolls`]; an unchanged payload short-circuits
    /// before parsing, and a changed one is remembered first, so a repeated
    /// malformed payload reports its parse failure only once.
    pub fn complete(&mut self, result: Result<String, String>) -> PollOutcome {
        if self.phase != PollPhase::Polling {
            return PollOutcome::Unchanged;
        }
        self.phase = PollPhase::IdleBetweenPolls;
        let text = match result {
            Ok(text) => text,
            Err(detail) => return PollOutcome::Failed(PollError::Request(detail)),
        };
        if self.last_payload.as_deref() == Some(text.as_str()) {
            return PollOutcome::Unchanged;
        }
        let parsed = serde_json::from_str::<Vec<Download>>(&text);
        self.last_payload = Some(text);
        match parsed {
            Ok(rows) => PollOutcome::Rows(rows),
            Err(err) => PollOutcome::Failed(PollError::Parse(err.to_string())),
        }
    }

    /// Fixed delay before the next tick, regardless of the last outcome.
    #[must_use]
    pub const fn delay_ms(&self) -> u32 {
        POLL_DELAY_MS
    }

    /// Forget the last payload so the next successful poll always renders,
    /// and invalidate any tick still in flight. Called on logout, together
    /// with clearing the table.
    pub fn reset(&mut self) {
        self.phase = PollPhase::WaitingForToken;
        self.last_payload = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{PollError, PollOutcome, PollPhase, Poller};

    fn payload(rows: &[(u64, &str)]) -> String {
        let entries: Vec<String> = rows
            .iter()
            .map(|(id, status)| {
                format!(
                    r#"{{"id":{id},"url":"https://example.com","start_time":"t0","status":"{status}"}}"#
                )
            })
            .collect();
        format!("[{}]", entries.join(","))
    }

    #[test]
    fn starts_waiting_for_token() {
        assert_eq!(Poller::new().phase(), PollPhase::WaitingForToken);
    }

    #[test]
    fn missing_or_blank_token_issues_no_request() {
        let mut poller = Poller::new();
        assert!(!poller.begin(None));
        assert!(!poller.begin(Some("  ")));
        assert_eq!(poller.phase(), PollPhase::WaitingForToken);
    }

    #[test]
    fn token_presence_opens_the_gate() {
        let mut poller = Poller::new();
        assert!(!poller.begin(None));
        assert!(poller.begin(Some("tok")));
        assert_eq!(poller.phase(), PollPhase::Polling);
    }

    #[test]
    fn identical_payload_parses_only_once() {
        let mut poller = Poller::new();
        let body = payload(&[(1, "in progress")]);

        poller.begin(Some("tok"));
        let first = poller.complete(Ok(body.clone()));
        assert!(matches!(first, PollOutcome::Rows(ref rows) if rows.len() == 1));

        poller.begin(Some("tok"));
        assert_eq!(poller.complete(Ok(body)), PollOutcome::Unchanged);
    }

    #[test]
    fn distinct_payloads_both_render() {
        let mut poller = Poller::new();
        poller.begin(Some("tok"));
        let first = poller.complete(Ok(payload(&[(1, "in progress")])));
        poller.begin(Some("tok"));
        let second = poller.complete(Ok(payload(&[(1, "finished")])));
        assert!(matches!(first, PollOutcome::Rows(_)));
        assert!(matches!(second, PollOutcome::Rows(_)));
    }

    #[test]
    fn failure_settles_and_the_loop_keeps_going() {
        let mut poller = Poller::new();
        poller.begin(Some("tok"));
        let outcome = poller.complete(Err("status 503".to_string()));
        assert_eq!(
            outcome,
            PollOutcome::Failed(PollError::Request("status 503".to_string()))
        );
        assert_eq!(poller.phase(), PollPhase::IdleBetweenPolls);
        // The next tick proceeds as if nothing happened.
        assert!(poller.begin(Some("tok")));
    }

    #[test]
    fn failure_does_not_disturb_change_detection() {
        let mut poller = Poller::new();
        let body = payload(&[(1, "in progress")]);
        poller.begin(Some("tok"));
        assert!(matches!(poller.complete(Ok(body.clone())), PollOutcome::Rows(_)));
        poller.begin(Some("tok"));
        poller.complete(Err("timeout".to_string()));
        poller.begin(Some("tok"));
        assert_eq!(poller.complete(Ok(body)), PollOutcome::Unchanged);
    }

    #[test]
    fn malformed_payload_reports_parse_failure_once() {
        let mut poller = Poller::new();
        poller.begin(Some("tok"));
        let first = poller.complete(Ok("not json".to_string()));
        assert!(matches!(first, PollOutcome::Failed(PollError::Parse(_))));
        // The broken payload was remembered, so repeating it is a no-op.
        poller.begin(Some("tok"));
        assert_eq!(poller.complete(Ok("not json".to_string())), PollOutcome::Unchanged);
    }

    #[test]
    fn reset_discards_a_result_still_in_flight() {
        let mut poller = Poller::new();
        poller.begin(Some("tok"));
        // Logout lands before the request settles.
        poller.reset();
        let late = poller.complete(Ok(payload(&[(1, "finished")])));
        assert_eq!(late, PollOutcome::Unchanged);
        assert_eq!(poller.phase(), PollPhase::WaitingForToken);

        // The discarded payload was not remembered either: the same body
        // renders normally on the next logged-in tick.
        poller.begin(Some("tok"));
        let next = poller.complete(Ok(payload(&[(1, "finished")])));
        assert!(matches!(next, PollOutcome::Rows(_)));
    }

    #[test]
    fn reset_forgets_the_last_payload() {
        let mut poller = Poller::new();
        let body = payload(&[(1, "finished")]);
        poller.begin(Some("tok"));
        assert!(matches!(poller.complete(Ok(body.clone())), PollOutcome::Rows(_)));
        poller.reset();
        assert_eq!(poller.phase(), PollPhase::WaitingForToken);
        poller.begin(Some("tok"));
        assert!(matches!(poller.complete(Ok(body)), PollOutcome::Rows(_)));
    }

    #[test]
    fn delay_is_fixed() {
        let mut poller = Poller::new();
        assert_eq!(poller.delay_ms(), 1_000);
        poller.begin(Some("tok"));
        poller.complete(Err("boom".to_string()));
        assert_eq!(poller.delay_ms(), 1_000);
    }
}
