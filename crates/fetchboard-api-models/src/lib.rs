#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Fetchboard download service API.
//!
//! These types mirror the service's wire contract exactly so the UI and any
//! future tooling decode the same shapes. Timestamps stay as opaque strings;
//! the client displays them verbatim and never parses them.

use serde::{Deserialize, Serialize};

/// One download job as reported by the `/restricted/data` endpoint.
///
/// `id` is unique within a response and stable across responses for the same
/// job; the UI keys its table merge on it. Fields that are unknown until the
/// download starts (`file_name`, `file_size`, `end_time`) arrive as `null`
/// or are omitted entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Download {
    /// Stable job identifier, the table merge key.
    pub id: u64,
    /// Source URL the job was created from.
    #[serde(default)]
    pub url: Option<String>,
    /// Resolved file name, absent until the download starts.
    #[serde(default)]
    pub file_name: Option<String>,
    /// File size in bytes, absent until known.
    #[serde(default)]
    pub file_size: Option<u64>,
    /// Server-formatted start timestamp, displayed verbatim.
    pub start_time: String,
    /// Server-formatted end timestamp, absent while running.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Server-defined status label. The vocabulary is open-ended; clients
    /// must pass unknown values through rather than reject them.
    pub status: String,
}

/// Request body for `POST /restricted/download`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadRequest {
    /// URL the service should download, already trimmed by the caller.
    pub download_url: String,
}

/// Coarse classification of the service's status vocabulary.
///
/// Presentation-only: [`StatusKind::Other`] catches anything the service adds
/// later, so the raw label is always rendered and never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The download is still running.
    InProgress,
    /// The download completed successfully.
    Finished,
    /// The download ended in an error.
    Failed,
    /// Any label outside the known vocabulary.
    Other,
}

impl StatusKind {
    /// Classify a raw status label.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        match status.trim() {
            "in progress" | "pending" => Self::InProgress,
            "finished" | "done" => Self::Finished,
            "failed" | "error" => Self::Failed,
            _ => Self::Other,
        }
    }

    /// CSS class suffix used by the table's status badge.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Finished => "finished",
            Self::Failed => "failed",
            Self::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Download, DownloadRequest, StatusKind};

    #[test]
    fn download_decodes_full_row() {
        let json = r#"{
            "id": 7,
            "url": "https://example.com/archive.zip",
            "file_name": "archive.zip",
            "file_size": 1536,
            "start_time": "2024-05-01 10:00:00",
            "end_time": "2024-05-01 10:01:00",
            "status": "finished"
        }"#;
        let row: Download = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, 7);
        assert_eq!(row.file_size, Some(1536));
        assert_eq!(row.status, "finished");
    }

    #[test]
    fn download_tolerates_missing_and_null_optionals() {
        let json = r#"{
            "id": 1,
            "url": null,
            "file_name": null,
            "start_time": "2024-05-01 10:00:00",
            "status": "in progress"
        }"#;
        let row: Download = serde_json::from_str(json).unwrap();
        assert_eq!(row.url, None);
        assert_eq!(row.file_name, None);
        assert_eq!(row.file_size, None);
        assert_eq!(row.end_time, None);
    }

    #[test]
    fn download_ignores_extra_fields() {
        // Older service revisions include a user_id column.
        let json = r#"{
            "id": 2,
            "start_time": "2024-05-01 10:00:00",
            "status": "in progress",
            "user_id": 99
        }"#;
        let row: Download = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, 2);
    }

    #[test]
    fn download_request_uses_wire_key() {
        let body = DownloadRequest {
            download_url: "https://example.com/a".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"download_url":"https://example.com/a"}"#);
    }

    #[test]
    fn status_classification_covers_vocabulary() {
        assert_eq!(StatusKind::classify("in progress"), StatusKind::InProgress);
        assert_eq!(StatusKind::classify("finished"), StatusKind::Finished);
        assert_eq!(StatusKind::classify("failed"), StatusKind::Failed);
        assert_eq!(StatusKind::classify("quarantined"), StatusKind::Other);
        assert_eq!(StatusKind::classify(" done "), StatusKind::Finished);
    }

    #[test]
    fn status_css_classes_are_stable() {
        assert_eq!(StatusKind::InProgress.css_class(), "in-progress");
        assert_eq!(StatusKind::Other.css_class(), "other");
    }
}
