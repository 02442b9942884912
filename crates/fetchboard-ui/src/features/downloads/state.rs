//! Downloads table state and pure merge transformations.
//!
//! # Design
//! - The merge is upsert-only: the service is the source of truth for known
//!   ids, but a transient empty or partial payload must never make rows the
//!   user is looking at disappear. Only logout clears the table.
//! - Row identity and position are keyed by `id`; an update replaces fields
//!   in place without moving the row.

use std::collections::HashMap;
use std::rc::Rc;

use fetchboard_api_models::Download;

use crate::core::format::format_bytes;

/// UI projection of a [`Download`]: every cell ready to render verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRow {
    /// Stable job identifier, the merge key.
    pub id: u64,
    /// Source URL, empty when the service omitted it.
    pub url: String,
    /// File name, empty until the download starts.
    pub file_name: String,
    /// Human-readable size, empty until the size is known.
    pub file_size: String,
    /// Server-formatted start timestamp.
    pub start_time: String,
    /// Server-formatted end timestamp, empty while running.
    pub end_time: String,
    /// Raw status label from the service.
    pub status: String,
}

impl From<Download> for DownloadRow {
    fn from(value: Download) -> Self {
        Self {
            id: value.id,
            url: value.url.unwrap_or_default(),
            file_name: value.file_name.unwrap_or_default(),
            file_size: match value.file_size {
                Some(bytes) if bytes > 0 => format_bytes(bytes),
                _ => String::new(),
            },
            start_time: value.start_time,
            end_time: value.end_time.unwrap_or_default(),
            status: value.status,
        }
    }
}

/// Current downloads slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DownloadsState {
    /// Map of rows by id.
    pub by_id: HashMap<u64, Rc<DownloadRow>>,
    /// Ids in first-seen order; updates never reorder.
    pub visible_ids: Vec<u64>,
}

impl DownloadsState {
    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_ids.is_empty()
    }
}

/// Merge a payload's rows into the table: update known ids in place, append
/// new ones. Ids missing from the payload are left untouched.
pub fn upsert_rows(state: &mut DownloadsState, rows: Vec<DownloadRow>) {
    for row in rows {
        let id = row.id;
        if !state.by_id.contains_key(&id) {
            state.visible_ids.push(id);
        }
        state.by_id.insert(id, Rc::new(row));
    }
}

/// Drop every row. Logout only; polling never deletes.
pub fn clear_rows(state: &mut DownloadsState) {
    state.by_id.clear();
    state.visible_ids.clear();
}

/// Read the rows in table order.
#[must_use]
pub fn select_visible_rows(state: &DownloadsState) -> Vec<DownloadRow> {
    state
        .visible_ids
        .iter()
        .filter_map(|id| state.by_id.get(id).map(|row| (**row).clone()))
        .collect()
}
