//! Feature modules grouping state and views per domain area.

pub mod downloads;
