//! Transport clients for the download service HTTP API.

pub mod api;
