//! Core, DOM-free primitives for the download client.
pub mod auth;
pub mod format;
pub mod poll;
pub mod session;
pub mod store;
pub mod submit;
