//! Presentation components for the app shell.

pub(crate) mod auth;
pub(crate) mod notice;
pub(crate) mod submit;
