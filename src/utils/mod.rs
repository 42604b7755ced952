//! Shared helpers

pub mod mime;
