//! Core types shared across fieldkit facilities
//!
//! This crate provides the canonical field keys and event names used by both
//! the error facility and the logging macros in `fieldkit-core`.

pub mod schema;
