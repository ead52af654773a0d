//! fieldkit core - record mixins and admin helpers
//!
//! This crate provides reusable building blocks for an admin / content
//! management layer, including:
//! - Record mixins (change tracking, titles, SEO, publishing flag and
//!   window, soft delete, generic references) as value structs plus
//!   capability traits
//! - Bulk query filters that agree with the per-record evaluation
//! - Changelist columns (view on site, relation count and list, change
//!   history sparkline), edit-form field sets and admin URL reversing
//! - A message catalogue with per-locale overrides
//!
//! Records live in an in-memory [`Store`] that stands in for persistence.

pub mod admin;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;
pub mod text;

// Re-export commonly used types
pub use config::Settings;
pub use errors::{FieldkitError, FkError, FkErrorKind, Result};
pub use model::{ModelMeta, Record, RecordId};
pub use ops::Store;
pub use queries::{
    ChangeTrackingQueries, DatePublishingQueries, PublishingQueries, QuerySet, SoftDeleteQueries,
};
