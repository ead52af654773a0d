//! Query sets and bulk filters
//!
//! Filters are extension traits implemented for [`QuerySet`] whenever the
//! record type carries the matching mixin; bring the trait into scope to use
//! its methods.

pub mod change_tracking_queries;
pub mod lookup;
pub mod publishing_queries;
pub mod queryset;
pub mod soft_delete_queries;

pub use change_tracking_queries::{recently_lookup, ChangeTrackingQueries};
pub use lookup::{CmpOp, Lookup, TimestampField, TimestampFields};
pub use publishing_queries::{
    published_lookup, unpublished_lookup, DatePublishingQueries, PublishingQueries,
};
pub use queryset::QuerySet;
pub use soft_delete_queries::SoftDeleteQueries;
