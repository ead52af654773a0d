//! Bulk published / unpublished filters
//!
//! For date windows the published set is the closed interval
//! `[publish_on, unpublish_on]` and the unpublished set is its strict
//! complement, so every record lands in exactly one of them and membership
//! matches [`DatePublishing::is_published_at`](crate::model::DatePublishing::is_published_at).

use chrono::{DateTime, Utc};

use super::lookup::{Lookup, TimestampField};
use super::queryset::QuerySet;
use crate::model::{HasDatePublishing, HasPublishingFlag};

/// `(unpublish_on IS NULL OR unpublish_on >= now) AND publish_on <= now`
pub fn published_lookup(now: DateTime<Utc>) -> Lookup {
    Lookup::IsNull(TimestampField::UnpublishOn)
        .or(Lookup::gte(TimestampField::UnpublishOn, now))
        .and(Lookup::lte(TimestampField::PublishOn, now))
}

/// `unpublish_on < now OR publish_on > now`
pub fn unpublished_lookup(now: DateTime<Utc>) -> Lookup {
    Lookup::lt(TimestampField::UnpublishOn, now).or(Lookup::gt(TimestampField::PublishOn, now))
}

/// Filters over the plain published flag
pub trait PublishingQueries: Sized {
    fn published(self) -> Self;
    fn unpublished(self) -> Self;
}

impl<'a, R: HasPublishingFlag> PublishingQueries for QuerySet<'a, R> {
    fn published(self) -> Self {
        self.filter(|r| r.publishing().is_published)
    }

    fn unpublished(self) -> Self {
        self.filter(|r| !r.publishing().is_published)
    }
}

/// Filters over the publishing window, evaluated at query time
pub trait DatePublishingQueries: Sized {
    fn published_at(self, now: DateTime<Utc>) -> Self;
    fn unpublished_at(self, now: DateTime<Utc>) -> Self;

    fn published(self) -> Self {
        self.published_at(Utc::now())
    }

    fn unpublished(self) -> Self {
        self.unpublished_at(Utc::now())
    }
}

impl<'a, R: HasDatePublishing> DatePublishingQueries for QuerySet<'a, R> {
    fn published_at(self, now: DateTime<Utc>) -> Self {
        let lookup = published_lookup(now);
        self.filter(|r| lookup.matches(r.date_publishing()))
    }

    fn unpublished_at(self, now: DateTime<Utc>) -> Self {
        let lookup = unpublished_lookup(now);
        self.filter(|r| lookup.matches(r.date_publishing()))
    }
}
