//! Date-window publishing
//!
//! A record is visible while `now` lies in the closed interval
//! `[publish_on, unpublish_on]`; an unset `unpublish_on` leaves the interval
//! open-ended. The bulk filters in
//! [`queries::publishing_queries`](crate::queries::publishing_queries) use the
//! same convention so per-record and bulk results always agree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::text::{format_message, MessageKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePublishing {
    pub publish_on: DateTime<Utc>,
    pub unpublish_on: Option<DateTime<Utc>>,
}

impl DatePublishing {
    /// Window opening at `publish_on` with no end
    pub fn starting(publish_on: DateTime<Utc>) -> Self {
        Self {
            publish_on,
            unpublish_on: None,
        }
    }

    pub fn between(publish_on: DateTime<Utc>, unpublish_on: DateTime<Utc>) -> Self {
        Self {
            publish_on,
            unpublish_on: Some(unpublish_on),
        }
    }

    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        match self.unpublish_on {
            Some(unpublish_on) => self.publish_on <= now && now <= unpublish_on,
            None => self.publish_on <= now,
        }
    }

    /// Flag-style setter
    ///
    /// `true` opens the window at `now` (unless it already opened) and
    /// removes the end date. `false` closes the window at `now`; the record
    /// stays visible up to and including `now`.
    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        self.publish_on = self.publish_on.min(now);
        self.unpublish_on = if published { None } else { Some(now) };
    }
}

impl Default for DatePublishing {
    /// Published from now on
    fn default() -> Self {
        Self::starting(Utc::now())
    }
}

pub trait HasDatePublishing: Record {
    fn date_publishing(&self) -> &DatePublishing;
    fn date_publishing_mut(&mut self) -> &mut DatePublishing;

    fn publish_on(&self) -> DateTime<Utc> {
        self.date_publishing().publish_on
    }

    fn unpublish_on(&self) -> Option<DateTime<Utc>> {
        self.date_publishing().unpublish_on
    }

    /// Whether `now` falls inside the publishing window
    fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.date_publishing().is_published_at(now)
    }

    /// Evaluated against the clock on every call
    fn is_published(&self) -> bool {
        self.is_published_at(Utc::now())
    }

    /// Open the window at `now`
    ///
    /// # Panics
    ///
    /// Panics if the record is already published at `now`.
    fn publish(&mut self, now: DateTime<Utc>) {
        assert!(
            !self.is_published_at(now),
            "{}",
            format_message(
                MessageKey::ObjectAlreadyPublished,
                &[("model", Self::META.object_name)]
            )
        );
        self.date_publishing_mut().set_published(true, now);
    }

    /// Close the window at `now`
    ///
    /// # Panics
    ///
    /// Panics if the record is not published at `now`.
    fn unpublish(&mut self, now: DateTime<Utc>) {
        assert!(
            self.is_published_at(now),
            "{}",
            format_message(
                MessageKey::ObjectNotPublished,
                &[("model", Self::META.object_name)]
            )
        );
        self.date_publishing_mut().set_published(false, now);
    }
}
