//! Creation / modification audit timestamps

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_RECENTLY_MINUTES;
use crate::errors::{FieldkitError, Result};

/// Length of the "recently" window, always non-negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecencyWindow(Duration);

impl RecencyWindow {
    /// # Errors
    ///
    /// Returns `InvalidWindow` for negative or out-of-range minutes.
    pub fn minutes(minutes: i64) -> Result<Self> {
        Duration::try_minutes(minutes)
            .ok_or_else(|| FieldkitError::InvalidWindow {
                reason: format!("{} minutes is out of range", minutes),
            })
            .and_then(Self::from_duration)
    }

    /// # Errors
    ///
    /// Returns `InvalidWindow` for negative or out-of-range days.
    pub fn days(days: i64) -> Result<Self> {
        Duration::try_days(days)
            .ok_or_else(|| FieldkitError::InvalidWindow {
                reason: format!("{} days is out of range", days),
            })
            .and_then(Self::from_duration)
    }

    /// # Errors
    ///
    /// Returns `InvalidWindow` if the duration does not fit a time delta.
    pub fn try_from_std(duration: std::time::Duration) -> Result<Self> {
        Duration::from_std(duration)
            .map_err(|e| FieldkitError::InvalidWindow {
                reason: e.to_string(),
            })
            .and_then(Self::from_duration)
    }

    /// # Errors
    ///
    /// Returns `InvalidWindow` for a negative duration.
    pub fn from_duration(duration: Duration) -> Result<Self> {
        if duration < Duration::zero() {
            return Err(FieldkitError::InvalidWindow {
                reason: "window cannot be negative".to_string(),
            });
        }
        Ok(Self(duration))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Start of the window ending at `now`
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(self.0)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Whether `timestamp` lies in `[now - window, now]`
    pub fn contains(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.since(now) <= timestamp && timestamp <= now
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self(Duration::minutes(DEFAULT_RECENTLY_MINUTES))
    }
}

/// `created` / `modified` audit timestamps
///
/// Both are unset until the first save. [`touch`](Self::touch) keeps
/// `modified >= created` even when the clock moves backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTracking {
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
}

impl ChangeTracking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a save at `now`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let created = *self.created.get_or_insert(now);
        self.modified = Some(now.max(created));
    }

    pub fn created_recently_at(&self, window: RecencyWindow, now: DateTime<Utc>) -> bool {
        self.created.is_some_and(|ts| window.contains(ts, now))
    }

    pub fn modified_recently_at(&self, window: RecencyWindow, now: DateTime<Utc>) -> bool {
        self.modified.is_some_and(|ts| window.contains(ts, now))
    }
}

pub trait HasChangeTracking {
    fn change_tracking(&self) -> &ChangeTracking;
    fn change_tracking_mut(&mut self) -> &mut ChangeTracking;

    fn created(&self) -> Option<DateTime<Utc>> {
        self.change_tracking().created
    }

    fn modified(&self) -> Option<DateTime<Utc>> {
        self.change_tracking().modified
    }

    /// Whether the record was created within `window` of now
    fn created_recently(&self, window: RecencyWindow) -> bool {
        self.change_tracking().created_recently_at(window, Utc::now())
    }

    /// Whether the record was saved within `window` of now
    fn modified_recently(&self, window: RecencyWindow) -> bool {
        self.change_tracking().modified_recently_at(window, Utc::now())
    }
}
