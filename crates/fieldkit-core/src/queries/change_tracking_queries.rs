//! Bulk "recently changed" filters

use chrono::{DateTime, Utc};

use super::lookup::{Lookup, TimestampField};
use super::queryset::QuerySet;
use crate::model::{HasChangeTracking, RecencyWindow};

/// `field` lies in `[now - window, now]`
pub fn recently_lookup(
    field: TimestampField,
    window: RecencyWindow,
    now: DateTime<Utc>,
) -> Lookup {
    Lookup::gte(field, window.since(now)).and(Lookup::lte(field, now))
}

pub trait ChangeTrackingQueries: Sized {
    fn created_recently_at(self, window: RecencyWindow, now: DateTime<Utc>) -> Self;
    fn modified_recently_at(self, window: RecencyWindow, now: DateTime<Utc>) -> Self;

    /// Records created within `window` of now
    fn created_recently(self, window: RecencyWindow) -> Self {
        self.created_recently_at(window, Utc::now())
    }

    /// Records saved within `window` of now
    fn modified_recently(self, window: RecencyWindow) -> Self {
        self.modified_recently_at(window, Utc::now())
    }
}

impl<'a, R: HasChangeTracking> ChangeTrackingQueries for QuerySet<'a, R> {
    fn created_recently_at(self, window: RecencyWindow, now: DateTime<Utc>) -> Self {
        let lookup = recently_lookup(TimestampField::Created, window, now);
        self.filter(|r| lookup.matches(r.change_tracking()))
    }

    fn modified_recently_at(self, window: RecencyWindow, now: DateTime<Utc>) -> Self {
        let lookup = recently_lookup(TimestampField::Modified, window, now);
        self.filter(|r| lookup.matches(r.change_tracking()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChangeTracking;
    use chrono::{Duration, TimeZone};

    struct Row(ChangeTracking);

    impl HasChangeTracking for Row {
        fn change_tracking(&self) -> &ChangeTracking {
            &self.0
        }

        fn change_tracking_mut(&mut self) -> &mut ChangeTracking {
            &mut self.0
        }
    }

    fn row(created: Option<DateTime<Utc>>, modified: Option<DateTime<Utc>>) -> Row {
        Row(ChangeTracking { created, modified })
    }

    #[test]
    fn test_bulk_filters_use_named_field() {
        let now = Utc.with_ymd_and_hms(2026, 4, 2, 12, 0, 0).unwrap();
        let rows = [
            row(Some(now - Duration::hours(5)), Some(now - Duration::minutes(5))),
            row(Some(now - Duration::minutes(30)), Some(now - Duration::minutes(30))),
            row(None, None),
        ];
        let window = RecencyWindow::default();

        let created = QuerySet::new(&rows).created_recently_at(window, now);
        let modified = QuerySet::new(&rows).modified_recently_at(window, now);
        assert_eq!(created.len(), 1);
        assert_eq!(modified.len(), 2);
    }
}
