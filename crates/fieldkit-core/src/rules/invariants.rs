use crate::model::{HasChangeTracking, HasDatePublishing, HasSoftDelete, Record, RecordId};
use crate::ops::Store;

/// Find records whose audit timestamps are inconsistent
///
/// A record violates change tracking when only one of `created` / `modified`
/// is set, or when `modified` precedes `created`. Records saved through the
/// store never do; raw updates can.
pub fn find_change_tracking_violations<R>(store: &Store<R>) -> Vec<RecordId>
where
    R: Record + HasChangeTracking,
{
    store
        .objects()
        .filter(|record| match (record.created(), record.modified()) {
            (Some(created), Some(modified)) => modified < created,
            (None, None) => false,
            _ => true,
        })
        .pks()
}

/// Find records whose publishing window ends before it starts
///
/// Such a window can never be published; usually a data-entry mistake.
pub fn find_inverted_publish_windows<R: HasDatePublishing>(store: &Store<R>) -> Vec<RecordId> {
    store
        .objects()
        .filter(|record| {
            record
                .unpublish_on()
                .is_some_and(|unpublish_on| unpublish_on < record.publish_on())
        })
        .pks()
}

/// Find soft-deleted records that are still reachable from `referrers`
///
/// Returns `(referrer, deleted target)` pairs.
pub fn find_references_to_deleted<R, T, F>(
    referrers: &Store<R>,
    targets: &Store<T>,
    references: F,
) -> Vec<(RecordId, RecordId)>
where
    R: Record,
    T: HasSoftDelete,
    F: Fn(&R) -> Vec<RecordId>,
{
    let mut found = Vec::new();
    for referrer in referrers.objects() {
        let Some(referrer_pk) = referrer.pk() else {
            continue;
        };
        for target_pk in references(referrer) {
            if targets.get(target_pk).is_ok_and(|target| target.is_deleted()) {
                found.push((referrer_pk, target_pk));
            }
        }
    }
    found
}
