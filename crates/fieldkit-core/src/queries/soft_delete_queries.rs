use super::queryset::QuerySet;
use crate::model::{DeletedState, HasSoftDelete};

/// Filters over the soft-delete state
pub trait SoftDeleteQueries: Sized {
    /// Never-deleted and restored records
    fn active(self) -> Self;
    fn deleted(self) -> Self;
    fn restored(self) -> Self;
}

impl<'a, R: HasSoftDelete> SoftDeleteQueries for QuerySet<'a, R> {
    fn active(self) -> Self {
        self.filter(|r| r.deleted_state().is_active())
    }

    fn deleted(self) -> Self {
        self.filter(|r| r.deleted_state() == DeletedState::Deleted)
    }

    fn restored(self) -> Self {
        self.filter(|r| r.deleted_state() == DeletedState::Restored)
    }
}
