//! Store-level soft delete and restore
//!
//! Unknown keys are a recoverable `RecordNotFound`. Invalid transitions on an
//! existing record are caller bugs and panic inside
//! [`HasSoftDelete`](crate::model::HasSoftDelete).

use chrono::{DateTime, Utc};

use super::store::Store;
use crate::errors::Result;
use crate::model::{HasSoftDelete, RecordId};
use crate::{log_op_end, log_op_error, log_op_start};

impl<R: HasSoftDelete> Store<R> {
    /// Soft-delete the record with key `pk`
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if no record has this key.
    ///
    /// # Panics
    ///
    /// Panics if the record is already deleted.
    pub fn soft_delete(&mut self, pk: RecordId) -> Result<()> {
        self.soft_delete_at(pk, Utc::now())
    }

    /// # Errors
    ///
    /// Returns `RecordNotFound` if no record has this key.
    ///
    /// # Panics
    ///
    /// Panics if the record is already deleted.
    pub fn soft_delete_at(&mut self, pk: RecordId, now: DateTime<Utc>) -> Result<()> {
        self.transition("soft_delete", pk, now, R::delete)
    }

    /// Restore the soft-deleted record with key `pk`
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if no record has this key.
    ///
    /// # Panics
    ///
    /// Panics if the record is not currently deleted.
    pub fn restore(&mut self, pk: RecordId) -> Result<()> {
        self.restore_at(pk, Utc::now())
    }

    /// # Errors
    ///
    /// Returns `RecordNotFound` if no record has this key.
    ///
    /// # Panics
    ///
    /// Panics if the record is not currently deleted.
    pub fn restore_at(&mut self, pk: RecordId, now: DateTime<Utc>) -> Result<()> {
        self.transition("restore", pk, now, R::restore)
    }

    fn transition(
        &mut self,
        op: &'static str,
        pk: RecordId,
        now: DateTime<Utc>,
        change: fn(&mut R),
    ) -> Result<()> {
        let model = R::META.label();
        log_op_start!(op, model = model.as_str(), pk = pk.0);
        let start = std::time::Instant::now();

        self.modify_at(pk, now, change).map_err(|e| {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;
        let state = self.get(pk)?.deleted_state();

        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            model = model.as_str(),
            pk = pk.0,
            deleted_state = ?state
        );
        Ok(())
    }
}
