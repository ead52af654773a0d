use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::errors::{FieldkitError, Result};
use crate::model::{Record, RecordId};
use crate::queries::QuerySet;
use crate::{log_op_end, log_op_start};

/// In-memory store for one record type
///
/// Stands in for the persistence layer the helpers query against. Records are
/// kept in identity-key order so query results are deterministic. Not
/// thread-safe; writes take `&mut self`.
#[derive(Debug, Clone)]
pub struct Store<R: Record> {
    records: BTreeMap<RecordId, R>,
    next_pk: u64,
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Store<R> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_pk: 1,
        }
    }

    /// Persist `record` now
    ///
    /// See [`save_at`](Self::save_at).
    pub fn save(&mut self, record: R) -> RecordId {
        self.save_at(record, Utc::now())
    }

    /// Persist `record` as of `now`
    ///
    /// Assigns the next identity key to unsaved records, runs the record's
    /// `on_save` hook and replaces any stored record with the same key.
    pub fn save_at(&mut self, mut record: R, now: DateTime<Utc>) -> RecordId {
        let model = R::META.label();
        log_op_start!("save", model = model.as_str());
        let start = std::time::Instant::now();

        let pk = match record.pk() {
            Some(pk) => pk,
            None => {
                let pk = RecordId(self.next_pk);
                record.set_pk(pk);
                pk
            }
        };
        self.next_pk = self.next_pk.max(pk.0.saturating_add(1));
        record.on_save(now);
        self.records.insert(pk, record);

        log_op_end!(
            "save",
            duration_ms = start.elapsed().as_millis() as u64,
            pk = pk.0
        );
        pk
    }

    /// # Errors
    ///
    /// Returns `RecordNotFound` if no record has this key.
    pub fn get(&self, pk: RecordId) -> Result<&R> {
        self.records.get(&pk).ok_or_else(|| not_found::<R>(pk))
    }

    /// # Errors
    ///
    /// Returns `RecordNotFound` if no record has this key.
    pub fn get_mut(&mut self, pk: RecordId) -> Result<&mut R> {
        self.records.get_mut(&pk).ok_or_else(|| not_found::<R>(pk))
    }

    /// Change a stored record without running `on_save`
    ///
    /// Mirrors a bulk `UPDATE`, which bypasses per-record save hooks; tests use
    /// it to place timestamps at exact instants.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if no record has this key.
    pub fn update_raw(&mut self, pk: RecordId, update: impl FnOnce(&mut R)) -> Result<()> {
        update(self.get_mut(pk)?);
        Ok(())
    }

    /// Apply `change` to a stored record and persist it as of `now`
    pub(crate) fn modify_at(
        &mut self,
        pk: RecordId,
        now: DateTime<Utc>,
        change: impl FnOnce(&mut R),
    ) -> Result<()> {
        let record = self.get_mut(pk)?;
        change(record);
        record.on_save(now);
        Ok(())
    }

    /// Every stored record, as a query set
    pub fn objects(&self) -> QuerySet<'_, R> {
        QuerySet::new(self.records.values())
    }

    pub fn contains(&self, pk: RecordId) -> bool {
        self.records.contains_key(&pk)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn not_found<R: Record>(pk: RecordId) -> FieldkitError {
    FieldkitError::RecordNotFound {
        model: R::META.label(),
        pk: pk.to_string(),
    }
}
