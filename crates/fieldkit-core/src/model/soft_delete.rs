//! Soft deletion
//!
//! Records are never physically removed; a tri-state flag hides them instead.
//!
//! ```text
//! Unmodified --delete()--> Deleted --restore()--> Restored
//!                             ^                      |
//!                             +-------delete()-------+
//! ```
//!
//! Any other transition is a bug in the calling code and panics.

use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::text::{format_message, message, MessageKey};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletedState {
    /// Never deleted
    #[default]
    Unmodified,
    /// Deleted, then restored
    Restored,
    Deleted,
}

impl DeletedState {
    /// Whether the record belongs to the active (visible) set
    pub fn is_active(&self) -> bool {
        !matches!(self, DeletedState::Deleted)
    }

    /// Display label from the message catalogue
    pub fn label(&self) -> &'static str {
        match self {
            DeletedState::Unmodified => message(MessageKey::SoftDeleteInitial),
            DeletedState::Restored => message(MessageKey::SoftDeleteFalse),
            DeletedState::Deleted => message(MessageKey::SoftDeleteTrue),
        }
    }

    /// Tri-state flag as stored in a nullable boolean column
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            DeletedState::Unmodified => None,
            DeletedState::Restored => Some(false),
            DeletedState::Deleted => Some(true),
        }
    }

    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => DeletedState::Unmodified,
            Some(false) => DeletedState::Restored,
            Some(true) => DeletedState::Deleted,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftDelete {
    pub deleted: DeletedState,
}

pub trait HasSoftDelete: Record {
    fn soft_delete(&self) -> &SoftDelete;
    fn soft_delete_mut(&mut self) -> &mut SoftDelete;

    fn deleted_state(&self) -> DeletedState {
        self.soft_delete().deleted
    }

    fn is_deleted(&self) -> bool {
        self.deleted_state() == DeletedState::Deleted
    }

    /// Hide the record instead of removing it
    ///
    /// # Panics
    ///
    /// Panics if the record has never been saved or is already deleted.
    fn delete(&mut self) {
        assert_persisted(self);
        assert!(
            !self.is_deleted(),
            "{}",
            format_message(
                MessageKey::ObjectAlreadyDeleted,
                &[("model", Self::META.object_name)]
            )
        );
        self.soft_delete_mut().deleted = DeletedState::Deleted;
    }

    /// Bring a deleted record back
    ///
    /// # Panics
    ///
    /// Panics if the record has never been saved or is not currently deleted.
    fn restore(&mut self) {
        assert_persisted(self);
        assert!(
            self.is_deleted(),
            "{}",
            format_message(
                MessageKey::ObjectNotDeleted,
                &[("model", Self::META.object_name)]
            )
        );
        self.soft_delete_mut().deleted = DeletedState::Restored;
    }
}

fn assert_persisted<R: Record + ?Sized>(record: &R) {
    assert!(
        record.pk().is_some(),
        "{}",
        format_message(
            MessageKey::ObjectLacksPk,
            &[("model", R::META.object_name), ("pk", R::META.pk_name)]
        )
    );
}
