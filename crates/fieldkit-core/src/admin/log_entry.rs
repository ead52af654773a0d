//! Admin change history

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::Result;
use crate::model::{ContentTypeId, ContentTypeRegistry, Generic, HasGeneric, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionFlag {
    Addition,
    Change,
    Deletion,
}

/// One admin action on one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// UUID v7, so entries sort by creation time
    pub id: Uuid,
    pub action_time: DateTime<Utc>,
    pub target: Generic,
    pub object_repr: String,
    pub action_flag: ActionFlag,
    pub change_message: String,
}

impl HasGeneric for LogEntry {
    fn generic(&self) -> &Generic {
        &self.target
    }

    fn generic_mut(&mut self) -> &mut Generic {
        &mut self.target
    }
}

/// Append-only log of admin actions
#[derive(Debug, Clone, Default)]
pub struct LogEntryStore {
    entries: Vec<LogEntry>,
}

impl LogEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an action on a saved `record` at `action_time`
    ///
    /// # Errors
    ///
    /// Returns `UnknownContentType` if `R` is not registered and
    /// `InvalidReference` if the record is unsaved.
    pub fn log_action<R: Record>(
        &mut self,
        registry: &ContentTypeRegistry,
        record: &R,
        action_flag: ActionFlag,
        change_message: impl Into<String>,
        action_time: DateTime<Utc>,
    ) -> Result<&LogEntry> {
        let entry = LogEntry {
            id: Uuid::now_v7(),
            action_time,
            target: Generic::to(registry, record)?,
            object_repr: record.label(),
            action_flag,
            change_message: change_message.into(),
        };
        tracing::debug!(
            model = R::META.label().as_str(),
            object_id = entry.target.content_id.as_str(),
            action = ?action_flag,
            "admin action logged"
        );
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Entries for one object, oldest first
    pub fn entries_for<'s>(
        &'s self,
        content_type: ContentTypeId,
        object_id: &'s str,
    ) -> impl Iterator<Item = &'s LogEntry> + 's {
        self.entries.iter().filter(move |entry| {
            entry.content_type() == content_type && entry.content_id() == object_id
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
