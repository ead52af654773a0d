use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity key assigned to a record on first persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(RecordId)
    }
}

/// Static description of a record type
///
/// Mirrors what an admin needs to address a type: the application it belongs
/// to, its URL-safe model name and its human-readable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelMeta {
    pub app_label: &'static str,
    /// Lowercase name used in URLs
    pub model_name: &'static str,
    /// Type name used in messages
    pub object_name: &'static str,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
    /// Attribute name of the identity key
    pub pk_name: &'static str,
}

impl ModelMeta {
    pub const fn new(
        app_label: &'static str,
        model_name: &'static str,
        object_name: &'static str,
        verbose_name: &'static str,
        verbose_name_plural: &'static str,
    ) -> Self {
        Self {
            app_label,
            model_name,
            object_name,
            verbose_name,
            verbose_name_plural,
            pk_name: "id",
        }
    }

    /// `app_label.ObjectName`, used in logs and errors
    pub fn label(&self) -> String {
        format!("{}.{}", self.app_label, self.object_name)
    }

    /// Verbose name agreeing with `count`
    pub fn verbose_name_for(&self, count: usize) -> &'static str {
        if count == 1 {
            self.verbose_name
        } else {
            self.verbose_name_plural
        }
    }
}

/// A concrete record type composed from the mixins
pub trait Record {
    const META: ModelMeta;

    /// Identity key; `None` until the record is first saved
    fn pk(&self) -> Option<RecordId>;

    /// Called by the store when it assigns an identity key
    fn set_pk(&mut self, pk: RecordId);

    /// Human-readable label shown in admin links
    fn label(&self) -> String;

    /// Canonical public URL, if the type has one
    fn absolute_url(&self) -> Option<String> {
        None
    }

    /// Hook run by the store before every write
    fn on_save(&mut self, _now: DateTime<Utc>) {}
}

/// One related object as the admin sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedObject {
    pub pk: RecordId,
    pub label: String,
}

/// Resolved contents of a named relation
#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    /// Metadata of the related type
    pub target: ModelMeta,
    pub objects: Vec<RelatedObject>,
}

impl Relation {
    /// Build a relation from saved records; unsaved ones are skipped
    pub fn from_records<'a, T, I>(records: I) -> Self
    where
        T: Record + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let objects = records
            .into_iter()
            .filter_map(|record| {
                record.pk().map(|pk| RelatedObject {
                    pk,
                    label: record.label(),
                })
            })
            .collect();
        Self {
            target: T::META,
            objects,
        }
    }

    pub fn count(&self) -> usize {
        self.objects.len()
    }
}

/// Records exposing named one-to-many / many-to-many relations
pub trait HasRelations: Record {
    /// Resolve the relation called `accessor`, or `None` if there is none
    fn relation(&self, accessor: &str) -> Option<Relation>;
}
