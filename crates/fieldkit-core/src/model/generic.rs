//! Polymorphic references
//!
//! A [`Generic`] reference points at a record of any registered type. The
//! content type acts as the discriminator; the identifier is kept as a string
//! so types with non-integer keys can be referenced too.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::record::{ModelMeta, Record, RecordId};
use crate::errors::{FieldkitError, Result};
use crate::ops::Store;

/// Stable numeric id of a registered record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentTypeId(pub u32);

impl std::fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentType {
    pub id: ContentTypeId,
    pub app_label: &'static str,
    pub model: &'static str,
}

/// Assigns content type ids to record types
///
/// Ids are handed out in registration order starting at 1 and never change
/// for the lifetime of the registry.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeRegistry {
    by_id: BTreeMap<ContentTypeId, ContentType>,
    by_model: BTreeMap<(&'static str, &'static str), ContentTypeId>,
}

impl ContentTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `R`, returning its id (the existing one if already registered)
    pub fn register<R: Record>(&mut self) -> ContentTypeId {
        self.register_meta(R::META)
    }

    pub fn register_meta(&mut self, meta: ModelMeta) -> ContentTypeId {
        let key = (meta.app_label, meta.model_name);
        if let Some(id) = self.by_model.get(&key) {
            return *id;
        }
        let registered = u32::try_from(self.by_id.len()).unwrap_or(u32::MAX);
        let id = ContentTypeId(registered.saturating_add(1));
        self.by_model.insert(key, id);
        self.by_id.insert(
            id,
            ContentType {
                id,
                app_label: meta.app_label,
                model: meta.model_name,
            },
        );
        id
    }

    /// # Errors
    ///
    /// Returns `UnknownContentType` if `R` was never registered.
    pub fn id_for<R: Record>(&self) -> Result<ContentTypeId> {
        self.lookup(&R::META)
    }

    /// # Errors
    ///
    /// Returns `UnknownContentType` if the type was never registered.
    pub fn lookup(&self, meta: &ModelMeta) -> Result<ContentTypeId> {
        self.by_model
            .get(&(meta.app_label, meta.model_name))
            .copied()
            .ok_or_else(|| FieldkitError::UnknownContentType {
                model: meta.label(),
            })
    }

    pub fn get(&self, id: ContentTypeId) -> Option<&ContentType> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Reference to a record of any registered type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generic {
    pub content_type: ContentTypeId,
    pub content_id: String,
}

impl Generic {
    pub fn new(content_type: ContentTypeId, content_id: impl Into<String>) -> Self {
        Self {
            content_type,
            content_id: content_id.into(),
        }
    }

    /// Reference to a saved `record`
    ///
    /// # Errors
    ///
    /// Returns `UnknownContentType` if `R` is not registered and
    /// `InvalidReference` if the record has no identity key yet.
    pub fn to<R: Record>(registry: &ContentTypeRegistry, record: &R) -> Result<Self> {
        let content_type = registry.id_for::<R>()?;
        let pk = record.pk().ok_or_else(|| FieldkitError::InvalidReference {
            reason: format!("unsaved {} has no identity key", R::META.label()),
        })?;
        Ok(Self::new(content_type, pk.to_string()))
    }

    /// Whether this reference targets a record of type `R`
    pub fn points_to<R: Record>(&self, registry: &ContentTypeRegistry) -> bool {
        registry
            .id_for::<R>()
            .is_ok_and(|id| id == self.content_type)
    }

    /// Resolve the reference against a store of `R` records
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` if the reference targets another type or its
    /// identifier is not a record id, and `RecordNotFound` if no such record
    /// exists.
    pub fn resolve<'s, R: Record>(
        &self,
        registry: &ContentTypeRegistry,
        store: &'s Store<R>,
    ) -> Result<&'s R> {
        let expected = registry.id_for::<R>()?;
        if expected != self.content_type {
            return Err(FieldkitError::InvalidReference {
                reason: format!(
                    "content type {} does not refer to {}",
                    self.content_type,
                    R::META.label()
                ),
            });
        }
        let pk: RecordId = self
            .content_id
            .parse()
            .map_err(|_| FieldkitError::InvalidReference {
                reason: format!("'{}' is not a record id", self.content_id),
            })?;
        store.get(pk)
    }
}

pub trait HasGeneric {
    fn generic(&self) -> &Generic;
    fn generic_mut(&mut self) -> &mut Generic;

    fn content_type(&self) -> ContentTypeId {
        self.generic().content_type
    }

    fn content_id(&self) -> &str {
        &self.generic().content_id
    }
}
