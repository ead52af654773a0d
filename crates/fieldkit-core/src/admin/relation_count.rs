use super::list_display::ListDisplay;
use crate::errors::{FieldkitError, Result};
use crate::model::HasRelations;

/// Column showing `"{count} {verbose name}"` for a named relation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationCount {
    pub accessor: String,
    pub label: String,
}

impl RelationCount {
    pub fn new(accessor: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            label: label.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `UnknownRelation` if the record has no such relation.
    pub fn render<R: HasRelations>(&self, record: &R) -> Result<String> {
        let relation = record
            .relation(&self.accessor)
            .ok_or_else(|| FieldkitError::UnknownRelation {
                model: R::META.label(),
                accessor: self.accessor.clone(),
            })?;
        let count = relation.count();
        Ok(format!(
            "{} {}",
            count,
            relation.target.verbose_name_for(count)
        ))
    }
}

impl<R: HasRelations + 'static> From<RelationCount> for ListDisplay<R> {
    fn from(helper: RelationCount) -> Self {
        let label = helper.label.clone();
        ListDisplay::new(label, false, move |_, record: &R| helper.render(record))
    }
}
