//! Edit-form field groupings for the record mixins

use crate::text::{message, MessageKey};

/// Labeled group of fields on an admin edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fieldset {
    /// Catalogue key of the heading; unnamed groups have none
    pub name: Option<MessageKey>,
    pub classes: &'static [&'static str],
    pub fields: &'static [&'static str],
}

impl Fieldset {
    /// Heading in the active locale
    pub fn label(&self) -> Option<&'static str> {
        self.name.map(message)
    }

    pub fn is_collapsed(&self) -> bool {
        self.classes.contains(&"collapse")
    }
}

pub const TITLES_FIELDSET: Fieldset = Fieldset {
    name: None,
    classes: &[],
    fields: &["title", "menu_title"],
};

pub const PUBLISHING_FIELDSET: Fieldset = Fieldset {
    name: None,
    classes: &[],
    fields: &["is_published"],
};

pub const DATE_PUBLISHING_FIELDSET: Fieldset = Fieldset {
    name: Some(MessageKey::DatesFieldsetLabel),
    classes: &[],
    fields: &["publish_on", "unpublish_on"],
};

pub const SEO_FIELDSET: Fieldset = Fieldset {
    name: Some(MessageKey::SeoFieldsetLabel),
    classes: &["collapse"],
    fields: &["meta_title", "meta_description", "meta_keywords"],
};

pub const CHANGETRACKING_FIELDSET: Fieldset = Fieldset {
    name: Some(MessageKey::ChangetrackingFieldsetLabel),
    classes: &["collapse"],
    fields: &["created", "modified"],
};

/// Audit fields that must never be edited by hand
pub const CHANGETRACKING_READONLYS: &[&str] = &["created", "modified"];

/// Every field name across `fieldsets`, in form order
pub fn flatten_fieldsets(fieldsets: &[Fieldset]) -> Vec<&'static str> {
    fieldsets
        .iter()
        .flat_map(|fieldset| fieldset.fields.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_and_collapse() {
        assert_eq!(TITLES_FIELDSET.label(), None);
        assert_eq!(DATE_PUBLISHING_FIELDSET.label(), Some("publishing info"));
        assert_eq!(SEO_FIELDSET.label(), Some("search engine optimisation"));
        assert!(SEO_FIELDSET.is_collapsed());
        assert!(CHANGETRACKING_FIELDSET.is_collapsed());
        assert!(!PUBLISHING_FIELDSET.is_collapsed());
    }

    #[test]
    fn test_flatten_keeps_order() {
        let fields = flatten_fieldsets(&[TITLES_FIELDSET, SEO_FIELDSET, CHANGETRACKING_FIELDSET]);
        assert_eq!(
            fields,
            vec![
                "title",
                "menu_title",
                "meta_title",
                "meta_description",
                "meta_keywords",
                "created",
                "modified"
            ]
        );
        assert!(CHANGETRACKING_READONLYS
            .iter()
            .all(|f| CHANGETRACKING_FIELDSET.fields.contains(f)));
    }
}
