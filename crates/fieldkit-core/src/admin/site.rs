use std::collections::BTreeSet;

use crate::config::Settings;
use crate::errors::{FieldkitError, Result};
use crate::model::{ModelMeta, Record, RecordId};

/// Admin site mounted under a URL namespace
///
/// Knows which record types have admin pages and reverses their URLs:
/// `/{site}/{app_label}/{model_name}/` for the changelist and
/// `/{site}/{app_label}/{model_name}/{pk}/` for a change page.
#[derive(Debug, Clone)]
pub struct AdminSite {
    name: String,
    mounted: BTreeSet<(&'static str, &'static str)>,
}

impl AdminSite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mounted: BTreeSet::new(),
        }
    }

    /// Site named by `settings.admin_site`
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.admin_site.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mount an admin page for `R`
    pub fn register<R: Record>(&mut self) -> &mut Self {
        self.register_meta(&R::META)
    }

    pub fn register_meta(&mut self, meta: &ModelMeta) -> &mut Self {
        self.mounted.insert((meta.app_label, meta.model_name));
        self
    }

    pub fn is_registered(&self, meta: &ModelMeta) -> bool {
        self.mounted.contains(&(meta.app_label, meta.model_name))
    }

    /// # Errors
    ///
    /// Returns `NotMounted` if the type has no admin page on this site.
    pub fn changelist_url(&self, meta: &ModelMeta) -> Result<String> {
        self.ensure_mounted(meta)?;
        Ok(format!(
            "/{}/{}/{}/",
            self.name, meta.app_label, meta.model_name
        ))
    }

    /// # Errors
    ///
    /// Returns `NotMounted` if the type has no admin page on this site.
    pub fn change_url(&self, meta: &ModelMeta, pk: RecordId) -> Result<String> {
        Ok(format!("{}{}/", self.changelist_url(meta)?, pk))
    }

    fn ensure_mounted(&self, meta: &ModelMeta) -> Result<()> {
        if self.is_registered(meta) {
            Ok(())
        } else {
            Err(FieldkitError::NotMounted {
                model: meta.label(),
                site: self.name.clone(),
            })
        }
    }
}

impl Default for AdminSite {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORY: ModelMeta =
        ModelMeta::new("blog", "category", "Category", "category", "categories");

    #[test]
    fn test_reverse_mounted_urls() {
        let mut site = AdminSite::default();
        site.register_meta(&CATEGORY);
        assert_eq!(site.changelist_url(&CATEGORY).unwrap(), "/admin/blog/category/");
        assert_eq!(
            site.change_url(&CATEGORY, RecordId(7)).unwrap(),
            "/admin/blog/category/7/"
        );
    }

    #[test]
    fn test_unmounted_type_does_not_reverse() {
        let site = AdminSite::new("staff");
        let err = site.change_url(&CATEGORY, RecordId(1)).unwrap_err();
        assert_eq!(
            err,
            FieldkitError::NotMounted {
                model: "blog.Category".to_string(),
                site: "staff".to_string()
            }
        );
    }
}
