use serde::Serialize;

use super::list_display::{AdminContext, ListDisplay};
use super::templates::{self, RELATION_LIST};
use crate::errors::{FieldkitError, Result};
use crate::model::{HasRelations, ModelMeta};
use crate::text::{format_message, MessageKey};

pub const DEFAULT_MORE_SEPARATOR: &str = "&hellip;";

/// Column listing links to the related objects of a named relation
///
/// At most `max_num` change-page links are shown; the rest are summarised by a
/// "K more" link to the related changelist filtered to every related key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationList {
    pub accessor: String,
    pub label: String,
    /// Falls back to `Settings::max_num_relations`
    pub max_num: Option<usize>,
    /// Trusted HTML placed between the links and the "more" link
    pub more_separator: String,
}

#[derive(Serialize)]
struct Link {
    url: String,
    label: String,
}

#[derive(Serialize)]
struct More<'a> {
    url: String,
    count: usize,
    separator: &'a str,
}

#[derive(Serialize)]
struct ListContext<'a> {
    links: Vec<Link>,
    more: Option<More<'a>>,
}

impl RelationList {
    pub fn new(accessor: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            label: label.into(),
            max_num: None,
            more_separator: DEFAULT_MORE_SEPARATOR.to_string(),
        }
    }

    pub fn with_max_num(mut self, max_num: usize) -> Self {
        self.max_num = Some(max_num);
        self
    }

    pub fn with_more_separator(mut self, separator: impl Into<String>) -> Self {
        self.more_separator = separator.into();
        self
    }

    /// # Errors
    ///
    /// Returns `UnknownRelation` for an unknown accessor, and `NotMounted` in
    /// debug mode when the related type has no admin page. Outside debug mode
    /// an unmounted relation renders as the empty string.
    pub fn render<R: HasRelations>(&self, ctx: &AdminContext<'_>, record: &R) -> Result<String> {
        let relation = record
            .relation(&self.accessor)
            .ok_or_else(|| FieldkitError::UnknownRelation {
                model: R::META.label(),
                accessor: self.accessor.clone(),
            })?;

        let changelist_url = match ctx.site.changelist_url(&relation.target) {
            Ok(url) => url,
            Err(err) if ctx.settings.debug => return Err(err),
            Err(_) => {
                tracing::debug!(
                    accessor = self.accessor.as_str(),
                    site = ctx.site.name(),
                    "{}",
                    not_mounted_message(&relation.target, ctx.site.name())
                );
                return Ok(String::new());
            }
        };

        let max_num = self.max_num.unwrap_or(ctx.settings.max_num_relations);
        let links = relation
            .objects
            .iter()
            .take(max_num)
            .map(|object| {
                Ok(Link {
                    url: ctx.site.change_url(&relation.target, object.pk)?,
                    label: object.label.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let count = relation.count();
        let more = (count > max_num).then(|| {
            let pks: Vec<String> = relation.objects.iter().map(|o| o.pk.to_string()).collect();
            More {
                url: format!("{}?id__in={}", changelist_url, pks.join(",")),
                count: count - max_num,
                separator: &self.more_separator,
            }
        });

        templates::render(RELATION_LIST, ListContext { links, more })
    }
}

fn not_mounted_message(target: &ModelMeta, site: &str) -> String {
    format_message(
        MessageKey::ObjectNotMounted,
        &[
            ("verbose_name", target.object_name),
            ("site", &format!("\"{}\"", site)),
        ],
    )
}

impl<R: HasRelations + 'static> From<RelationList> for ListDisplay<R> {
    fn from(helper: RelationList) -> Self {
        let label = helper.label.clone();
        ListDisplay::new(label, true, move |ctx, record: &R| helper.render(ctx, record))
    }
}
