use serde::Serialize;

use super::list_display::{AdminContext, ListDisplay};
use super::templates::{self, VIEW_ON_SITE};
use crate::errors::Result;
use crate::model::Record;
use crate::text::{message, MessageKey};

/// Column linking each record to its public page
///
/// The link goes through the `r/{content_type}/{pk}/` shortcut relative to the
/// changelist, so records without a canonical URL render nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOnSite {
    pub text: String,
    pub label: String,
}

#[derive(Serialize)]
struct LinkContext<'a> {
    url: String,
    text: &'a str,
}

impl ViewOnSite {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `UnknownContentType` if `R` is not registered, or `Template`
    /// if rendering fails.
    pub fn render<R: Record>(&self, ctx: &AdminContext<'_>, record: &R) -> Result<String> {
        let Some(pk) = record.pk() else {
            return Ok(String::new());
        };
        if record.absolute_url().is_none() {
            return Ok(String::new());
        }
        let content_type = ctx.content_types.id_for::<R>()?;
        templates::render(
            VIEW_ON_SITE,
            LinkContext {
                url: format!("../../r/{}/{}/", content_type, pk),
                text: &self.text,
            },
        )
    }
}

impl Default for ViewOnSite {
    fn default() -> Self {
        let text = message(MessageKey::ViewOnSiteLabel);
        Self::new(text, text)
    }
}

impl<R: Record + 'static> From<ViewOnSite> for ListDisplay<R> {
    fn from(helper: ViewOnSite) -> Self {
        let label = helper.label.clone();
        ListDisplay::new(label, true, move |ctx, record: &R| helper.render(ctx, record))
    }
}
