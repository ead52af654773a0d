//! Message catalogue
//!
//! Every user-facing string (field labels, help texts, fieldset names,
//! precondition messages) has a [`MessageKey`] with default English text.
//! A [`Catalog`] layers per-locale overrides on top; one catalogue is
//! installed process-wide at startup with [`install`] and read through
//! [`message`] / [`format_message`].

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::Settings;
use crate::errors::{FieldkitError, Result};

macro_rules! message_keys {
    ($($variant:ident => $key:literal, $text:literal;)+) => {
        /// Key of a translatable message
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MessageKey {
            $($variant,)+
        }

        impl MessageKey {
            /// All keys, in declaration order
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)+];

            /// Stable snake_case key used in configuration files
            pub fn key(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $key,)+
                }
            }

            /// Built-in English text
            pub fn default_text(&self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $text,)+
                }
            }

            /// Look a key up by its configuration name
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(MessageKey::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

message_keys! {
    TitlesTitleLabel => "titles_title_label", "title";
    TitlesMenuLabel => "titles_menu_label", "menu title";
    TitlesMenuHelp => "titles_menu_help", "may be displayed in menus, instead of the standard title";

    SeoTitleLabel => "seo_title_label", "page title";
    SeoTitleHelp => "seo_title_help", "displayed by the web browser in the window/tab/taskbar.";
    SeoDescriptionLabel => "seo_description_label", "page description";
    SeoDescriptionHelp => "seo_description_help", "may be displayed by search engines in results.";
    SeoKeywordsLabel => "seo_keywords_label", "page keywords";
    SeoKeywordsHelp => "seo_keywords_help", "may be used by search engines to flag you as spamming.";
    SeoFieldsetLabel => "seo_fieldset_label", "search engine optimisation";

    SoftDeleteLabel => "soft_delete_label", "deleted?";
    SoftDeleteHelp => "soft_delete_help", "has this been removed from the website?";
    SoftDeleteInitial => "soft_delete_initial", "unmodified";
    SoftDeleteFalse => "soft_delete_false", "restored";
    SoftDeleteTrue => "soft_delete_true", "deleted";

    ChangetrackingFieldsetLabel => "changetracking_fieldset_label", "changes";
    CreatedLabel => "created_label", "created";
    CreatedHelp => "created_help", "the date and time this object was first saved";
    ModifiedLabel => "modified_label", "last modified";
    ModifiedHelp => "modified_help", "the date and time this object was last saved";

    DatesFieldsetLabel => "dates_fieldset_label", "publishing info";
    PublishLabel => "publish_label", "publishing date";
    PublishHelp => "publish_help", "the date and time on which this object should be visible on the website.";
    UnpublishLabel => "unpublish_label", "publishing end date";
    UnpublishHelp => "unpublish_help", "if filled in, this date and time are when this object will cease being available.";
    QuickPublishLabel => "quick_publish_label", "published";
    QuickPublishHelp => "quick_publish_help", "whether this object is visible on the website";

    ViewOnSiteLabel => "view_on_site_label", "View on site";
    LogentryLabel => "logentry_label", "recent changes";
    LogentryEmpty => "logentry_empty", "no changes";

    ObjectLacksPk => "object_lacks_pk", "{model} object can't be deleted because its {pk} attribute is set to None.";
    ObjectNotDeleted => "object_not_deleted", "{model} object can't be restored because it is not currently deleted.";
    ObjectAlreadyDeleted => "object_already_deleted", "{model} object can't be deleted because it is already deleted.";
    ObjectNotPublished => "object_not_published", "{model} object can't be unpublished because it is not currently published.";
    ObjectAlreadyPublished => "object_already_published", "{model} object can't be published because it is already published.";
    ObjectNotMounted => "object_not_mounted", "Unable to find {verbose_name} mounted on the admin site {site}";
}

/// Message catalogue with per-locale overrides
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: Option<String>,
    overrides: HashMap<String, HashMap<MessageKey, String>>,
}

impl Catalog {
    /// Catalogue with only the built-in English text
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the active locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Override one message for a locale
    pub fn add_override(
        &mut self,
        locale: impl Into<String>,
        key: MessageKey,
        text: impl Into<String>,
    ) {
        self.overrides
            .entry(locale.into())
            .or_default()
            .insert(key, text.into());
    }

    /// Build the catalogue described by `settings.locale` and `settings.messages`
    ///
    /// # Errors
    ///
    /// Returns `Config` if an override names an unknown message key.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut catalog = Catalog::new();
        catalog.locale = settings.locale.clone();
        for (locale, messages) in &settings.messages {
            for (key, text) in messages {
                let message_key =
                    MessageKey::from_key(key).ok_or_else(|| FieldkitError::Config {
                        message: format!("Unknown message key '{}' for locale '{}'", key, locale),
                    })?;
                catalog.add_override(locale.clone(), message_key, text.clone());
            }
        }
        Ok(catalog)
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Text for `key` in the active locale, falling back to English
    pub fn message(&self, key: MessageKey) -> &str {
        self.locale
            .as_ref()
            .and_then(|locale| self.overrides.get(locale))
            .and_then(|messages| messages.get(&key))
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }

    /// Text for `key` with `{name}` placeholders substituted
    pub fn format(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.message(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Install the process-wide catalogue
///
/// Returns `false` if a catalogue was already installed (or read, which
/// installs the English default).
pub fn install(catalog: Catalog) -> bool {
    CATALOG.set(catalog).is_ok()
}

/// The installed catalogue
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::new)
}

/// Text for `key` from the installed catalogue
pub fn message(key: MessageKey) -> &'static str {
    catalog().message(key)
}

/// Formatted text for `key` from the installed catalogue
pub fn format_message(key: MessageKey, args: &[(&str, &str)]) -> String {
    catalog().format(key, args)
}
