//! Settings for the admin helpers and record mixins
//!
//! Settings are plain serde data read from TOML. Every field has a default,
//! so an empty document is a valid configuration:
//!
//! ```toml
//! debug = false
//! recently_minutes = 30
//! max_num_relations = 3
//! sparkline_days = 14
//! admin_site = "admin"
//! locale = "fr"
//!
//! [messages.fr]
//! view_on_site_label = "Voir sur le site"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{FieldkitError, Result};
use crate::model::RecencyWindow;

/// Default window for `created_recently` / `modified_recently`
pub const DEFAULT_RECENTLY_MINUTES: i64 = 30;

/// Default number of related links shown by `RelationList`
pub const DEFAULT_MAX_NUM_RELATIONS: usize = 3;

/// Default number of days covered by the change-history sparkline
pub const DEFAULT_SPARKLINE_DAYS: u32 = 14;

/// Longest change history the sparkline will chart
pub const MAX_SPARKLINE_DAYS: u32 = 366;

/// Default URL namespace of the admin site
pub const DEFAULT_ADMIN_SITE: &str = "admin";

/// Environment variable overriding `debug`
pub const DEBUG_ENV_VAR: &str = "FIELDKIT_DEBUG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Development mode: unmounted relations fail loudly instead of rendering empty
    pub debug: bool,
    pub recently_minutes: i64,
    pub max_num_relations: usize,
    pub sparkline_days: u32,
    pub admin_site: String,
    /// Active locale for the message catalogue
    pub locale: Option<String>,
    /// Per-locale message overrides, keyed by message key
    pub messages: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            recently_minutes: DEFAULT_RECENTLY_MINUTES,
            max_num_relations: DEFAULT_MAX_NUM_RELATIONS,
            sparkline_days: DEFAULT_SPARKLINE_DAYS,
            admin_site: DEFAULT_ADMIN_SITE.to_string(),
            locale: None,
            messages: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML document and validate them
    ///
    /// # Errors
    ///
    /// Returns `Config` if the document is malformed, names unknown fields or
    /// holds out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file, then apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read and `Config` if it does not
    /// parse or validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_toml_str(&source)?;
        settings.with_env_overrides()
    }

    /// Apply `FIELDKIT_DEBUG` if it is set
    ///
    /// # Errors
    ///
    /// Returns `Config` if the variable holds something other than a boolean.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(raw) = std::env::var(DEBUG_ENV_VAR) {
            self.debug = parse_flag(&raw).ok_or_else(|| FieldkitError::Config {
                message: format!("{} must be a boolean, got '{}'", DEBUG_ENV_VAR, raw),
            })?;
        }
        Ok(self)
    }

    /// Recency window built from `recently_minutes`
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindow` when the configured minutes do not form a window.
    pub fn recency_window(&self) -> Result<RecencyWindow> {
        RecencyWindow::minutes(self.recently_minutes)
    }

    fn validate(&self) -> Result<()> {
        self.recency_window().map_err(|e| FieldkitError::Config {
            message: e.to_string(),
        })?;
        if self.sparkline_days == 0 {
            return Err(FieldkitError::Config {
                message: "sparkline_days must be at least 1".to_string(),
            });
        }
        if self.sparkline_days > MAX_SPARKLINE_DAYS {
            return Err(FieldkitError::Config {
                message: format!(
                    "sparkline_days must be at most {}, got {}",
                    MAX_SPARKLINE_DAYS, self.sparkline_days
                ),
            });
        }
        if self.admin_site.trim().is_empty() {
            return Err(FieldkitError::Config {
                message: "admin_site cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
