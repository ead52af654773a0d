//! Changelist columns
//!
//! A [`ListDisplay`] pairs a formatting function with its column heading. The
//! helpers in this module tree convert into one with `.into()`; plain closures
//! work through [`ListDisplay::new`].

use chrono::{DateTime, Utc};

use super::log_entry::LogEntryStore;
use super::site::AdminSite;
use super::templates;
use crate::config::Settings;
use crate::errors::Result;
use crate::model::ContentTypeRegistry;

/// Everything a column may read while formatting one row
#[derive(Debug, Clone, Copy)]
pub struct AdminContext<'a> {
    pub settings: &'a Settings,
    pub site: &'a AdminSite,
    pub content_types: &'a ContentTypeRegistry,
    pub log_entries: &'a LogEntryStore,
    /// Request time; all date arithmetic in one render uses this instant
    pub now: DateTime<Utc>,
}

impl<'a> AdminContext<'a> {
    pub fn new(
        settings: &'a Settings,
        site: &'a AdminSite,
        content_types: &'a ContentTypeRegistry,
        log_entries: &'a LogEntryStore,
    ) -> Self {
        Self {
            settings,
            site,
            content_types,
            log_entries,
            now: Utc::now(),
        }
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

type Formatter<R> = Box<dyn Fn(&AdminContext<'_>, &R) -> Result<String>>;

/// One changelist column
pub struct ListDisplay<R> {
    pub short_description: String,
    /// Whether the output is trusted HTML; plain columns are escaped
    pub allow_tags: bool,
    formatter: Formatter<R>,
}

impl<R> ListDisplay<R> {
    pub fn new<F>(short_description: impl Into<String>, allow_tags: bool, formatter: F) -> Self
    where
        F: Fn(&AdminContext<'_>, &R) -> Result<String> + 'static,
    {
        Self {
            short_description: short_description.into(),
            allow_tags,
            formatter: Box::new(formatter),
        }
    }

    /// Format one record
    ///
    /// # Errors
    ///
    /// Propagates the formatter's error.
    pub fn call(&self, ctx: &AdminContext<'_>, record: &R) -> Result<String> {
        (self.formatter)(ctx, record)
    }

    /// Format one record as cell HTML, escaping columns that do not allow tags
    ///
    /// # Errors
    ///
    /// Propagates the formatter's error, or `Template` if escaping fails.
    pub fn cell(&self, ctx: &AdminContext<'_>, record: &R) -> Result<String> {
        let value = self.call(ctx, record)?;
        if self.allow_tags {
            Ok(value)
        } else {
            templates::escape(&value)
        }
    }
}

impl<R> std::fmt::Debug for ListDisplay<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListDisplay")
            .field("short_description", &self.short_description)
            .field("allow_tags", &self.allow_tags)
            .finish_non_exhaustive()
    }
}

/// Rendered changelist table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelist {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Call every column once per record
///
/// # Errors
///
/// Stops at the first column error.
pub fn render_changelist<'r, R: 'r>(
    ctx: &AdminContext<'_>,
    columns: &[ListDisplay<R>],
    records: impl IntoIterator<Item = &'r R>,
) -> Result<Changelist> {
    let headers = columns
        .iter()
        .map(|column| column.short_description.clone())
        .collect();
    let rows = records
        .into_iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| column.cell(ctx, record))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(
        columns = columns.len(),
        rows = rows.len(),
        "changelist rendered"
    );
    Ok(Changelist { headers, rows })
}
