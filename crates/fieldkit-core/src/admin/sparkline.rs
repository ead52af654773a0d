//! Change-history sparkline
//!
//! One bar per calendar day (UTC) over the last `days` days, oldest first,
//! each bar's height being that day's admin-action count relative to the
//! busiest day.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::list_display::{AdminContext, ListDisplay};
use super::templates::{self, SPARKLINE};
use crate::config::MAX_SPARKLINE_DAYS;
use crate::errors::{FieldkitError, Result};
use crate::model::Record;
use crate::text::{message, MessageKey};

const BAR_CSS: &str =
    "width:0.3em;margin:0 0.05em;display:inline-block;background-color:#7CA0C7;vertical-align:baseline;";
const GRAPH_CSS: &str = "height:1em;border-bottom:1px dotted #5b80b2;overflow:hidden;";

#[derive(Debug, Clone, PartialEq)]
pub struct SparkBar {
    pub day: NaiveDate,
    pub count: usize,
    /// `count / max`, in `[0, 1]`
    pub height: f64,
}

#[derive(Serialize)]
struct BarContext {
    height: String,
}

#[derive(Serialize)]
struct SparklineContext {
    bars: Vec<BarContext>,
    bar_css: &'static str,
    graph_css: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntrySparkline {
    /// Falls back to `Settings::sparkline_days`
    pub days: Option<u32>,
    pub label: String,
}

impl LogEntrySparkline {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            days: None,
            label: label.into(),
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = Some(days);
        self
    }

    /// Per-day counts for `record`, oldest day first
    ///
    /// Returns no bars for an unsaved record.
    ///
    /// # Errors
    ///
    /// Returns `UnknownContentType` if `R` is not registered, and
    /// `InvalidWindow` if the day count exceeds `MAX_SPARKLINE_DAYS` or
    /// reaches before the earliest representable date.
    pub fn bars<R: Record>(&self, ctx: &AdminContext<'_>, record: &R) -> Result<Vec<SparkBar>> {
        let Some(pk) = record.pk() else {
            return Ok(Vec::new());
        };
        let content_type = ctx.content_types.id_for::<R>()?;
        let days = self.days.unwrap_or(ctx.settings.sparkline_days).max(1);
        if days > MAX_SPARKLINE_DAYS {
            return Err(FieldkitError::InvalidWindow {
                reason: format!(
                    "sparkline covers {} days, at most {} allowed",
                    days, MAX_SPARKLINE_DAYS
                ),
            });
        }
        let today = ctx.now.date_naive();
        let first_day = today
            .checked_sub_signed(Duration::days(i64::from(days) - 1))
            .ok_or_else(|| FieldkitError::InvalidWindow {
                reason: format!("sparkline of {} days starts before {}", days, NaiveDate::MIN),
            })?;

        let mut counts = vec![0usize; days as usize];
        let object_id = pk.to_string();
        for entry in ctx.log_entries.entries_for(content_type, &object_id) {
            let day = entry.action_time.date_naive();
            if entry.action_time > ctx.now || day < first_day {
                continue;
            }
            let offset = (day - first_day).num_days() as usize;
            if let Some(count) = counts.get_mut(offset) {
                *count += 1;
            }
        }

        let max = counts.iter().copied().max().unwrap_or(0);
        Ok(counts
            .into_iter()
            .enumerate()
            .map(|(offset, count)| SparkBar {
                day: first_day + Duration::days(offset as i64),
                count,
                height: if max == 0 {
                    0.0
                } else {
                    count as f64 / max as f64
                },
            })
            .collect())
    }

    /// # Errors
    ///
    /// Returns `UnknownContentType` if `R` is not registered, `InvalidWindow`
    /// for an oversized day count, or `Template` if rendering fails.
    pub fn render<R: Record>(&self, ctx: &AdminContext<'_>, record: &R) -> Result<String> {
        let bars = self.bars(ctx, record)?;
        if bars.iter().all(|bar| bar.count == 0) {
            return Ok(message(MessageKey::LogentryEmpty).to_string());
        }
        templates::render(
            SPARKLINE,
            SparklineContext {
                bars: bars
                    .iter()
                    .map(|bar| BarContext {
                        height: format!("{:.2}", bar.height),
                    })
                    .collect(),
                bar_css: BAR_CSS,
                graph_css: GRAPH_CSS,
            },
        )
    }
}

impl Default for LogEntrySparkline {
    fn default() -> Self {
        Self::new(message(MessageKey::LogentryLabel))
    }
}

impl<R: Record + 'static> From<LogEntrySparkline> for ListDisplay<R> {
    fn from(helper: LogEntrySparkline) -> Self {
        let label = helper.label.clone();
        ListDisplay::new(label, true, move |ctx, record: &R| helper.render(ctx, record))
    }
}
