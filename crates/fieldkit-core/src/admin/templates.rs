//! HTML fragments for the changelist helpers
//!
//! Templates are minijinja, compiled once per process. Their names end in
//! `.html`, so every interpolated value is HTML-escaped unless the template
//! marks it `|safe`; only URLs and markup built by this crate are marked.

use std::sync::OnceLock;

use minijinja::Environment;
use serde::Serialize;

use crate::errors::Result;

pub const VIEW_ON_SITE: &str = "view_on_site.html";
pub const RELATION_LIST: &str = "relation_list.html";
pub const SPARKLINE: &str = "sparkline.html";
const ESCAPE: &str = "escape.html";

const TEMPLATES: &[(&str, &str)] = &[
    (ESCAPE, "{{ text }}"),
    (
        VIEW_ON_SITE,
        r#"<a href="{{ url|safe }}" class="changelist-viewsitelink">{{ text }}</a>"#,
    ),
    (
        RELATION_LIST,
        concat!(
            r#"{% for link in links %}{% if not loop.first %}, {% endif %}"#,
            r#"<a href="{{ link.url|safe }}" class="changelist-relatedlink">{{ link.label }}</a>"#,
            r#"{% endfor %}"#,
            r#"{% if more %}{{ more.separator|safe }}"#,
            r#"<a href="{{ more.url|safe }}" class="changelist-morerelatedlink">{{ more.count }}&nbsp;more</a>"#,
            r#"{% endif %}"#,
        ),
    ),
    (
        SPARKLINE,
        concat!(
            r#"<div class="changelist-sparkline" style="{{ graph_css|safe }}">"#,
            r#"{% for bar in bars %}"#,
            r#"<div class="changelist-sparkline-bar" style="height:{{ bar.height }}em;{{ bar_css|safe }}"></div>"#,
            r#"{% endfor %}"#,
            r#"</div>"#,
        ),
    ),
];

static ENVIRONMENT: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> Result<&'static Environment<'static>> {
    if let Some(env) = ENVIRONMENT.get() {
        return Ok(env);
    }
    let mut env = Environment::new();
    for &(name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(ENVIRONMENT.get_or_init(|| env))
}

/// Render the named fragment with `context`
///
/// # Errors
///
/// Returns `Template` if the template is unknown or fails to render.
pub fn render<S: Serialize>(name: &str, context: S) -> Result<String> {
    let template = environment()?.get_template(name)?;
    Ok(template.render(context)?)
}

/// HTML-escape plain text for a cell that does not allow tags
///
/// # Errors
///
/// Returns `Template` if the environment fails to build.
pub fn escape(text: &str) -> Result<String> {
    render(ESCAPE, minijinja::context! { text })
}
