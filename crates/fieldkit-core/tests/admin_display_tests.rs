//! Changelist display helper test suite
//!
//! Every list-display helper, rendered through the changelist.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::Duration;
use common::{categories, now, AdminFixture, Article, Page, Tag};
use fieldkit_core::admin::{
    render_changelist, ActionFlag, AdminContext, ListDisplay, LogEntrySparkline, RelationCount,
    RelationList, ViewOnSite,
};
use fieldkit_core::model::RecordId;
use fieldkit_core::{FieldkitError, Store};

fn ctx(fixture: &AdminFixture) -> AdminContext<'_> {
    AdminContext::new(
        &fixture.settings,
        &fixture.site,
        &fixture.content_types,
        &fixture.log_entries,
    )
    .at(now())
}

fn article_with_categories(count: u64) -> Article {
    let mut article = Article::new("news");
    article.id = Some(RecordId(1));
    article.categories = categories(count);
    article
}

#[test]
fn test_view_on_site_links_pages_with_urls() {
    let fixture = AdminFixture::new();
    let ctx = ctx(&fixture);
    let helper = ViewOnSite::default();

    let mut page = Page::new("About").with_slug("about");
    page.id = Some(RecordId(5));
    assert_eq!(
        helper.render(&ctx, &page).unwrap(),
        r#"<a href="../../r/1/5/" class="changelist-viewsitelink">View on site</a>"#
    );

    // without a canonical URL, or unsaved, the cell is empty
    let mut plain = Page::new("Plain");
    plain.id = Some(RecordId(6));
    assert_eq!(helper.render(&ctx, &plain).unwrap(), "");
    assert_eq!(helper.render(&ctx, &Page::new("Draft").with_slug("draft")).unwrap(), "");
}

#[test]
fn test_view_on_site_escapes_text() {
    let fixture = AdminFixture::new();
    let ctx = ctx(&fixture);
    let mut page = Page::new("About").with_slug("about");
    page.id = Some(RecordId(5));

    let html = ViewOnSite::new("<view & go>", "site").render(&ctx, &page).unwrap();
    assert!(html.contains(">&lt;view &amp; go&gt;</a>"));
}

#[test]
fn test_relation_count_pluralises() {
    let helper = RelationCount::new("categories", "categories");
    assert_eq!(helper.render(&article_with_categories(1)).unwrap(), "1 category");
    assert_eq!(helper.render(&article_with_categories(3)).unwrap(), "3 categories");
    assert_eq!(helper.render(&article_with_categories(0)).unwrap(), "0 categories");
}

#[test]
fn test_relation_count_unknown_accessor() {
    let err = RelationCount::new("authors", "authors")
        .render(&article_with_categories(1))
        .unwrap_err();
    assert_eq!(
        err,
        FieldkitError::UnknownRelation {
            model: "blog.Article".to_string(),
            accessor: "authors".to_string()
        }
    );
}

#[test]
fn test_relation_list_caps_links_and_adds_more_link() {
    // GIVEN an article with 11 categories and the default cap of 3
    let fixture = AdminFixture::new();
    let ctx = ctx(&fixture);
    let article = article_with_categories(11);

    // WHEN rendering the relation list
    let html = RelationList::new("categories", "categories")
        .render(&ctx, &article)
        .unwrap();

    // THEN three change links are shown
    assert_eq!(html.matches(r#"class="changelist-relatedlink""#).count(), 3);
    assert!(html.starts_with(
        r#"<a href="/admin/blog/category/1/" class="changelist-relatedlink">Category 1</a>, <a href="/admin/blog/category/2/""#
    ));
    // AND the remaining eight are summarised by one link to the filtered changelist
    assert!(html.ends_with(
        r#"&hellip;<a href="/admin/blog/category/?id__in=1,2,3,4,5,6,7,8,9,10,11" class="changelist-morerelatedlink">8&nbsp;more</a>"#
    ));
}

#[test]
fn test_relation_list_without_overflow_has_no_more_link() {
    let fixture = AdminFixture::new();
    let ctx = ctx(&fixture);

    let html = RelationList::new("categories", "categories")
        .render(&ctx, &article_with_categories(3))
        .unwrap();
    assert_eq!(html.matches("changelist-relatedlink").count(), 3);
    assert!(!html.contains("more"));

    let empty = RelationList::new("categories", "categories")
        .render(&ctx, &article_with_categories(0))
        .unwrap();
    assert_eq!(empty, "");
}

#[test]
fn test_relation_list_custom_cap_and_separator() {
    let fixture = AdminFixture::new();
    let ctx = ctx(&fixture);

    let html = RelationList::new("categories", "categories")
        .with_max_num(1)
        .with_more_separator(" | ")
        .render(&ctx, &article_with_categories(2))
        .unwrap();
    assert!(html.contains(r#"</a> | <a href="/admin/blog/category/?id__in=1,2""#));
    assert!(html.contains("1&nbsp;more"));
}

#[test]
fn test_relation_list_unmounted_degrades_outside_debug() {
    let fixture = AdminFixture::new();
    let ctx = ctx(&fixture);
    let mut article = article_with_categories(0);
    article.tags = vec![Tag {
        id: Some(RecordId(1)),
        name: "rust".to_string(),
    }];

    let html = RelationList::new("tags", "tags").render(&ctx, &article).unwrap();
    assert_eq!(html, "");
}

#[test]
fn test_relation_list_unmounted_fails_in_debug() {
    let mut fixture = AdminFixture::new();
    fixture.settings.debug = true;
    let ctx = ctx(&fixture);
    let mut article = article_with_categories(0);
    article.tags = vec![Tag {
        id: Some(RecordId(1)),
        name: "rust".to_string(),
    }];

    let err = RelationList::new("tags", "tags").render(&ctx, &article).unwrap_err();
    assert_eq!(
        err,
        FieldkitError::NotMounted {
            model: "blog.Tag".to_string(),
            site: "admin".to_string()
        }
    );
}

#[test]
fn test_sparkline_without_entries_is_placeholder() {
    let fixture = AdminFixture::new();
    let ctx = ctx(&fixture);
    let mut page = Page::new("quiet");
    page.id = Some(RecordId(1));

    assert_eq!(
        LogEntrySparkline::default().render(&ctx, &page).unwrap(),
        "no changes"
    );
}

#[test]
fn test_sparkline_normalises_to_busiest_day() {
    // GIVEN two changes today and one four days ago
    let mut fixture = AdminFixture::new();
    let mut store = Store::new();
    let pk = store.save_at(Page::new("busy"), now());
    let page = store.get(pk).unwrap();
    for (days_ago, flag) in [(0, ActionFlag::Addition), (0, ActionFlag::Change), (4, ActionFlag::Change)] {
        fixture
            .log_entries
            .log_action(
                &fixture.content_types,
                page,
                flag,
                "edited",
                now() - Duration::days(days_ago),
            )
            .unwrap();
    }
    // AND one change outside the window
    fixture
        .log_entries
        .log_action(&fixture.content_types, page, ActionFlag::Change, "", now() - Duration::days(30))
        .unwrap();

    let ctx = ctx(&fixture);
    let helper = LogEntrySparkline::default();

    // WHEN computing the bars
    let bars = helper.bars(&ctx, page).unwrap();

    // THEN there is one bar per day, oldest first, the busiest at full height
    assert_eq!(bars.len(), 14);
    assert_eq!(bars[13].day, now().date_naive());
    assert_eq!(bars[13].count, 2);
    assert!((bars[13].height - 1.0).abs() < f64::EPSILON);
    assert!((bars[9].height - 0.5).abs() < f64::EPSILON);
    assert_eq!(bars.iter().map(|bar| bar.count).sum::<usize>(), 3);

    // AND the rendered chart carries the heights
    let html = helper.render(&ctx, page).unwrap();
    assert!(html.starts_with(r#"<div class="changelist-sparkline""#));
    assert_eq!(html.matches("changelist-sparkline-bar").count(), 14);
    assert!(html.contains("height:1.00em;"));
    assert!(html.contains("height:0.50em;"));
}

#[test]
fn test_changelist_calls_every_column_per_record() {
    let fixture = AdminFixture::new();
    let ctx = ctx(&fixture);
    let articles = vec![article_with_categories(1), article_with_categories(2)];

    let columns: Vec<ListDisplay<Article>> = vec![
        ListDisplay::new("title", false, |_, article: &Article| Ok(article.title.clone())),
        RelationCount::new("categories", "category count").into(),
        RelationList::new("categories", "categories").into(),
        ViewOnSite::default().into(),
    ];

    let table = render_changelist(&ctx, &columns, &articles).unwrap();
    assert_eq!(
        table.headers,
        vec!["title", "category count", "categories", "View on site"]
    );
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1][1], "2 categories");
    assert!(table.rows[1][2].contains("Category 2"));
    // articles have no public URL
    assert_eq!(table.rows[0][3], "");
}
