//! Logging facility test suite

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{categories, now, AdminFixture, Article, Page, Tag};
use fieldkit_core::admin::{AdminContext, RelationList};
use fieldkit_core::errors::{FieldkitError, FkErrorKind};
use fieldkit_core::logging_facility::test_capture::init_test_capture;
use fieldkit_core::model::RecordId;
use fieldkit_core::{log_op_end, log_op_error, log_op_start, Store};
use fieldkit_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ACCESSOR, FIELD_DELETED_STATE,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_MODEL, FIELD_PK, FIELD_SITE,
};
use tracing::Level;

#[test]
fn test_log_op_macros_emit_canonical_events() {
    let capture = init_test_capture();
    let op_name = "test_log_op_macros_unique_1";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 42);

    capture.assert_event_exists(op_name, EVENT_START);
    let end = capture
        .events_for_op(op_name)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .expect("end event");
    assert_eq!(end.fields.get(FIELD_DURATION_MS), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_2";

    let err = FieldkitError::NotMounted {
        model: "blog.Tag".to_string(),
        site: "admin".to_string(),
    };
    assert_eq!(err.kind(), FkErrorKind::NotMounted);
    log_op_error!(op_name, err, duration_ms = 3);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::ERROR);
    assert_eq!(event.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(event.fields.get(FIELD_ERR_CODE), Some(&"ERR_NOT_MOUNTED".to_string()));
    assert_eq!(event.fields.get(FIELD_ERR_KIND), Some(&"NotMounted".to_string()));
}

#[test]
fn test_store_soft_delete_logs_boundaries() {
    let capture = init_test_capture();
    let mut store = Store::new();
    let pk = store.save_at(Page::new("logged"), now());

    store.soft_delete_at(pk, now()).unwrap();

    let pk_field = pk.0.to_string();
    let events: Vec<_> = capture
        .events_for_op("soft_delete")
        .into_iter()
        .filter(|e| e.fields.get(FIELD_MODEL).map(String::as_str) == Some("pages.Page"))
        .collect();
    assert!(events
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_START) && e.fields.get(FIELD_PK) == Some(&pk_field)));
    assert!(events.iter().any(|e| {
        e.event.as_deref() == Some(EVENT_END)
            && e.fields.get(FIELD_DELETED_STATE).map(String::as_str) == Some("Deleted")
    }));
}

#[test]
fn test_store_restore_of_missing_record_logs_error() {
    let capture = init_test_capture();
    let mut store: Store<Page> = Store::new();
    let missing = RecordId(424_242);

    assert!(store.restore(missing).is_err());

    let count = capture.count_events(|e| {
        e.op.as_deref() == Some("restore")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get(FIELD_ERR_CODE).map(String::as_str) == Some("ERR_NOT_FOUND")
    });
    assert!(count >= 1);
}

#[test]
fn test_unmounted_relation_is_debug_logged() {
    let capture = init_test_capture();
    let fixture = AdminFixture::new();
    let ctx = AdminContext::new(
        &fixture.settings,
        &fixture.site,
        &fixture.content_types,
        &fixture.log_entries,
    );

    let mut article = Article::new("tagged");
    article.id = Some(RecordId(1));
    article.categories = categories(1);
    article.tags = vec![Tag {
        id: Some(RecordId(1)),
        name: "rust".to_string(),
    }];
    let accessor = "tags";

    assert_eq!(
        RelationList::new(accessor, "tags")
            .render(&ctx, &article)
            .unwrap(),
        ""
    );

    let logged = capture.events().into_iter().any(|e| {
        e.level == Level::DEBUG
            && e.message() == Some("Unable to find Tag mounted on the admin site \"admin\"")
            && e.fields.get(FIELD_ACCESSOR).map(String::as_str) == Some(accessor)
            && e.fields.get(FIELD_SITE).map(String::as_str) == Some("admin")
    });
    assert!(logged);
}
