//! Integration tests for the sample list view: query results, push merge,
//! selection, detail slot, and cache hydration working together.


use serde_json::json;
use viewsync_rust::{
    cache, Action, Dispatcher, OverflowPolicy, PushChannel, PushEvent, SortSpec, ViewConfig,
    ViewError, ViewState,
};

use documents::{query_result, sample, Sample};

fn dispatcher() -> Dispatcher<Sample> {
    Dispatcher::new(ViewConfig::unbounded())
}

#[test]
fn query_then_push_then_selection_lifecycle() {
    let mut view = dispatcher();

    view.request_query("", 1);
    assert!(view.snapshot().flags.loading);

    view.dispatch(Action::QuerySucceeded(query_result(
        "",
        1,
        vec![sample("s-1", "alpha", 10), sample("s-2", "beta", 20)],
    )));

    let state = view.snapshot();
    assert!(!state.flags.loading);
    assert_eq!(state.documents.len(), 2);
    assert_eq!(state.page.total_count, 2);

    // a sample finishes processing elsewhere and is pushed in
    view.dispatch(Action::Push(PushEvent::insert(
        "s-3",
        json!({"id": "s-3", "name": "gamma", "host": "human", "created_at": 30, "ready": false}),
        Some(SortSpec::ascending("created_at")),
    )));

    let state = view.snapshot();
    assert_eq!(
        state.documents.ids().collect::<Vec<_>>(),
        vec!["s-1", "s-2", "s-3"]
    );
    assert_eq!(state.page.total_count, 3);

    // it becomes ready
    view.dispatch(Action::Push(PushEvent::update("s-3", json!({"ready": true}))));
    assert!(view.snapshot().documents.get("s-3").unwrap().ready);

    // the user marks two samples for a bulk action
    view.select_document("s-1");
    view.select_document("s-3");
    assert_eq!(view.snapshot().selection.len(), 2);

    // one of them is removed server-side; the selection keeps its id
    view.dispatch(Action::Push(PushEvent::remove("s-1")));
    let state = view.snapshot();
    assert!(!state.documents.contains("s-1"));
    assert!(state.selection.contains("s-1"));
    assert_eq!(state.page.total_count, 2);
}

#[test]
fn stale_response_for_superseded_request_is_discarded() {
    let mut view = dispatcher();

    view.request_query("", 1);
    view.dispatch(Action::QuerySucceeded(query_result(
        "",
        1,
        vec![sample("s-1", "alpha", 10)],
    )));

    // the user types a filter before the next page of the old query lands
    view.request_query("beta", 1);

    let before = view.snapshot();
    view.dispatch(Action::QuerySucceeded(query_result(
        "",
        2,
        vec![sample("s-9", "stale", 90)],
    )));

    let after = view.snapshot();
    assert_eq!(*after, *before);
    assert!(!after.documents.contains("s-9"));
    assert!(after.flags.loading);

    // the matching response replaces the window
    view.dispatch(Action::QuerySucceeded(query_result(
        "beta",
        1,
        vec![sample("s-2", "beta", 20)],
    )));
    let landed = view.snapshot();
    assert_eq!(landed.documents.ids().collect::<Vec<_>>(), vec!["s-2"]);
    assert!(!landed.flags.loading);
}

#[test]
fn replaying_the_same_result_is_idempotent() {
    let mut view = dispatcher();
    view.request_query("", 1);

    let result = query_result("", 1, vec![sample("s-1", "alpha", 10), sample("s-2", "beta", 20)]);
    let once = view.dispatch(Action::QuerySucceeded(result.clone()));
    let twice = view.dispatch(Action::QuerySucceeded(result));

    assert_eq!(once.documents, twice.documents);
    assert_eq!(once.page, twice.page);
}

#[test]
fn remove_for_absent_id_leaves_snapshot_structurally_unchanged() {
    let mut view = dispatcher();
    view.request_query("", 1);
    view.dispatch(Action::QuerySucceeded(query_result(
        "",
        1,
        vec![sample("s-1", "alpha", 10)],
    )));

    let before = view.snapshot();
    let after = view.dispatch(Action::Push(PushEvent::remove("s-404")));
    assert_eq!(*after, *before);
}

#[test]
fn selection_toggle_and_clear_semantics() {
    let mut view = dispatcher();

    view.select_document("5");
    assert!(view.snapshot().selection.contains("5"));

    view.select_document("5");
    assert!(view.snapshot().selection.is_empty());

    view.select_document("5");
    view.select_document("7");
    view.clear_selection();
    assert!(view.snapshot().selection.is_empty());
}

#[test]
fn detail_slot_follows_the_open_record() {
    let mut view = dispatcher();
    view.dispatch(Action::QuerySucceeded(query_result(
        "",
        1,
        vec![sample("s-9", "x", 10)],
    )));

    view.open_detail("s-9");
    assert!(view.snapshot().detail.is_loading());

    view.dispatch(Action::DetailSucceeded(sample("s-9", "x", 10)));
    assert_eq!(view.snapshot().detail.document().unwrap().name, "x");

    // a rights change patches only the named field
    view.dispatch(Action::DetailPatched(json!({"host": "mouse"})));
    let detail = view.snapshot();
    let open = detail.detail.document().unwrap();
    assert_eq!(open.host, "mouse");
    assert_eq!(open.name, "x");

    // the record disappears while open: cleared, not an error state
    view.dispatch(Action::Push(PushEvent::remove("s-9")));
    let state = view.snapshot();
    assert!(state.detail.is_empty());
    assert!(!state.detail.is_not_found());
    assert!(state.documents.is_empty());
}

#[test]
fn detail_fetch_for_missing_record_is_a_distinct_state() {
    let mut view = dispatcher();

    view.open_detail("s-404");
    view.dispatch(Action::DetailNotFound("s-404".into()));

    let state = view.snapshot();
    assert!(state.detail.is_not_found());
    assert!(!state.detail.is_empty());
}

#[test]
fn channel_applies_pushes_in_publication_order() {
    let mut view = dispatcher();
    view.dispatch(Action::QuerySucceeded(query_result("", 1, vec![])));

    let channel = PushChannel::new();
    channel.publish_batch(vec![
        PushEvent::insert("s-1", json!({"id": "s-1", "name": "a", "host": "h", "created_at": 1, "ready": true}), None),
        PushEvent::remove("s-1"),
        PushEvent::insert("s-1", json!({"id": "s-1", "name": "b", "host": "h", "created_at": 2, "ready": true}), None),
        PushEvent::update("s-1", json!({"name": "c"})),
    ]);

    let applied = channel.drain_into(&mut view);
    assert_eq!(applied, 4);

    // arrival-order fold: the re-inserted document with the last update wins
    let state = view.snapshot();
    assert_eq!(state.documents.len(), 1);
    assert_eq!(state.documents.get("s-1").unwrap().name, "c");
    assert_eq!(state.page.total_count, 1);
}

#[test]
fn no_duplicate_ids_across_mixed_event_stream() {
    let mut view = dispatcher();
    view.dispatch(Action::QuerySucceeded(query_result("", 1, vec![])));

    let channel = PushChannel::new();
    for round in 0u64..3 {
        channel.publish(PushEvent::insert(
            "s-1",
            json!({"id": "s-1", "name": "a", "host": "h", "created_at": round, "ready": true}),
            Some(SortSpec::ascending("created_at")),
        ));
        channel.publish(PushEvent::update("s-1", json!({"ready": false})));
        channel.publish(PushEvent::insert(
            "s-2",
            json!({"id": "s-2", "name": "b", "host": "h", "created_at": round, "ready": true}),
            Some(SortSpec::ascending("created_at")),
        ));
        channel.publish(PushEvent::remove("s-2"));
    }
    channel.drain_into(&mut view);

    let state = view.snapshot();
    let mut seen = std::collections::HashSet::new();
    for id in state.documents.ids() {
        assert!(seen.insert(id.to_string()), "duplicate id {}", id);
    }
    assert_eq!(state.documents.len(), 1);
}

#[test]
fn bounded_page_evicts_on_insert() {
    let mut view: Dispatcher<Sample> = Dispatcher::new(ViewConfig::bounded(2));

    view.request_query("", 1);
    view.dispatch(Action::QuerySucceeded(query_result(
        "",
        1,
        vec![sample("s-2", "beta", 20), sample("s-3", "gamma", 30)],
    )));

    view.dispatch(Action::Push(PushEvent::insert(
        "s-1",
        json!({"id": "s-1", "name": "alpha", "host": "h", "created_at": 10, "ready": true}),
        Some(SortSpec::ascending("created_at")),
    )));

    let state = view.snapshot();
    assert_eq!(state.documents.ids().collect::<Vec<_>>(), vec!["s-1", "s-2"]);
    // the collection grew even though the window stayed bounded
    assert_eq!(state.page.total_count, 3);
}

#[test]
fn grow_policy_lets_the_page_exceed_the_bound() {
    let config = ViewConfig::bounded(2).with_overflow(OverflowPolicy::Grow);
    let mut view: Dispatcher<Sample> = Dispatcher::new(config);

    view.request_query("", 1);
    view.dispatch(Action::QuerySucceeded(query_result(
        "",
        1,
        vec![sample("s-2", "beta", 20), sample("s-3", "gamma", 30)],
    )));
    view.dispatch(Action::Push(PushEvent::insert(
        "s-1",
        json!({"id": "s-1", "name": "alpha", "host": "h", "created_at": 10, "ready": true}),
        Some(SortSpec::ascending("created_at")),
    )));

    assert_eq!(view.snapshot().documents.len(), 3);
}

#[test]
fn transport_failure_leaves_documents_intact() {
    let mut view = dispatcher();
    view.request_query("", 1);
    view.dispatch(Action::QuerySucceeded(query_result(
        "",
        1,
        vec![sample("s-1", "alpha", 10)],
    )));

    view.request_query("", 2);
    view.dispatch(Action::QueryFailed(ViewError::Transport {
        message: "gateway timeout".into(),
    }));

    let state = view.snapshot();
    assert_eq!(state.documents.len(), 1);
    assert!(!state.flags.loading);
    assert!(state.flags.error.as_ref().unwrap().is_retryable());

    // dismissing the banner keeps everything else
    view.dispatch(Action::ErrorDismissed);
    let state = view.snapshot();
    assert!(state.flags.error.is_none());
    assert_eq!(state.documents.len(), 1);
}

#[test]
fn duplicate_name_validation_keeps_form_state_recoverable() {
    let mut view = dispatcher();

    view.dispatch(Action::ValidationFailed {
        field: "name".into(),
        message: "Sample name is already in use".into(),
    });

    let state = view.snapshot();
    assert_eq!(
        state.flags.field_errors.get("name").map(String::as_str),
        Some("Sample name is already in use")
    );
    // not a banner error; the user fixes the field and resubmits
    assert!(state.flags.error.is_none());
}

#[test]
fn hydrated_cache_resumes_the_view() {
    let mut view = dispatcher();
    view.request_query("phage", 1);
    view.dispatch(Action::QuerySucceeded(query_result(
        "phage",
        1,
        vec![sample("s-1", "alpha", 10), sample("s-2", "beta", 20)],
    )));
    view.select_document("s-2");

    let text = cache::encode_base64(&view.snapshot()).unwrap();

    // a remounted view hydrates instantly, then revalidates
    let hydrated: ViewState<Sample> = cache::decode_base64(&text).unwrap();
    assert_eq!(hydrated.documents.len(), 2);
    assert_eq!(hydrated.page.term, "phage");
    assert!(hydrated.selection.contains("s-2"));
    assert!(!hydrated.flags.loading);

    let revalidating = hydrated.apply(
        Action::QueryRequested {
            term: "phage".into(),
            page: 1,
        },
        &ViewConfig::unbounded(),
    );
    assert!(revalidating.flags.loading);
    assert_eq!(revalidating.documents.len(), 2);
}

#[test]
fn unmount_resets_everything() {
    let mut view = dispatcher();
    view.request_query("phage", 2);
    view.dispatch(Action::QuerySucceeded(query_result(
        "phage",
        2,
        vec![sample("s-1", "alpha", 10)],
    )));
    view.select_document("s-1");
    view.open_detail("s-1");

    let state = view.reset();
    assert!(state.documents.is_empty());
    assert_eq!(state.page.page, 1);
    assert_eq!(state.page.term, "");
    assert!(state.selection.is_empty());
    assert!(state.detail.is_empty());
}
