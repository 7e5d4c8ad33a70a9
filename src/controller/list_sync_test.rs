use super::*;
use crate::net::transport::Method;
use crate::state::view::ListPhase;
use crate::test_helpers::{MockTransport, assistant_json, ids, list_body};
use serde_json::json;

fn controller(transport: &Arc<MockTransport>) -> (ListSyncController, ViewStore) {
    let store = ViewStore::new();
    let list = ListSyncController::new(transport.clone(), store.clone());
    (list, store)
}

// =========================================================================
// success
// =========================================================================

#[tokio::test]
async fn refresh_applies_list_in_server_order() {
    let transport = MockTransport::new();
    transport.push_json(200, list_body(&[assistant_json("b", "Bravo"), assistant_json("a", "Alpha")]));
    let (list, store) = controller(&transport);

    list.refresh().await;

    let state = store.get();
    assert_eq!(state.phase, ListPhase::Ready);
    assert_eq!(ids(&state.assistants), ["b", "a"]);
    assert!(state.list_error().is_none());

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path, "/api/assistants");
}

#[tokio::test]
async fn refresh_accepts_empty_and_missing_collections() {
    let transport = MockTransport::new();
    transport.push_json(200, list_body(&[]));
    transport.push_json(200, json!({}));
    let (list, store) = controller(&transport);

    list.refresh().await;
    assert_eq!(store.get().phase, ListPhase::Ready);
    assert!(store.get().assistants.is_empty());

    list.refresh().await;
    assert_eq!(store.get().phase, ListPhase::Ready);
    assert!(store.get().assistants.is_empty());
}

#[tokio::test]
async fn refresh_sets_loading_before_suspending() {
    let transport = MockTransport::new();
    transport.push_json(200, list_body(&[]));
    let gate = transport.push_gated_json(200, list_body(&[assistant_json("a", "Alpha")]));
    let (list, store) = controller(&transport);
    list.refresh().await;
    assert_eq!(store.get().phase, ListPhase::Ready);

    let check = async {
        tokio::task::yield_now().await;
        assert_eq!(store.get().phase, ListPhase::Loading);
        gate.send(()).unwrap();
    };
    tokio::join!(list.refresh(), check);

    assert_eq!(ids(&store.get().assistants), ["a"]);
}

// =========================================================================
// failure
// =========================================================================

#[tokio::test]
async fn non_success_status_fails_with_generic_message() {
    let transport = MockTransport::new();
    transport.push_raw(500, "Internal Server Error");
    let (list, store) = controller(&transport);

    list.refresh().await;

    let state = store.get();
    assert_eq!(state.list_error(), Some(FETCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn non_success_status_uses_server_error_message() {
    let transport = MockTransport::new();
    transport.push_json(503, json!({ "error": "maintenance window" }));
    let (list, store) = controller(&transport);

    list.refresh().await;

    assert_eq!(store.get().list_error(), Some("maintenance window"));
}

#[tokio::test]
async fn network_failure_fails_with_generic_message() {
    let transport = MockTransport::new();
    transport.push_network_error("connection refused");
    let (list, store) = controller(&transport);

    list.refresh().await;

    let state = store.get();
    assert!(matches!(state.phase, ListPhase::Failed { .. }));
    assert_eq!(state.list_error(), Some(FETCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn malformed_body_fails() {
    let transport = MockTransport::new();
    transport.push_raw(200, "<html>oops</html>");
    let (list, store) = controller(&transport);

    list.refresh().await;

    assert_eq!(store.get().list_error(), Some(FETCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn failure_keeps_previous_rows_but_not_as_current() {
    let transport = MockTransport::new();
    transport.push_json(200, list_body(&[assistant_json("a", "Alpha")]));
    transport.push_raw(500, "");
    let (list, store) = controller(&transport);

    list.refresh().await;
    list.refresh().await;

    let state = store.get();
    assert!(state.list_error().is_some());
    assert!(state.current_assistants().is_none());
    assert_eq!(ids(&state.assistants), ["a"]);
}

#[tokio::test]
async fn failed_list_recovers_on_next_refresh() {
    let transport = MockTransport::new();
    transport.push_network_error("timeout");
    transport.push_json(200, list_body(&[assistant_json("a", "Alpha")]));
    let (list, store) = controller(&transport);

    list.refresh().await;
    assert!(store.get().list_error().is_some());
    list.refresh().await;

    let state = store.get();
    assert_eq!(state.phase, ListPhase::Ready);
    assert!(state.list_error().is_none());
}

// =========================================================================
// ordering
// =========================================================================

#[tokio::test]
async fn later_refresh_wins_when_earlier_resolves_last() {
    let transport = MockTransport::new();
    let slow = transport.push_gated_json(200, list_body(&[assistant_json("old", "Old")]));
    let fast = transport.push_gated_json(200, list_body(&[assistant_json("new", "New")]));
    let (list, store) = controller(&transport);

    let release = async {
        fast.send(()).unwrap();
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert_eq!(ids(&store.get().assistants), ["new"]);
        slow.send(()).unwrap();
    };
    tokio::join!(list.refresh(), list.refresh(), release);

    let state = store.get();
    assert_eq!(state.phase, ListPhase::Ready);
    assert_eq!(ids(&state.assistants), ["new"]);
    assert_eq!(list.latest_seq(), 2);
}

#[tokio::test]
async fn superseded_result_does_not_end_loading() {
    let transport = MockTransport::new();
    let first = transport.push_gated_json(200, list_body(&[assistant_json("old", "Old")]));
    let second = transport.push_gated_json(500, json!({ "error": "late failure" }));
    let (list, store) = controller(&transport);

    let release = async {
        first.send(()).unwrap();
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        let state = store.get();
        assert_eq!(state.phase, ListPhase::Loading);
        assert!(state.assistants.is_empty());
        second.send(()).unwrap();
    };
    tokio::join!(list.refresh(), list.refresh(), release);

    assert_eq!(store.get().list_error(), Some("late failure"));
}

// =========================================================================
// unmount
// =========================================================================

#[tokio::test]
async fn completion_after_unmount_is_ignored() {
    let transport = MockTransport::new();
    let gate = transport.push_gated_json(200, list_body(&[assistant_json("a", "Alpha")]));
    let (list, store) = controller(&transport);

    let unmount = async {
        tokio::task::yield_now().await;
        store.unmount();
        gate.send(()).unwrap();
    };
    tokio::join!(list.refresh(), unmount);

    let state = store.get();
    assert_eq!(state.phase, ListPhase::Loading);
    assert!(state.assistants.is_empty());
}

#[tokio::test]
async fn refresh_after_unmount_sends_nothing() {
    let transport = MockTransport::new();
    let (list, store) = controller(&transport);
    store.unmount();

    list.refresh().await;

    assert!(transport.requests().is_empty());
    assert_eq!(list.latest_seq(), 0);
}

// =========================================================================
// worker threads
// =========================================================================

async fn wait_for_requests(transport: &MockTransport, n: usize) {
    while transport.requests().len() < n {
        tokio::time::sleep(std::time::Duration::from_millis(1)).await;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn later_refresh_wins_across_worker_threads() {
    let transport = MockTransport::new();
    let slow = transport.push_gated_json(200, list_body(&[assistant_json("old", "Old")]));
    transport.push_json(200, list_body(&[assistant_json("new", "New")]));
    let store = ViewStore::new();
    let list = Arc::new(ListSyncController::new(transport.clone(), store.clone()));

    let first = tokio::spawn({
        let list = Arc::clone(&list);
        async move { list.refresh().await }
    });
    wait_for_requests(&transport, 1).await;
    let second = tokio::spawn({
        let list = Arc::clone(&list);
        async move { list.refresh().await }
    });
    second.await.unwrap();
    assert_eq!(ids(&store.get().assistants), ["new"]);

    slow.send(()).unwrap();
    first.await.unwrap();

    let state = store.get();
    assert_eq!(state.phase, ListPhase::Ready);
    assert_eq!(ids(&state.assistants), ["new"]);
    assert_eq!(list.latest_seq(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_refreshes_always_settle_ready() {
    const REFRESHES: u64 = 32;
    let transport = MockTransport::new();
    for i in 0..REFRESHES {
        transport.push_json(200, list_body(&[assistant_json(&i.to_string(), "Any")]));
    }
    let store = ViewStore::new();
    let list = Arc::new(ListSyncController::new(transport.clone(), store.clone()));

    let handles: Vec<_> = (0..REFRESHES)
        .map(|_| {
            let list = Arc::clone(&list);
            tokio::spawn(async move { list.refresh().await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let state = store.get();
    assert_eq!(list.latest_seq(), REFRESHES);
    assert_eq!(state.phase, ListPhase::Ready);
    assert_eq!(state.assistants.len(), 1);
}
