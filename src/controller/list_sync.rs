//! Keeps the view's assistant list in sync with the collection endpoint.
//!
//! DESIGN
//! ======
//! Every refresh takes the next value of a monotonic counter before it
//! suspends. When the request completes, its result is applied only if no
//! later refresh has started since; otherwise it is dropped. Completion order
//! of overlapping requests therefore never decides what the view shows.

#[cfg(test)]
#[path = "list_sync_test.rs"]
mod list_sync_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::net::api::{self, FETCH_FAILED_MESSAGE};
use crate::net::transport::Transport;
use crate::state::store::ViewStore;
use crate::state::view::ViewState;

pub struct ListSyncController {
    transport: Arc<dyn Transport>,
    store: ViewStore,
    started: AtomicU64,
}

impl ListSyncController {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, store: ViewStore) -> Self {
        Self { transport, store, started: AtomicU64::new(0) }
    }

    /// Sequence number of the most recently started refresh (0 before any).
    #[must_use]
    pub fn latest_seq(&self) -> u64 {
        self.started.load(Ordering::SeqCst)
    }

    /// Re-fetch the collection. Failures end up in the list phase, never as
    /// an error to the caller.
    pub async fn refresh(&self) {
        let begin = |s: &mut ViewState| {
            s.begin_refresh();
            self.started.fetch_add(1, Ordering::SeqCst) + 1
        };
        let Some(seq) = self.store.update(begin) else {
            return;
        };
        tracing::debug!(seq, "assistants: refresh dispatched");

        let result = api::fetch_assistants(self.transport.as_ref()).await.map_err(|e| {
            tracing::warn!(seq, code = e.error_code(), error = %e, "assistants: refresh failed");
            e.user_message(FETCH_FAILED_MESSAGE)
        });
        let count = result.as_ref().map_or(0, Vec::len);

        // The sequence check and the write share one store update, so a newer
        // refresh cannot start between them.
        let applied = self.store.update_if(|s| {
            if self.latest_seq() != seq {
                return false;
            }
            match result {
                Ok(assistants) => s.apply_list(assistants),
                Err(message) => s.fail_list(message),
            }
            true
        });
        match applied {
            Some(true) => tracing::debug!(seq, count, "assistants: list updated"),
            Some(false) => tracing::debug!(seq, latest = self.latest_seq(), "assistants: dropping superseded refresh result"),
            None => {}
        }
    }
}
