//! Create-assistant form: draft editing and submission.

#[cfg(test)]
#[path = "create_test.rs"]
mod create_test;

use std::sync::Arc;

use super::list_sync::ListSyncController;
use crate::net::api::{self, CREATE_FAILED_MESSAGE};
use crate::net::transport::Transport;
use crate::state::store::ViewStore;
use crate::state::view::ViewState;

pub struct CreateController {
    transport: Arc<dyn Transport>,
    store: ViewStore,
    list: Arc<ListSyncController>,
}

impl CreateController {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, store: ViewStore, list: Arc<ListSyncController>) -> Self {
        Self { transport, store, list }
    }

    /// Store the raw form input.
    pub fn update_draft(&self, value: &str) {
        self.store.update(|s| s.set_draft(value));
    }

    /// Submit `draft_name` (trimmed) as a new assistant.
    ///
    /// A blank name is ignored. On success the draft is cleared, the dialog
    /// closes, and the list is refreshed before this returns. On failure the
    /// dialog stays open with `create_error` set.
    pub async fn submit(&self, draft_name: &str) {
        let Some(name) = self.store.update(|s| s.begin_submit(draft_name)).flatten() else {
            return;
        };
        tracing::debug!(%name, "assistants: create dispatched");

        match api::create_assistant(self.transport.as_ref(), &name).await {
            Ok(created) => {
                tracing::info!(%name, id = ?created.as_ref().map(|a| a.id.as_str()), "assistants: created");
                if self.store.update(ViewState::finish_submit_ok).is_none() {
                    return;
                }
                self.list.refresh().await;
            }
            Err(e) => {
                tracing::warn!(%name, code = e.error_code(), error = %e, "assistants: create failed");
                let message = e.user_message(CREATE_FAILED_MESSAGE);
                self.store.update(|s| s.finish_submit_err(message));
            }
        }
    }
}
