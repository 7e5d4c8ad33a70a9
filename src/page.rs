//! The assistants page: one mounted instance of the list and create flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! A renderer mounts the page, subscribes to its store, and forwards user
//! actions to the methods below. Dropping the page unmounts the store, so
//! requests still in flight complete without touching the discarded view.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::sync::Arc;

use tokio::sync::watch;

use crate::controller::{CreateController, ListSyncController};
use crate::net::transport::Transport;
use crate::state::store::ViewStore;
use crate::state::view::{ListPhase, ViewState};

pub struct AssistantsPage {
    store: ViewStore,
    list: Arc<ListSyncController>,
    create: CreateController,
}

impl AssistantsPage {
    /// Mount the page and start the initial fetch on the current tokio runtime.
    ///
    /// The store starts in `Loading`; the fetch completes in the background.
    #[must_use]
    pub fn mount(transport: Arc<dyn Transport>) -> Self {
        let store = ViewStore::new();
        let list = Arc::new(ListSyncController::new(Arc::clone(&transport), store.clone()));
        let create = CreateController::new(transport, store.clone(), Arc::clone(&list));

        let initial = Arc::clone(&list);
        tokio::spawn(async move { initial.refresh().await });

        Self { store, list, create }
    }

    #[must_use]
    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.store.get()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.store.subscribe()
    }

    /// Wait until the list is no longer loading and no create is in flight.
    pub async fn settled(&self) -> ViewState {
        let mut rx = self.store.subscribe();
        match rx.wait_for(|s| s.phase != ListPhase::Loading && !s.is_submitting()).await {
            Ok(state) => (*state).clone(),
            Err(_) => self.store.get(),
        }
    }

    pub async fn refresh(&self) {
        self.list.refresh().await;
    }

    pub fn open_dialog(&self) {
        self.store.update(ViewState::open_dialog);
    }

    /// User dismissal (cancel button or overlay). Returns `false` if refused
    /// because a submission is in flight.
    pub fn cancel_dialog(&self) -> bool {
        self.store.update(ViewState::close_dialog).unwrap_or(false)
    }

    pub fn update_draft(&self, value: &str) {
        self.create.update_draft(value);
    }

    /// Submit the current draft.
    pub async fn submit(&self) {
        let draft = self.store.with(|s| s.draft_name.clone());
        self.create.submit(&draft).await;
    }
}

impl Drop for AssistantsPage {
    fn drop(&mut self) {
        self.store.unmount();
    }
}
