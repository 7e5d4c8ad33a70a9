//! Shared, observable handle to one page's [`ViewState`].
//!
//! DESIGN
//! ======
//! Controllers and the presentation layer hold clones of the same store.
//! Writes go through `watch::Sender::send_modify`, which never holds the
//! borrow across an await, and wake every subscriber. Once the page
//! unmounts, writes are dropped so late request completions cannot mutate a
//! discarded view.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use super::view::ViewState;

#[derive(Clone)]
pub struct ViewStore {
    tx: Arc<watch::Sender<ViewState>>,
    mounted: Arc<AtomicBool>,
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStore {
    /// A mounted store holding the initial state (list `Loading`, dialog closed).
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewState::default());
        Self { tx: Arc::new(tx), mounted: Arc::new(AtomicBool::new(true)) }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn get(&self) -> ViewState {
        self.tx.borrow().clone()
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Apply `f` and notify subscribers. Returns `None` without running `f`
    /// once the store is unmounted.
    pub fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        if !self.is_mounted() {
            return None;
        }
        let mut out = None;
        self.tx.send_modify(|state| out = Some(f(state)));
        out
    }

    /// Like [`ViewStore::update`], but `f` reports whether it changed
    /// anything; subscribers are only woken when it returns `true`. The
    /// write lock is held for the whole of `f`, so a check and the write it
    /// guards cannot be interleaved by another writer.
    pub fn update_if(&self, f: impl FnOnce(&mut ViewState) -> bool) -> Option<bool> {
        if !self.is_mounted() {
            return None;
        }
        Some(self.tx.send_if_modified(f))
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}
