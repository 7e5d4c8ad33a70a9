//! Controllers that move the view state in response to user actions and
//! request completions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ListSyncController` owns list fetching; `CreateController` owns the
//! create dialog and hands off to the list controller after a successful
//! create. Both share one `ViewStore`.

pub mod create;
pub mod list_sync;

pub use create::CreateController;
pub use list_sync::ListSyncController;
