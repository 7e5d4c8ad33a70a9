//! # assistants-console
//!
//! Client-side controller for an "assistants" collection: keeps a list in
//! sync with `GET /api/assistants` and creates records through a modal form
//! backed by `POST /api/assistants`.
//!
//! Rendering is left to the caller. A renderer mounts an [`AssistantsPage`],
//! observes its [`state::store::ViewStore`], and forwards user actions.

pub mod config;
pub mod controller;
pub mod net;
pub mod page;
pub mod state;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::ClientConfig;
pub use net::transport::{HttpTransport, Transport};
pub use net::types::{ApiError, Assistant};
pub use page::AssistantsPage;
