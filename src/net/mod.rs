//! Networking for the assistants collection endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `api` builds requests and interprets
//! responses, and `types` defines the wire schema and error type.

pub mod api;
pub mod transport;
pub mod types;
