//! Client-side state for the assistants page.
//!
//! DESIGN
//! ======
//! `view` holds the plain state model and its transitions; `store` shares one
//! instance between the controllers and whatever renders it.

pub mod store;
pub mod view;
