//! Networking modules for the studio backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the collaborator trait the UI talks to, `api` holds the
//! HTTP endpoint helpers behind `HttpBackend`, and `types` defines the JSON
//! wire schema.

pub mod api;
pub mod backend;
pub mod types;
