//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `projects`, `ui`, `upload`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod projects;
pub mod ui;
pub mod upload;
