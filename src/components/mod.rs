//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render studio chrome and the save dialog while reading/writing
//! shared state from Leptos context providers.

pub mod note;
pub mod project_card;
pub mod project_list;
pub mod save_dialog;
pub mod side_menu;
pub mod switch;
pub mod top_bar;
pub mod upload_settings;
