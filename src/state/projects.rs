//! Project-list state for the dashboard and the top bar project switcher.
//!
//! DESIGN
//! ======
//! A failed refresh keeps the last good list on screen and only records the
//! error, so polling hiccups do not blank the dashboard.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::net::backend::BackendError;
use crate::net::types::ProjectListItem;

/// Shared project list state backed by `Backend::project_list`.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<ProjectListItem>,
    pub loading: bool,
    /// At least one fetch has completed successfully.
    pub loaded: bool,
    pub error: Option<String>,
}

impl ProjectsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: Result<Vec<ProjectListItem>, BackendError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.error = None;
            }
            Err(e) => {
                log::warn!("project list fetch failed: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<&ProjectListItem> {
        self.items.iter().find(|p| p.id == id)
    }
}
