#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state: project switcher, save dialog, side menu selection.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub project_menu_open: bool,
    pub save_dialog_open: bool,
    pub side_menu_item: SideMenuItem,
}

impl UiState {
    pub fn toggle_project_menu(&mut self) {
        self.project_menu_open = !self.project_menu_open;
    }

    pub fn close_project_menu(&mut self) {
        self.project_menu_open = false;
    }

    pub fn open_save_dialog(&mut self) {
        self.project_menu_open = false;
        self.save_dialog_open = true;
    }

    pub fn close_save_dialog(&mut self) {
        self.save_dialog_open = false;
    }
}

/// Entries in the dashboard side menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SideMenuItem {
    #[default]
    AllProjects,
    SharedWithMe,
}

impl SideMenuItem {
    pub const ALL: [Self; 2] = [Self::AllProjects, Self::SharedWithMe];

    pub fn label(self) -> &'static str {
        match self {
            Self::AllProjects => "All Projects",
            Self::SharedWithMe => "Shared With Me",
        }
    }

    /// Heading shown above the project list for this selection.
    pub fn list_name(self) -> &'static str {
        match self {
            Self::AllProjects => "All Your Projects",
            Self::SharedWithMe => "Projects Shared With You",
        }
    }
}
