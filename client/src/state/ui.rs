#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// App-wide UI toggles: the intro splash gate and the mobile nav menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Set once the intro splash has finished and its overlay unmounts.
    pub intro_complete: bool,
    pub nav_menu_open: bool,
}

impl UiState {
    pub fn complete_intro(&mut self) {
        self.intro_complete = true;
    }

    pub fn toggle_nav_menu(&mut self) {
        self.nav_menu_open = !self.nav_menu_open;
    }

    pub fn close_nav_menu(&mut self) {
        self.nav_menu_open = false;
    }
}
