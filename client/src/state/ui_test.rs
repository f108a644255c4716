use super::*;

#[test]
fn ui_state_default_shows_intro_with_menu_closed() {
    let state = UiState::default();
    assert!(!state.intro_complete);
    assert!(!state.nav_menu_open);
}

#[test]
fn complete_intro_is_idempotent() {
    let mut state = UiState::default();
    state.complete_intro();
    state.complete_intro();
    assert!(state.intro_complete);
}

#[test]
fn toggle_nav_menu_flips_and_close_resets() {
    let mut state = UiState::default();
    state.toggle_nav_menu();
    assert!(state.nav_menu_open);
    state.toggle_nav_menu();
    assert!(!state.nav_menu_open);
    state.toggle_nav_menu();
    state.close_nav_menu();
    assert!(!state.nav_menu_open);
}
