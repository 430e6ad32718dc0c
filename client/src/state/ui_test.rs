use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_focus_overview_closed() {
    let state = UiState::default();
    assert_eq!(state.mode, Mode::Focus);
    assert_eq!(state.tab, Tab::Overview);
    assert!(!state.chat_open);
}

// =============================================================
// Mode
// =============================================================

#[test]
fn select_mode_leaves_exactly_one_active() {
    let mut state = UiState::default();
    for mode in Mode::ALL {
        state.select_mode(mode);
        let active = Mode::ALL.iter().filter(|m| **m == state.mode).count();
        assert_eq!(active, 1);
        assert_eq!(state.mode, mode);
    }
}

#[test]
fn select_mode_replaces_prior_selection() {
    let mut state = UiState::default();
    state.select_mode(Mode::Crisis);
    state.select_mode(Mode::Review);
    assert_eq!(state.mode, Mode::Review);
}

#[test]
fn mode_labels() {
    let labels: Vec<_> = Mode::ALL.iter().map(|m| m.label()).collect();
    assert_eq!(labels, ["Focus", "Review", "Crisis"]);
}

// =============================================================
// Tab
// =============================================================

#[test]
fn select_tab_leaves_exactly_one_active() {
    let mut state = UiState::default();
    for tab in Tab::ALL {
        state.select_tab(tab);
        let active = Tab::ALL.iter().filter(|t| **t == state.tab).count();
        assert_eq!(active, 1);
    }
}

#[test]
fn tab_labels_in_header_order() {
    let labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(
        labels,
        ["Overview", "Agents", "Finance", "Decisions", "Docs", "Strategy"]
    );
}

#[test]
fn select_tab_does_not_touch_mode_or_drawer() {
    let mut state = UiState::default();
    state.select_mode(Mode::Crisis);
    state.open_chat();
    state.select_tab(Tab::Docs);
    assert_eq!(state.mode, Mode::Crisis);
    assert!(state.chat_open);
}

// =============================================================
// Chat drawer flag
// =============================================================

#[test]
fn open_chat_twice_is_idempotent() {
    let mut state = UiState::default();
    state.open_chat();
    let once = state.clone();
    state.open_chat();
    assert_eq!(state, once);
    assert!(state.chat_open);
}

#[test]
fn close_chat_hides_drawer() {
    let mut state = UiState::default();
    state.open_chat();
    state.close_chat();
    assert!(!state.chat_open);
}

// =============================================================
// Bottom navigation
// =============================================================

#[test]
fn bottom_nav_labels_and_targets() {
    let labels: Vec<_> = BOTTOM_NAV.iter().map(|i| i.label).collect();
    assert_eq!(labels, ["Now", "Agents", "Cash", "Decide", "Bobby"]);
    assert_eq!(BOTTOM_NAV[2].target, NavTarget::Tab(Tab::Finance));
    assert_eq!(BOTTOM_NAV[4].target, NavTarget::Chat);
}

#[test]
fn navigate_to_tab_selects_it() {
    let mut state = UiState::default();
    state.navigate(NavTarget::Tab(Tab::Decisions));
    assert_eq!(state.tab, Tab::Decisions);
    assert!(!state.chat_open);
}

#[test]
fn navigate_to_chat_opens_drawer_and_keeps_tab() {
    let mut state = UiState::default();
    state.select_tab(Tab::Agents);
    state.navigate(NavTarget::Chat);
    assert!(state.chat_open);
    assert_eq!(state.tab, Tab::Agents);
}

#[test]
fn nav_active_follows_tab() {
    let mut state = UiState::default();
    state.select_tab(Tab::Finance);
    let active: Vec<_> = BOTTOM_NAV
        .iter()
        .filter(|i| state.is_nav_active(i.target))
        .map(|i| i.label)
        .collect();
    assert_eq!(active, ["Cash"]);
}

#[test]
fn nav_active_includes_bobby_when_drawer_open() {
    let mut state = UiState::default();
    state.open_chat();
    assert!(state.is_nav_active(NavTarget::Chat));
    assert!(state.is_nav_active(NavTarget::Tab(Tab::Overview)));
}

#[test]
fn nav_has_no_active_tab_for_docs() {
    let mut state = UiState::default();
    state.select_tab(Tab::Docs);
    assert!(BOTTOM_NAV.iter().all(|i| !state.is_nav_active(i.target)));
}
