//! Local UI chrome state (mode, tabs, chat drawer).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the chat transcript
//! (`chat`) so closing the drawer or switching tabs never touches message
//! history.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Coarse operating mode selected in the header pill.
///
/// Read by the finance note and the assistant's canned replies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Focus,
    Review,
    Crisis,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::Review, Mode::Crisis];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::Review => "Review",
            Mode::Crisis => "Crisis",
        }
    }
}

/// Dashboard sections. Exactly one is rendered at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Agents,
    Finance,
    Decisions,
    Docs,
    Strategy,
}

impl Tab {
    /// All tabs in header order.
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Agents,
        Tab::Finance,
        Tab::Decisions,
        Tab::Docs,
        Tab::Strategy,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Agents => "Agents",
            Tab::Finance => "Finance",
            Tab::Decisions => "Decisions",
            Tab::Docs => "Docs",
            Tab::Strategy => "Strategy",
        }
    }
}

/// What a bottom-nav button does when tapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Tab(Tab),
    Chat,
}

/// A single entry in the mobile bottom navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

/// Mobile bottom navigation, left to right.
pub const BOTTOM_NAV: [NavItem; 5] = [
    NavItem { label: "Now", target: NavTarget::Tab(Tab::Overview) },
    NavItem { label: "Agents", target: NavTarget::Tab(Tab::Agents) },
    NavItem { label: "Cash", target: NavTarget::Tab(Tab::Finance) },
    NavItem { label: "Decide", target: NavTarget::Tab(Tab::Decisions) },
    NavItem { label: "Bobby", target: NavTarget::Chat },
];

/// UI state shared through a `RwSignal<UiState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub mode: Mode,
    pub tab: Tab,
    pub chat_open: bool,
}

impl UiState {
    /// Replace the current mode.
    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Replace the current tab.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Open the chat drawer. Opening an already-open drawer is a no-op.
    pub fn open_chat(&mut self) {
        self.chat_open = true;
    }

    pub fn close_chat(&mut self) {
        self.chat_open = false;
    }

    /// Apply a bottom-nav tap.
    pub fn navigate(&mut self, target: NavTarget) {
        match target {
            NavTarget::Tab(tab) => self.select_tab(tab),
            NavTarget::Chat => self.open_chat(),
        }
    }

    /// Whether a bottom-nav entry should render as active.
    #[must_use]
    pub fn is_nav_active(&self, target: NavTarget) -> bool {
        match target {
            NavTarget::Tab(tab) => self.tab == tab,
            NavTarget::Chat => self.chat_open,
        }
    }
}
