//! # Application State
//!
//! The host around the navbar. It plays the parent component: it owns the
//! active tab and hands it back to the navbar as a prop.
//!
//! ```text
//! App
//! ├── active_tab: Tab          // source of truth for the selected tab
//! ├── navbar: Navbar           // tab bar + FAB menu state machine
//! ├── status_message: String   // status bar text
//! └── tab_presses: usize       // onTabPress invocations this session
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::navbar::Navbar;
use crate::core::quick_action::{QuickAction, default_actions};
use crate::core::tab::Tab;

pub struct App {
    pub active_tab: Tab,
    pub navbar: Navbar,
    pub status_message: String,
    pub tab_presses: usize,
}

impl App {
    pub fn new(active_tab: Tab, navbar: Navbar) -> Self {
        Self {
            active_tab,
            navbar,
            status_message: String::from("Welcome to Tabdock!"),
            tab_presses: 0,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::with_actions(config, default_actions())
    }

    pub fn with_actions(config: &ResolvedConfig, actions: Vec<QuickAction>) -> Self {
        let navbar = Navbar::new(config.initial_tab, actions, &config.navbar);
        Self::new(config.initial_tab, navbar)
    }

    /// Whether the host loop should redraw at full frame rate.
    pub fn is_animating(&self) -> bool {
        self.navbar.is_animating()
    }
}
