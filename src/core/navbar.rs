//! # Navbar
//!
//! The whole bottom-bar component in one headless value: four tabs, the FAB
//! and its radial menu. The view reads frames off it; the host feeds it
//! presses and ticks, and receives [`NavbarEvent`]s back.
//!
//! ```text
//!   props:   set_active_tab(tab)
//!   input:   handle(NavbarInput, now)  →  Vec<NavbarEvent>
//!   time:    tick(now)                 →  Vec<NavbarEvent>
//! ```

use std::time::Duration;

use crate::core::geometry::{ArcLayout, ButtonFrame};
use crate::core::menu::{MenuController, MenuEvent, MenuInput, MenuTimings, TapPolicy};
use crate::core::quick_action::QuickAction;
use crate::core::tab::Tab;
use crate::core::tab_bar::{EmphasisTimings, TabBarState};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavbarSettings {
    pub menu: MenuTimings,
    pub emphasis: EmphasisTimings,
    pub layout: ArcLayout,
    pub tap_policy: TapPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarInput {
    PressTab(Tab),
    PressFab,
    PressOverlay,
    PressAction(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarEvent {
    /// The parent's `onTabPress`. Emitted for every press, active tab included.
    TabPressed(Tab),
    Menu(MenuEvent),
}

pub struct Navbar {
    tab_bar: TabBarState,
    menu: MenuController,
}

impl Navbar {
    pub fn new(active_tab: Tab, actions: Vec<QuickAction>, settings: &NavbarSettings) -> Self {
        Self {
            tab_bar: TabBarState::new(active_tab, settings.emphasis),
            menu: MenuController::new(actions, settings.menu, settings.layout, settings.tap_policy),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.tab_bar.active()
    }

    pub fn set_active_tab(&mut self, tab: Tab, now: Duration) {
        self.tab_bar.set_active(tab, now);
    }

    pub fn tab_bar(&self) -> &TabBarState {
        &self.tab_bar
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    pub fn button_frames(&self) -> Vec<ButtonFrame> {
        self.menu.button_frames()
    }

    pub fn is_animating(&self) -> bool {
        self.tab_bar.is_animating() || self.menu.is_animating()
    }

    pub fn handle(&mut self, input: NavbarInput, now: Duration) -> Vec<NavbarEvent> {
        let menu_input = match input {
            NavbarInput::PressTab(tab) => {
                return vec![NavbarEvent::TabPressed(self.tab_bar.press(tab))];
            }
            NavbarInput::PressFab => MenuInput::PressFab,
            NavbarInput::PressOverlay => MenuInput::PressOverlay,
            NavbarInput::PressAction(index) => MenuInput::PressAction(index),
        };
        self.menu
            .handle(menu_input, now)
            .into_iter()
            .map(NavbarEvent::Menu)
            .collect()
    }

    pub fn tick(&mut self, now: Duration) -> Vec<NavbarEvent> {
        self.tab_bar.tick(now);
        self.menu
            .tick(now)
            .into_iter()
            .map(NavbarEvent::Menu)
            .collect()
    }
}
