//! # Actions
//!
//! Everything that can happen in Tabdock becomes an `Action`.
//! User clicks a tab? That's `Action::Input(NavbarInput::PressTab(tab), now)`.
//! A frame goes by? That's `Action::Tick(now)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` for the event loop to carry out.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Timestamps travel inside the action, so a test can replay an exact session.

use std::time::Duration;

use log::{debug, info};

use crate::core::menu::MenuEvent;
use crate::core::navbar::{NavbarEvent, NavbarInput};
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Input(NavbarInput, Duration),
    Tick(Duration),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    let (events, now) = match action {
        Action::Quit => {
            info!("Quit requested");
            return Effect::Quit;
        }
        Action::Input(input, now) => {
            debug!("Input {:?} at {:?}", input, now);
            (app.navbar.handle(input, now), now)
        }
        Action::Tick(now) => (app.navbar.tick(now), now),
    };

    for event in events {
        apply_event(app, event, now);
    }
    Effect::None
}

fn apply_event(app: &mut App, event: NavbarEvent, now: Duration) {
    match event {
        NavbarEvent::TabPressed(tab) => {
            app.tab_presses += 1;
            if tab == app.active_tab {
                debug!("Tab {} pressed while already active", tab);
            } else {
                info!("Switching tab {} → {}", app.active_tab, tab);
            }
            app.active_tab = tab;
            app.navbar.set_active_tab(tab, now);
            app.status_message = format!("{} tab", tab.label());
        }
        NavbarEvent::Menu(MenuEvent::ActionInvoked(id)) => {
            let label = app
                .navbar
                .menu()
                .actions()
                .iter()
                .find(|a| a.id == id)
                .map(|a| a.label)
                .unwrap_or("Action");
            app.status_message = format!("{label} requested");
        }
        NavbarEvent::Menu(MenuEvent::Opened) => debug!("Menu opened"),
        NavbarEvent::Menu(MenuEvent::Closed) => debug!("Menu closed"),
    }
}
