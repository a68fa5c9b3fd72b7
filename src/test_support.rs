//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::core::config::{EnvOverrides, TabdockConfig, resolve};
use crate::core::quick_action::{ActionId, QuickAction, default_actions};
use crate::core::state::App;

/// Ids of invoked quick actions, in call order.
pub type ActionLog = Rc<RefCell<Vec<ActionId>>>;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// The default action set with callbacks that record into a shared log.
pub fn counting_actions() -> (Vec<QuickAction>, ActionLog) {
    let log: ActionLog = Rc::new(RefCell::new(Vec::new()));
    let actions = default_actions()
        .into_iter()
        .map(|action| {
            let log = log.clone();
            let id = action.id;
            action.with_callback(Rc::new(move || log.borrow_mut().push(id)))
        })
        .collect();
    (actions, log)
}

/// Creates a test App with default config and recording callbacks.
pub fn test_app() -> App {
    let config = resolve(&TabdockConfig::default(), &EnvOverrides::default(), None, false);
    let (actions, _) = counting_actions();
    App::with_actions(&config, actions)
}
