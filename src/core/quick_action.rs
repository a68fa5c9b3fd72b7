//! # Quick Actions
//!
//! The four shortcuts behind the FAB. Each record carries its own callback.
//! The defaults only log intent; the real handlers (entry form, meal
//! adaptation, notes) live outside this crate.

use std::fmt;
use std::rc::Rc;

use log::info;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    QuickAdd,
    AdaptMeal,
    AddNote,
    LogWater,
}

impl ActionId {
    pub fn id(self) -> &'static str {
        match self {
            ActionId::QuickAdd => "quick_add",
            ActionId::AdaptMeal => "adapt_meal",
            ActionId::AddNote => "add_note",
            ActionId::LogWater => "log_water",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub type ActionCallback = Rc<dyn Fn()>;

#[derive(Clone)]
pub struct QuickAction {
    pub id: ActionId,
    /// Icon name resolved by the glyph provider.
    pub icon: &'static str,
    pub label: &'static str,
    callback: ActionCallback,
}

impl QuickAction {
    pub fn new(id: ActionId, icon: &'static str, label: &'static str, callback: ActionCallback) -> Self {
        Self {
            id,
            icon,
            label,
            callback,
        }
    }

    pub fn invoke(&self) {
        (self.callback)();
    }

    /// Same record with a different callback.
    pub fn with_callback(self, callback: ActionCallback) -> Self {
        Self { callback, ..self }
    }
}

impl fmt::Debug for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuickAction")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

fn log_intent(label: &'static str) -> ActionCallback {
    Rc::new(move || info!("Quick action requested: {label}"))
}

/// The built-in action set, in fan order (left to right).
pub fn default_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new(ActionId::QuickAdd, "add-circle", "Quick Add", log_intent("Quick Add")),
        QuickAction::new(ActionId::AdaptMeal, "sparkles", "Adapt Meal", log_intent("Adapt Meal")),
        QuickAction::new(ActionId::AddNote, "create", "Add Note", log_intent("Add Note")),
        QuickAction::new(ActionId::LogWater, "water", "Log Water", log_intent("Log Water")),
    ]
}
