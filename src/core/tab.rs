//! # Tabs
//!
//! The four destinations of the bottom bar. The active tab is owned by the
//! host app; the navbar only reports presses.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Stats,
    Plan,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Stats, Tab::Plan, Tab::Profile];

    /// Stable identifier passed to the parent on press.
    pub fn id(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Stats => "stats",
            Tab::Plan => "plan",
            Tab::Profile => "profile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Stats => "Stats",
            Tab::Plan => "Plan",
            Tab::Profile => "Profile",
        }
    }

    /// Icon name resolved by the glyph provider.
    pub fn icon(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Stats => "stats-chart",
            Tab::Plan => "calendar",
            Tab::Profile => "person",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Stats => 1,
            Tab::Plan => 2,
            Tab::Profile => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string does not name one of the four tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTabError(pub String);

impl fmt::Display for ParseTabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab '{}' (expected home, stats, plan or profile)", self.0)
    }
}

impl std::error::Error for ParseTabError {}

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == wanted)
            .ok_or_else(|| ParseTabError(s.to_string()))
    }
}
