//! # Core Application Logic
//!
//! The navbar as a headless state machine, plus the host app around it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navbar (component)   │
//!                    │  • State (host app)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No clock.      │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navbar`]: The `Navbar` component: tab bar + FAB menu
//! - [`menu`]: FAB / overlay / radial menu state machine
//! - [`tab_bar`]: Tab press forwarding and emphasis animation
//! - [`animation`]: Tweens with generation counters
//! - [`geometry`]: Arc layout of the action buttons
//! - [`state`]: The `App` struct, parent of the navbar
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod animation;
pub mod config;
pub mod geometry;
pub mod menu;
pub mod navbar;
pub mod quick_action;
pub mod state;
pub mod tab;
pub mod tab_bar;
