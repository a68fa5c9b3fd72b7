//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is a transient, props-based view: it borrows what it
//! needs from the core `Navbar` for one frame, renders, and is dropped. The
//! animation state lives in the core, so the components stay stateless.
//!
//! - `TitleBar`: top status line
//! - `TabScreen`: placeholder content for the active tab
//! - `TabBar`: the four tabs with their emphasis effect
//! - `Overlay`: darkens the screen behind the open menu
//! - `RadialMenu`: the fan of quick-action buttons (records its hit rects)
//! - `Fab`: the floating action button
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into `App`. This makes dependencies explicit and components
//! testable with a `TestBackend`.
//!
//! ```rust,ignore
//! let mut fab = Fab::new(menu.rotation_degrees(), glyphs);
//! fab.render(frame, layout.fab);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status line)
//! ├── tab_screen.rs    (per-tab content)
//! ├── tab_bar.rs       (bottom tabs)
//! ├── overlay.rs       (dimming layer)
//! ├── radial_menu.rs   (quick-action fan)
//! └── fab.rs           (floating action button)
//! ```

mod fab;
mod overlay;
mod radial_menu;
mod tab_bar;
mod tab_screen;
mod title_bar;

pub use fab::Fab;
pub use overlay::Overlay;
pub use radial_menu::RadialMenu;
pub use tab_bar::TabBar;
pub use tab_screen::TabScreen;
pub use title_bar::TitleBar;
