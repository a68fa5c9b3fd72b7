//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! navbar is headless; anything else that can draw frames and report presses
//! could drive it instead.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (menu opening/closing, tab emphasis): ticks and draws every
//!   frame interval (`fps` in the config, 60 by default).
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Clock
//!
//! The core never reads a clock. The loop measures time since startup and
//! passes it in with every tick and every press.

mod component;
mod components;
mod event;
pub mod layout;
pub mod platform;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navbar::NavbarInput;
use crate::core::state::App;
use crate::core::tab::Tab;
use crate::tui::component::EventHandler;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::layout::HitMap;
use crate::tui::platform::{GlyphProvider, SafeArea, glyph_provider};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core navbar logic)
pub struct TuiState {
    pub glyphs: Box<dyn GlyphProvider>,
    pub safe_area: SafeArea,
    /// Clickable regions from the last drawn frame
    pub hit_map: HitMap,
}

impl TuiState {
    pub fn new(glyphs: Box<dyn GlyphProvider>, safe_area: SafeArea) -> Self {
        Self {
            glyphs,
            safe_area,
            hit_map: HitMap::default(),
        }
    }
}

/// Turns terminal events into navbar presses.
///
/// Transient: built for each event from the last frame's hit map and the
/// current menu state, then dropped.
pub struct InputRouter<'a> {
    pub hit_map: &'a HitMap,
    pub menu_open: bool,
    pub active_tab: Tab,
}

impl EventHandler for InputRouter<'_> {
    type Event = NavbarInput;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavbarInput> {
        match *event {
            TuiEvent::Digit(d) if self.menu_open => {
                Some(NavbarInput::PressAction(usize::from(d).saturating_sub(1)))
            }
            TuiEvent::Digit(d) => {
                Tab::from_index(usize::from(d).saturating_sub(1)).map(NavbarInput::PressTab)
            }
            TuiEvent::Escape if self.menu_open => Some(NavbarInput::PressOverlay),
            TuiEvent::Left if !self.menu_open => Some(NavbarInput::PressTab(self.active_tab.prev())),
            TuiEvent::Right if !self.menu_open => {
                Some(NavbarInput::PressTab(self.active_tab.next()))
            }
            TuiEvent::ToggleMenu => Some(NavbarInput::PressFab),
            TuiEvent::MouseClick(column, row) => self.hit_map.hit_test(column, row, self.menu_open),
            _ => None,
        }
    }
}

/// Owns the terminal setup. Dropping it restores the terminal, so every
/// exit from `run` (including `?` on a failed draw) leaves it usable.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn enter() -> std::io::Result<(DefaultTerminal, Self)> {
        let terminal = ratatui::init();
        // Built before enabling modes so a failure below still restores.
        let guard = Self;
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok((terminal, guard))
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
        ratatui::restore();
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(
        glyph_provider(config.ascii_glyphs),
        SafeArea {
            bottom: config.safe_area_bottom,
        },
    );
    let frame_interval = config.frame_interval();

    let (mut terminal, _terminal_mode_guard) = TerminalModeGuard::enter()?;

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    info!(
        "Event loop started on tab {} ({:?} per animated frame)",
        app.active_tab, frame_interval
    );

    loop {
        update(&mut app, Action::Tick(start_time.elapsed()));

        // Animations need a fresh frame every pass
        let animating = app.is_animating();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating { frame_interval } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                    continue;
                }
                _ => {}
            }

            let mut router = InputRouter {
                hit_map: &tui.hit_map,
                menu_open: app.navbar.menu().is_open(),
                active_tab: app.active_tab,
            };
            if let Some(input) = router.handle_event(&event) {
                debug!("{:?} → {:?}", event, input);
                update(&mut app, Action::Input(input, start_time.elapsed()));
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down after {} tab presses", app.tab_presses);
    Ok(())
}
