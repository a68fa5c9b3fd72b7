//! # TitleBar Component
//!
//! Top status line showing the active tab, the status message and, while the
//! quick-action menu is up, a hint for closing it.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Stats", "Quick Add requested".into(), false);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Menu open**: `"Tabdock (tab: Stats) | Quick Add requested | Esc closes menu"`
//! 2. **Status message**: `"Tabdock (tab: Stats) | Quick Add requested"`
//! 3. **Default**: `"Tabdock (tab: Stats)"`

use crate::tui::component::Component;
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

pub struct TitleBar {
    /// Label of the active tab
    pub tab_label: &'static str,
    /// Status message (e.g. "Stats tab", "Quick Add requested")
    pub status_message: String,
    /// Whether the quick-action menu is showing
    pub menu_open: bool,
}

impl TitleBar {
    pub fn new(tab_label: &'static str, status_message: String, menu_open: bool) -> Self {
        Self {
            tab_label,
            status_message,
            menu_open,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Tabdock (tab: {})", self.tab_label);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.menu_open {
            text.push_str(" | Esc closes menu");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(theme::TEXT).bg(theme::SURFACE);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
