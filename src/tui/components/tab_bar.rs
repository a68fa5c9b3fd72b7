//! # TabBar Component
//!
//! Draws the four tabs (glyph over label) into the cells computed by
//! `layout::screen_layout`. The active tab is highlighted; while its emphasis
//! animation is near its peak the glyph is bracketed and bold, which is as
//! close to "scale up" as a terminal cell gets.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::tab::Tab;
use crate::core::tab_bar::TabBarState;
use crate::tui::component::Component;
use crate::tui::platform::GlyphProvider;
use crate::tui::theme;

/// Emphasis scale above which the glyph is drawn enlarged.
pub const ENLARGED_SCALE: f32 = 1.08;

pub struct TabBar<'a> {
    pub state: &'a TabBarState,
    pub glyphs: &'a dyn GlyphProvider,
    pub cells: [Rect; 4],
}

impl<'a> TabBar<'a> {
    pub fn new(state: &'a TabBarState, glyphs: &'a dyn GlyphProvider, cells: [Rect; 4]) -> Self {
        Self {
            state,
            glyphs,
            cells,
        }
    }

    fn tab_lines(&self, tab: Tab) -> Vec<Line<'static>> {
        let active = tab == self.state.active();
        let color = if active { theme::PRIMARY } else { theme::TEXT_MUTED };
        let mut glyph_style = Style::default().fg(color);
        let mut label_style = Style::default().fg(color);
        if active {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }

        let glyph = self.glyphs.glyph(tab.icon());
        let glyph_text = if self.state.emphasis_scale(tab) >= ENLARGED_SCALE {
            glyph_style = glyph_style.add_modifier(Modifier::BOLD);
            format!("‹{glyph}›")
        } else {
            glyph.to_string()
        };

        vec![
            Line::from(Span::styled(glyph_text, glyph_style)),
            Line::from(Span::styled(tab.label(), label_style)),
        ]
    }
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme::BORDER))
            .style(Style::default().bg(theme::SURFACE));
        frame.render_widget(block, area);

        for tab in Tab::ALL {
            let cell = self.cells[tab.index()];
            // Skip the border row.
            let inner = Rect {
                y: cell.y.saturating_add(1),
                height: cell.height.saturating_sub(1),
                ..cell
            };
            let paragraph = Paragraph::new(self.tab_lines(tab)).alignment(Alignment::Center);
            frame.render_widget(paragraph, inner);
        }
    }
}
