//! # Tab Screen Component
//!
//! Placeholder content for the active tab: its glyph, its name and the key
//! hints, centered in the content area.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::tab::Tab;
use crate::tui::component::Component;
use crate::tui::platform::GlyphProvider;
use crate::tui::theme;

const HINTS: [&str; 3] = [
    "1-4 / ←→  switch tab",
    "space  quick actions",
    "q  quit",
];

pub struct TabScreen<'a> {
    pub tab: Tab,
    pub glyphs: &'a dyn GlyphProvider,
}

impl<'a> TabScreen<'a> {
    pub fn new(tab: Tab, glyphs: &'a dyn GlyphProvider) -> Self {
        Self { tab, glyphs }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                self.glyphs.glyph(self.tab.icon()),
                Style::default().fg(theme::PRIMARY),
            )),
            Line::from(Span::styled(
                self.tab.label(),
                Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(
            HINTS
                .iter()
                .map(|hint| Line::from(Span::styled(*hint, Style::default().fg(theme::TEXT_MUTED)))),
        );
        lines
    }
}

impl Component for TabScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Block::default().style(Style::default().bg(theme::BACKGROUND)), area);

        let lines = self.lines();
        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}
