//! # Fab Component
//!
//! The floating action button. A terminal glyph can't rotate, so the
//! rotation prop picks the glyph: `+` until halfway to 45°, `×` past it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::menu::FAB_OPEN_DEGREES;
use crate::tui::component::Component;
use crate::tui::platform::GlyphProvider;
use crate::tui::theme;

pub struct Fab<'a> {
    pub rotation_degrees: f32,
    pub glyphs: &'a dyn GlyphProvider,
}

impl<'a> Fab<'a> {
    pub fn new(rotation_degrees: f32, glyphs: &'a dyn GlyphProvider) -> Self {
        Self {
            rotation_degrees,
            glyphs,
        }
    }

    fn icon(&self) -> &'static str {
        if self.rotation_degrees >= FAB_OPEN_DEGREES / 2.0 {
            self.glyphs.glyph("close")
        } else {
            self.glyphs.glyph("add")
        }
    }
}

impl Component for Fab<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(theme::ON_PRIMARY)
            .bg(theme::PRIMARY)
            .add_modifier(Modifier::BOLD);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(style);

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(self.icon())
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}
