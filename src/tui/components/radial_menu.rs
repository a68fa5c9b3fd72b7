//! # RadialMenu Component
//!
//! The fan of quick-action buttons. Positions come from
//! `layout::action_button_rect`; the component records the rectangles it
//! drew so the next click can be hit-tested against exactly what was on
//! screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::geometry::ButtonFrame;
use crate::core::quick_action::QuickAction;
use crate::tui::component::Component;
use crate::tui::layout::{ScreenLayout, action_button_rect};
use crate::tui::platform::GlyphProvider;
use crate::tui::theme;

/// Below this opacity a button is drawn dimmed.
pub const FAINT_OPACITY: f32 = 0.5;

pub struct RadialMenu<'a> {
    pub actions: &'a [QuickAction],
    pub frames: &'a [ButtonFrame],
    pub layout: &'a ScreenLayout,
    pub glyphs: &'a dyn GlyphProvider,
    /// Filled during render, one entry per action.
    pub drawn: Vec<Option<Rect>>,
}

impl<'a> RadialMenu<'a> {
    pub fn new(
        actions: &'a [QuickAction],
        frames: &'a [ButtonFrame],
        layout: &'a ScreenLayout,
        glyphs: &'a dyn GlyphProvider,
    ) -> Self {
        Self {
            actions,
            frames,
            layout,
            glyphs,
            drawn: Vec::new(),
        }
    }

    fn style(frame: &ButtonFrame) -> Style {
        let style = Style::default().fg(theme::TEXT).bg(theme::SURFACE);
        if frame.opacity < FAINT_OPACITY {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

impl Component for RadialMenu<'_> {
    fn render(&mut self, frame: &mut Frame, _area: Rect) {
        self.drawn = self
            .actions
            .iter()
            .zip(self.frames)
            .map(|(action, button)| {
                let rect = action_button_rect(self.layout, button, action.label)?;
                let style = Self::style(button);
                let glyph = self.glyphs.glyph(action.icon);

                frame.render_widget(Clear, rect);
                if rect.height == 1 {
                    let line = Line::from(Span::styled(format!(" {glyph} "), style));
                    frame.render_widget(Paragraph::new(line), rect);
                } else {
                    let line = Line::from(vec![
                        Span::styled(glyph, style.fg(theme::PRIMARY)),
                        Span::styled(format!(" {}", action.label), style),
                    ]);
                    let block = Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(style.fg(theme::BORDER))
                        .style(style);
                    frame.render_widget(
                        Paragraph::new(line).alignment(Alignment::Center).block(block),
                        rect,
                    );
                }
                Some(rect)
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::ArcLayout;
    use crate::core::quick_action::default_actions;
    use crate::tui::layout::screen_layout;
    use crate::tui::platform::UnicodeGlyphs;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn render(progress: f32) -> (Terminal<TestBackend>, Vec<Option<Rect>>) {
        let area = Rect::new(0, 0, 100, 30);
        let layout = screen_layout(area, 0);
        let actions = default_actions();
        let arc = ArcLayout::default();
        let frames: Vec<ButtonFrame> = (0..4).map(|i| arc.frame(i, 4, progress)).collect();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut drawn = Vec::new();
        terminal
            .draw(|f| {
                let mut menu = RadialMenu::new(&actions, &frames, &layout, &UnicodeGlyphs);
                menu.render(f, area);
                drawn = menu.drawn;
            })
            .unwrap();
        (terminal, drawn)
    }

    #[test]
    fn test_resting_menu_shows_all_labels() {
        let (terminal, drawn) = render(1.0);
        let text = screen_text(&terminal);
        for action in default_actions() {
            assert!(text.contains(action.label), "missing {}", action.label);
        }
        assert_eq!(drawn.len(), 4);
        assert!(drawn.iter().all(Option::is_some));
    }

    #[test]
    fn test_hidden_menu_draws_nothing() {
        let (terminal, drawn) = render(0.0);
        assert!(screen_text(&terminal).trim().is_empty());
        assert!(drawn.iter().all(Option::is_none));
    }

    #[test]
    fn test_early_progress_is_compact_and_dim() {
        let (terminal, drawn) = render(0.2);
        let rect = drawn[0].unwrap();
        assert_eq!(rect.height, 1);
        let cell = &terminal.backend().buffer()[(rect.x + 1, rect.y)];
        assert_eq!(cell.symbol(), "⊕");
        assert!(cell.modifier.contains(Modifier::DIM));
    }
}
