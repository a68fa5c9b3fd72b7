//! # Overlay Component
//!
//! Darkens whatever is already in the buffer by the overlay opacity. Drawn
//! after the screen and tab bar, before the action buttons and the FAB.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;

use crate::tui::component::Component;
use crate::tui::theme;

pub struct Overlay {
    pub opacity: f32,
}

impl Component for Overlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.opacity <= 0.0 {
            return;
        }
        let buffer = frame.buffer_mut();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.fg = theme::shade(cell.fg, self.opacity);
                    cell.bg = theme::shade(cell.bg, self.opacity);
                    if self.opacity >= theme::DIM_THRESHOLD {
                        cell.modifier.insert(Modifier::DIM);
                    }
                }
            }
        }
    }
}
