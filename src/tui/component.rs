use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something drawable for one frame.
///
/// Navbar components are props-only views over core state: build one, call
/// `render`, drop it. `render` takes `&mut self` so a view can keep what it
/// learned while drawing, like `RadialMenu` keeping its button rectangles
/// for the next hit test.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns a terminal event into something the core understands.
pub trait EventHandler {
    /// What this handler produces, e.g. a `NavbarInput`.
    type Event;

    /// `None` when the event means nothing in the current state.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
