//! # Screen Layout & Hit Testing
//!
//! ```text
//! ┌──────────────────────────────────────────────┐ title (1 row)
//! │                                              │
//! │                content                       │
//! │                      ⊕ ✦ ✎ ≈   (fan, when open)│
//! │                     ╭─────╮                  │
//! ├────────┬────────┬───│  +  │───┬────────┬─────┤ tab bar (3 rows)
//! │  Home  │ Stats  │   ╰─────╯   │  Plan  │ Prof│
//! └────────┴────────┴─────────────┴────────┴─────┘
//!                                                  safe area (n rows)
//! ```
//!
//! The FAB sits in the middle fifth of the tab bar, raised one row. Action
//! buttons are placed by projecting their layout-point offsets onto terminal
//! cells, which are roughly twice as tall as they are wide.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::core::geometry::ButtonFrame;
use crate::core::navbar::NavbarInput;
use crate::core::tab::Tab;

pub const TAB_BAR_HEIGHT: u16 = 3;
pub const FAB_WIDTH: u16 = 7;
pub const FAB_HEIGHT: u16 = 3;

/// Layout points per terminal column / row.
pub const POINTS_PER_COLUMN: f32 = 8.0;
pub const POINTS_PER_ROW: f32 = 18.0;

/// Below this scale a button is drawn as a bare glyph.
pub const COMPACT_SCALE: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub area: Rect,
    pub title: Rect,
    pub content: Rect,
    pub tab_bar: Rect,
    pub tab_cells: [Rect; 4],
    pub fab: Rect,
    pub safe_area: Rect,
}

pub fn screen_layout(area: Rect, safe_area_bottom: u16) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, content, tab_bar, safe_area] = Layout::vertical([
        Length(1),
        Min(0),
        Length(TAB_BAR_HEIGHT),
        Length(safe_area_bottom),
    ])
    .areas(area);

    let [c0, c1, middle, c2, c3] = Layout::horizontal([Constraint::Ratio(1, 5); 5]).areas(tab_bar);

    let fab_width = FAB_WIDTH.min(middle.width);
    let fab = Rect {
        x: middle.x + (middle.width - fab_width) / 2,
        y: tab_bar.y.saturating_sub(1).max(area.y),
        width: fab_width,
        height: FAB_HEIGHT.min(area.height),
    };

    ScreenLayout {
        area,
        title,
        content,
        tab_bar,
        tab_cells: [c0, c1, c2, c3],
        fab,
        safe_area,
    }
}

/// Where an action button is drawn for `frame`, or None when invisible.
///
/// Full-size buttons are boxed `[glyph label]`; shrunken ones are a
/// single-row glyph.
pub fn action_button_rect(layout: &ScreenLayout, frame: &ButtonFrame, label: &str) -> Option<Rect> {
    if !frame.is_visible() {
        return None;
    }

    let (width, height) = if frame.scale < COMPACT_SCALE {
        (3, 1)
    } else {
        // border + space + glyph + space + label + space + border
        (label.width() as u16 + 6, 3)
    };

    let fab = layout.fab;
    let center_x = fab.x as f32 + fab.width as f32 / 2.0 + frame.dx / POINTS_PER_COLUMN;
    let center_y = fab.y as f32 + fab.height as f32 / 2.0 + frame.dy / POINTS_PER_ROW;
    let x = (center_x - width as f32 / 2.0).round().max(0.0) as u16;
    let y = (center_y - height as f32 / 2.0).round().max(0.0) as u16;

    let rect = Rect::new(x, y, width, height).clamp(layout.area);
    (!rect.is_empty()).then_some(rect)
}

/// Everything clickable from the last frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub layout: ScreenLayout,
    /// Indexed like the quick actions; None for hidden buttons.
    pub buttons: Vec<Option<Rect>>,
}

impl HitMap {
    /// Resolve a click. While the menu is open, the overlay covers everything
    /// except the FAB and the action buttons.
    pub fn hit_test(&self, column: u16, row: u16, menu_open: bool) -> Option<NavbarInput> {
        let pos = Position::new(column, row);

        if self.layout.fab.contains(pos) {
            return Some(NavbarInput::PressFab);
        }

        if menu_open {
            let action = self
                .buttons
                .iter()
                .position(|rect| rect.is_some_and(|r| r.contains(pos)));
            return Some(match action {
                Some(index) => NavbarInput::PressAction(index),
                None => NavbarInput::PressOverlay,
            });
        }

        self.layout
            .tab_cells
            .iter()
            .position(|cell| cell.contains(pos))
            .and_then(Tab::from_index)
            .map(NavbarInput::PressTab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::ArcLayout;

    fn layout() -> ScreenLayout {
        screen_layout(Rect::new(0, 0, 100, 30), 1)
    }

    #[test]
    fn test_screen_layout_rows() {
        let layout = layout();
        assert_eq!(layout.title, Rect::new(0, 0, 100, 1));
        assert_eq!(layout.tab_bar, Rect::new(0, 26, 100, 3));
        assert_eq!(layout.safe_area, Rect::new(0, 29, 100, 1));
        assert_eq!(layout.content.height, 25);
    }

    #[test]
    fn test_fab_is_centered_and_raised() {
        let layout = layout();
        assert_eq!(layout.fab, Rect::new(46, 25, 7, 3));
        let cells_x: Vec<u16> = layout.tab_cells.iter().map(|c| c.x).collect();
        assert_eq!(cells_x, vec![0, 20, 60, 80]);
    }

    #[test]
    fn test_hidden_button_has_no_rect() {
        let frame = ArcLayout::default().frame(0, 4, 0.0);
        assert_eq!(action_button_rect(&layout(), &frame, "Quick Add"), None);
    }

    #[test]
    fn test_resting_buttons_fan_out_above_fab() {
        let layout = layout();
        let arc = ArcLayout::default();
        let rects: Vec<Rect> = (0..4)
            .map(|i| action_button_rect(&layout, &arc.frame(i, 4, 1.0), "Label").unwrap())
            .collect();

        for rect in &rects {
            assert!(rect.bottom() <= layout.fab.bottom());
            assert_eq!(rect.height, 3);
        }
        // Left-to-right in fan order.
        assert!(rects.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn test_small_scale_is_compact() {
        let frame = ArcLayout::default().frame(1, 4, 0.3);
        let rect = action_button_rect(&layout(), &frame, "Adapt Meal").unwrap();
        assert_eq!((rect.width, rect.height), (3, 1));
    }

    #[test]
    fn test_button_rect_stays_on_screen() {
        let small = screen_layout(Rect::new(0, 0, 30, 10), 0);
        let arc = ArcLayout::default();
        for i in 0..4 {
            let rect = action_button_rect(&small, &arc.frame(i, 4, 1.0), "Quick Add").unwrap();
            assert!(small.area.contains(rect.as_position()));
            assert!(rect.right() <= small.area.right());
        }
    }

    #[test]
    fn test_hit_test_closed_menu() {
        let map = HitMap {
            layout: layout(),
            buttons: vec![None; 4],
        };
        assert_eq!(map.hit_test(5, 27, false), Some(NavbarInput::PressTab(Tab::Home)));
        assert_eq!(map.hit_test(85, 27, false), Some(NavbarInput::PressTab(Tab::Profile)));
        assert_eq!(map.hit_test(48, 26, false), Some(NavbarInput::PressFab));
        assert_eq!(map.hit_test(10, 10, false), None);
    }

    #[test]
    fn test_hit_test_open_menu() {
        let map = HitMap {
            layout: layout(),
            buttons: vec![Some(Rect::new(10, 10, 8, 3)), None, None, None],
        };
        assert_eq!(map.hit_test(12, 11, true), Some(NavbarInput::PressAction(0)));
        assert_eq!(map.hit_test(48, 26, true), Some(NavbarInput::PressFab));
        // Tabs sit under the overlay.
        assert_eq!(map.hit_test(5, 27, true), Some(NavbarInput::PressOverlay));
        assert_eq!(map.hit_test(70, 3, true), Some(NavbarInput::PressOverlay));
    }
}
