use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Fab, Overlay, RadialMenu, TabBar, TabScreen, TitleBar};
use crate::tui::layout::{HitMap, screen_layout};

use ratatui::Frame;

/// Draw one frame, back to front, and remember what was clickable.
///
/// ```text
/// title → tab screen → tab bar → overlay → action buttons → FAB
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = screen_layout(frame.area(), tui.safe_area.bottom);
    let navbar = &app.navbar;
    let menu = navbar.menu();
    let glyphs = tui.glyphs.as_ref();

    TitleBar::new(app.active_tab.label(), app.status_message.clone(), menu.is_open())
        .render(frame, layout.title);

    TabScreen::new(app.active_tab, glyphs).render(frame, layout.content);

    TabBar::new(navbar.tab_bar(), glyphs, layout.tab_cells).render(frame, layout.tab_bar);

    let opacity = menu.overlay_opacity();
    if opacity > 0.0 {
        Overlay { opacity }.render(frame, layout.area);
    }

    let frames = navbar.button_frames();
    let mut radial = RadialMenu::new(menu.actions(), &frames, &layout, glyphs);
    radial.render(frame, layout.area);
    let buttons = radial.drawn;

    Fab::new(menu.rotation_degrees(), glyphs).render(frame, layout.fab);

    tui.hit_map = HitMap { layout, buttons };
}
