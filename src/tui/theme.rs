//! Shared color palette.

use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(24, 26, 33);
pub const SURFACE: Color = Color::Rgb(34, 37, 46);
pub const BORDER: Color = Color::Rgb(62, 66, 80);
pub const TEXT: Color = Color::Rgb(228, 230, 236);
pub const TEXT_MUTED: Color = Color::Rgb(128, 134, 150);
pub const PRIMARY: Color = Color::Rgb(76, 175, 80);
pub const ON_PRIMARY: Color = Color::Rgb(255, 255, 255);

/// Overlay at or above this opacity also sets the DIM modifier.
pub const DIM_THRESHOLD: f32 = 0.3;

/// Darken `color` as if a black layer of `opacity` sat on top of it.
/// Non-RGB colors are treated as the background color.
pub fn shade(color: Color, opacity: f32) -> Color {
    let (r, g, b) = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => match BACKGROUND {
            Color::Rgb(r, g, b) => (r, g, b),
            _ => (0, 0, 0),
        },
    };
    let keep = 1.0 - opacity.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 * keep).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}
