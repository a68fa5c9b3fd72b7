//! # Platform Collaborators
//!
//! Things the navbar borrows from its surroundings rather than owning:
//! the icon glyph provider and the bottom safe-area inset.

/// Maps an icon name to something printable in a terminal cell.
pub trait GlyphProvider {
    fn glyph(&self, name: &str) -> &'static str;
}

/// Single-width Unicode symbols.
pub struct UnicodeGlyphs;

impl GlyphProvider for UnicodeGlyphs {
    fn glyph(&self, name: &str) -> &'static str {
        match name {
            "home" => "⌂",
            "stats-chart" => "▥",
            "calendar" => "▦",
            "person" => "☺",
            "add" => "+",
            "close" => "×",
            "add-circle" => "⊕",
            "sparkles" => "✦",
            "create" => "✎",
            "water" => "≈",
            _ => "•",
        }
    }
}

/// Plain ASCII for terminals without decent Unicode fonts.
pub struct AsciiGlyphs;

impl GlyphProvider for AsciiGlyphs {
    fn glyph(&self, name: &str) -> &'static str {
        match name {
            "home" => "H",
            "stats-chart" => "S",
            "calendar" => "P",
            "person" => "U",
            "add" => "+",
            "close" => "x",
            "add-circle" => "+",
            "sparkles" => "*",
            "create" => "N",
            "water" => "~",
            _ => "?",
        }
    }
}

pub fn glyph_provider(ascii: bool) -> Box<dyn GlyphProvider> {
    if ascii {
        Box::new(AsciiGlyphs)
    } else {
        Box::new(UnicodeGlyphs)
    }
}

/// Rows kept clear below the tab bar (home-indicator area on a phone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SafeArea {
    pub bottom: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quick_action::default_actions;
    use crate::core::tab::Tab;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_every_known_icon_has_a_single_cell_glyph() {
        let actions = default_actions();
        let names = Tab::ALL
            .iter()
            .map(|t| t.icon())
            .chain(actions.iter().map(|a| a.icon))
            .chain(["add", "close"]);
        for name in names {
            for provider in [glyph_provider(false), glyph_provider(true)] {
                let glyph = provider.glyph(name);
                assert_eq!(glyph.width(), 1, "{name} -> {glyph}");
            }
        }
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(UnicodeGlyphs.glyph("rocket"), "•");
        assert_eq!(AsciiGlyphs.glyph("rocket"), "?");
    }
}
