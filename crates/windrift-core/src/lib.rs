//! Core types shared by the windrift screensaver crates.

use ratatui::style::Color;

/// A color from the fixed logo palette.
///
/// The palette is an ordered, immutable list established at startup; every
/// logo on screen carries one of these identifiers and the image cache holds
/// one tinted logo per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    YellowBronze,
    Teal,
    Aqua,
    Lime,
    Purple,
    Gray,
    White,
    Red,
    Maroon,
    Green,
    Blue,
}

/// The full palette, in its fixed order.
pub const ALL_COLORS: [ColorId; 11] = [
    ColorId::YellowBronze,
    ColorId::Teal,
    ColorId::Aqua,
    ColorId::Lime,
    ColorId::Purple,
    ColorId::Gray,
    ColorId::White,
    ColorId::Red,
    ColorId::Maroon,
    ColorId::Green,
    ColorId::Blue,
];

impl ColorId {
    /// Convert the palette identifier to a Ratatui color.
    pub fn color(self) -> Color {
        match self {
            ColorId::YellowBronze => Color::Rgb(0x66, 0x6c, 0x2b),
            ColorId::Teal => Color::Rgb(0, 128, 128),
            ColorId::Aqua => Color::Rgb(0, 255, 255),
            ColorId::Lime => Color::Rgb(0, 255, 0),
            ColorId::Purple => Color::Rgb(128, 0, 128),
            ColorId::Gray => Color::Rgb(128, 128, 128),
            ColorId::White => Color::Rgb(255, 255, 255),
            ColorId::Red => Color::Rgb(255, 0, 0),
            ColorId::Maroon => Color::Rgb(128, 0, 0),
            ColorId::Green => Color::Rgb(0, 128, 0),
            ColorId::Blue => Color::Rgb(0, 0, 255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_eleven_distinct_entries() {
        let mut seen = std::collections::HashSet::new();
        for c in ALL_COLORS {
            assert!(seen.insert(c), "duplicate palette entry: {c:?}");
        }
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn every_color_maps_to_rgb() {
        for c in ALL_COLORS {
            assert!(matches!(c.color(), Color::Rgb(..)));
        }
    }
}
