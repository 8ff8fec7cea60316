//! Various non-themable constants
use super::*;

/// Size constants
pub mod size {
    use super::*;

    /// Default font size
    pub const FONT_SIZE: f32 = 20.0;

    /// Default border radius for buttons and panels
    pub const BORDER_RADIUS: Val = Vw(0.6);

    /// Health bar width
    pub const HEALTH_BAR_WIDTH: f32 = 288.0;

    /// Health bar height
    pub const HEALTH_BAR_HEIGHT: f32 = 16.0;
}

/// Tailwind CSS neutral palette (oklch, zero chroma) plus a few accents
pub mod colors {
    use bevy::prelude::Color;

    // Neutral scale
    pub const NEUTRAL100: Color = Color::oklcha(0.970, 0.0, 0.0, 1.0);
    pub const NEUTRAL300: Color = Color::oklcha(0.870, 0.0, 0.0, 1.0);
    pub const NEUTRAL400: Color = Color::oklcha(0.708, 0.0, 0.0, 1.0);
    pub const NEUTRAL500: Color = Color::oklcha(0.556, 0.0, 0.0, 1.0);
    pub const NEUTRAL700: Color = Color::oklcha(0.371, 0.0, 0.0, 1.0);
    pub const NEUTRAL750: Color = Color::oklcha(0.320, 0.0, 0.0, 1.0);
    pub const NEUTRAL800: Color = Color::oklcha(0.269, 0.0, 0.0, 1.0);
    pub const NEUTRAL850: Color = Color::oklcha(0.237, 0.0, 0.0, 1.0);
    pub const NEUTRAL900: Color = Color::oklcha(0.205, 0.0, 0.0, 1.0);
    pub const NEUTRAL920: Color = Color::oklcha(0.181, 0.0, 0.0, 1.0);
    pub const NEUTRAL950: Color = Color::oklcha(0.145, 0.0, 0.0, 1.0);

    // Accents
    pub const TRANSPARENT: Color = Color::srgba(0.0, 0.0, 0.0, 0.0);
    pub const SAND_YELLOW: Color = Color::srgb(205. / 255., 170. / 255., 109. / 255.);
    pub const ACID_GREEN: Color = Color::srgb(0.286, 0.878, 0.373);
    pub const RED: Color = Color::oklcha(0.5232, 0.1404, 13.84, 1.0);
    pub const HEALTH_RED: Color = Color::srgb(0.816, 0.125, 0.125);

    /// Near-black void used for ClearColor
    pub const VOID: Color = Color::oklcha(0.100, 0.0, 0.0, 1.0);
}

#[derive(Component, Clone, Debug, Reflect)]
pub struct Palette {
    pub text: Color,
    pub bg: Color,
    pub border: BorderColor,
}

impl Palette {
    pub fn new(text: Color, bg: Color, border: BorderColor) -> Self {
        Self { text, bg, border }
    }
}

/// Palette for widget interactions
/// Add this to an entity you want changing color properties
#[derive(Component, Clone, Debug, Reflect)]
pub struct PaletteSet {
    pub none: Palette,
    pub hovered: Palette,
    pub pressed: Palette,
    pub disabled: Palette,
}
impl Default for PaletteSet {
    fn default() -> Self {
        Self {
            none: Palette::new(colors::NEUTRAL300, colors::NEUTRAL900, BorderColor::all(colors::NEUTRAL850)),
            hovered: Palette::new(colors::NEUTRAL300, colors::NEUTRAL850, BorderColor::all(colors::NEUTRAL800)),
            pressed: Palette::new(colors::NEUTRAL300, colors::NEUTRAL800, BorderColor::all(colors::NEUTRAL750)),
            disabled: Palette::new(colors::NEUTRAL500, colors::NEUTRAL900, BorderColor::all(colors::NEUTRAL850)),
        }
    }
}

impl PaletteSet {
    /// Palette for a class button that is currently selected, accented with the class color.
    pub fn selected(accent: Color) -> Self {
        Self {
            none: Palette::new(colors::NEUTRAL100, colors::NEUTRAL800, BorderColor::all(accent)),
            hovered: Palette::new(colors::NEUTRAL100, colors::NEUTRAL750, BorderColor::all(accent)),
            pressed: Palette::new(colors::NEUTRAL100, colors::NEUTRAL700, BorderColor::all(accent)),
            disabled: Palette::new(colors::NEUTRAL500, colors::NEUTRAL900, BorderColor::all(colors::NEUTRAL850)),
        }
    }
}
