//! Solarized Light theme

use ratatui::style::Color;

use super::Theme;

pub const SOLARIZED_LIGHT: Theme = Theme {
    name: String::new(),

    bg_primary: Color::Rgb(253, 246, 227),   // base3
    bg_secondary: Color::Rgb(238, 232, 213), // base2
    bg_tertiary: Color::Rgb(147, 161, 161),  // base1

    fg_primary: Color::Rgb(88, 110, 117),   // base01
    fg_secondary: Color::Rgb(7, 54, 66),    // base02
    fg_muted: Color::Rgb(147, 161, 161),    // base1

    accent_primary: Color::Rgb(38, 139, 210),  // blue
    accent_secondary: Color::Rgb(108, 113, 196), // violet

    success: Color::Rgb(133, 153, 0),  // green
    warning: Color::Rgb(181, 137, 0),  // yellow
    error: Color::Rgb(220, 50, 47),    // red
    info: Color::Rgb(42, 161, 152),    // cyan

    border: Color::Rgb(147, 161, 161),
    border_focused: Color::Rgb(38, 139, 210),
    selection: Color::Rgb(238, 232, 213),
};

impl Theme {
    pub fn solarized_light() -> Self {
        Theme { name: "Solarized Light".to_string(), ..SOLARIZED_LIGHT }
    }
}
