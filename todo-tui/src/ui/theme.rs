use ratatui::style::Color;

use crate::config::Theme;

/// Concrete colors for the current theme, resolved once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub focus: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Reset,
                fg: Color::White,
                dim: Color::DarkGray,
                accent: Color::Cyan,
                focus: Color::Yellow,
                success: Color::Green,
                error: Color::Red,
            },
            Theme::Light => Self {
                bg: Color::White,
                fg: Color::Black,
                dim: Color::Gray,
                accent: Color::Blue,
                focus: Color::Magenta,
                success: Color::Green,
                error: Color::Red,
            },
        }
    }
}
