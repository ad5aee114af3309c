use clap::ValueEnum;
use ratatui::style::Color;

/// A color theme applied to all visual elements.
///
/// Every grid cell is drawn as half of a terminal cell, so each entity is a
/// solid colored half block.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_value: Color,
    pub hud_label: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green head, yellow body, red food on black.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::Green,
    snake_body: Color::Yellow,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_value: Color::White,
    hud_label: Color::DarkGray,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_value: Color::Cyan,
    hud_label: Color::DarkGray,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_value: Color::Magenta,
    hud_label: Color::DarkGray,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// Theme names accepted on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, ValueEnum)]
pub enum ThemeName {
    #[default]
    Classic,
    Ocean,
    Neon,
}

impl ThemeName {
    #[must_use]
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Classic => &THEME_CLASSIC,
            Self::Ocean => &THEME_OCEAN,
            Self::Neon => &THEME_NEON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeName;

    #[test]
    fn every_name_resolves_to_its_theme() {
        assert_eq!(ThemeName::Classic.theme().name, "Classic");
        assert_eq!(ThemeName::Ocean.theme().name, "Ocean");
        assert_eq!(ThemeName::Neon.theme().name, "Neon");
    }
}
