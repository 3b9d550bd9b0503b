//! Palettes selectable through `ui.theme`, plus the few composite styles the
//! wizard widgets share.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    /// Border of the highlighted choice or suggestion card.
    pub highlight: Color,
    /// Fill behind suggestion cards.
    pub card: Color,
}

const CATPPUCCIN_MOCHA: Theme = Theme {
    background: Color::Rgb(30, 30, 46),
    foreground: Color::Rgb(205, 214, 244),
    accent: Color::Rgb(203, 166, 247),
    muted: Color::Rgb(108, 112, 134),
    highlight: Color::Rgb(245, 194, 231),
    card: Color::Rgb(24, 24, 37),
};

const TOKYO_NIGHT: Theme = Theme {
    background: Color::Rgb(26, 27, 38),
    foreground: Color::Rgb(192, 202, 245),
    accent: Color::Rgb(187, 154, 247),
    muted: Color::Rgb(86, 95, 137),
    highlight: Color::Rgb(255, 158, 100),
    card: Color::Rgb(31, 35, 53),
};

const NORD: Theme = Theme {
    background: Color::Rgb(46, 52, 64),
    foreground: Color::Rgb(236, 239, 244),
    accent: Color::Rgb(180, 142, 173),
    muted: Color::Rgb(129, 161, 193),
    highlight: Color::Rgb(235, 203, 139),
    card: Color::Rgb(59, 66, 82),
};

impl Theme {
    /// Looks up `ui.theme`, tolerating case and `_` for `-`.  Unknown names
    /// get the catppuccin-mocha palette.
    pub fn from_config(name: &str) -> Self {
        match name.trim().to_lowercase().replace('_', "-").as_str() {
            "tokyo-night" | "tokyonight" => TOKYO_NIGHT,
            "nord" => NORD,
            _ => CATPPUCCIN_MOCHA,
        }
    }

    /// The "Avançar" button label: dimmed while the field is empty.
    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(self.background)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted).add_modifier(Modifier::DIM)
        }
    }

    pub fn outline(&self, active: bool) -> Style {
        Style::default().fg(if active { self.highlight } else { self.muted })
    }
}

impl Default for Theme {
    fn default() -> Self {
        CATPPUCCIN_MOCHA
    }
}
