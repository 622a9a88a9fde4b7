//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::gradient::{self, Rgb};

/// Which palette to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Pick a theme from the terminal background. `terminal-light` probes
/// the terminal; anything that fails the probe is treated as dark,
/// which is the safer default for projectors.
pub fn resolve_theme() -> Theme {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.6 => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Complete color palette for the reveal TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Accent used for non-podium rows and chrome, matching the
    /// original app's light/dark accent.
    pub accent: Color,
    pub text: Color,
    pub muted: Color,

    pub title_style: Style,
    pub hint_style: Style,

    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,
}

impl ThemeColors {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb(144, 202, 249),
            text: Color::White,
            muted: Color::Gray,
            title_style: Style::new().fg(Color::Rgb(144, 202, 249)).bold(),
            hint_style: Style::new().fg(Color::Gray).italic(),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
        }
    }

    /// Light theme palette
    pub fn light() -> Self {
        Self {
            accent: Color::Rgb(25, 118, 210),
            text: Color::Black,
            muted: Color::DarkGray,
            title_style: Style::new().fg(Color::Rgb(25, 118, 210)).bold(),
            hint_style: Style::new().fg(Color::DarkGray).italic(),
            status_bar_bg: Color::Indexed(253),
            status_key_color: Color::Blue,
            flash_success: Color::Green,
            flash_error: Color::Red,
        }
    }

    /// Row color for a revealed team: podium metal for the top three
    /// when the gradient is on, the theme accent otherwise.
    pub fn row_color(&self, rank: u32, gradient_enabled: bool) -> Color {
        if gradient_enabled {
            if let Some(metal) = gradient::podium_color(rank) {
                return to_color(metal);
            }
        }
        self.accent
    }
}

/// Bridge an engine RGB value into a ratatui color.
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
