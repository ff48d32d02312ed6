//! Centralized theme and color scheme for the TUI.

use ratatui::prelude::*;
use std::sync::RwLock;

/// Semantic colors for UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Change status colors
    pub added: Color,
    pub removed: Color,
    pub modified: Color,
    pub breaking: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub selection_bg: Color,
    pub highlight: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

/// Available themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    const fn colors(self) -> ColorScheme {
        match self {
            Self::Dark => ColorScheme {
                added: Color::Green,
                removed: Color::Red,
                modified: Color::Yellow,
                breaking: Color::LightRed,
                primary: Color::Cyan,
                accent: Color::Magenta,
                muted: Color::DarkGray,
                border: Color::DarkGray,
                border_focused: Color::Cyan,
                text: Color::Gray,
                selection_bg: Color::Rgb(45, 55, 72),
                highlight: Color::LightCyan,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
            Self::Light => ColorScheme {
                added: Color::Rgb(0, 110, 0),
                removed: Color::Rgb(160, 0, 0),
                modified: Color::Rgb(150, 110, 0),
                breaking: Color::Rgb(190, 30, 30),
                primary: Color::Blue,
                accent: Color::Magenta,
                muted: Color::Gray,
                border: Color::Gray,
                border_focused: Color::Blue,
                text: Color::Black,
                selection_bg: Color::Rgb(210, 225, 245),
                highlight: Color::Blue,
                success: Color::Rgb(0, 110, 0),
                warning: Color::Rgb(150, 110, 0),
                error: Color::Rgb(160, 0, 0),
            },
        }
    }
}

struct ThemeState {
    theme: Theme,
    colors: ColorScheme,
}

static THEME: RwLock<ThemeState> = RwLock::new(ThemeState {
    theme: Theme::Dark,
    colors: Theme::Dark.colors(),
});

/// Current color scheme.
pub fn colors() -> ColorScheme {
    THEME.read().expect("THEME lock not poisoned").colors
}

/// Switch the active theme.
pub fn set_theme(theme: Theme) {
    let mut state = THEME.write().expect("THEME lock not poisoned");
    state.theme = theme;
    state.colors = theme.colors();
}

/// Toggle between dark and light, returning the new theme.
pub fn toggle_theme() -> Theme {
    let mut state = THEME.write().expect("THEME lock not poisoned");
    state.theme = match state.theme {
        Theme::Dark => Theme::Light,
        Theme::Light => Theme::Dark,
    };
    state.colors = state.theme.colors();
    state.theme
}

/// Name of the active theme, for preference persistence.
pub fn current_theme_name() -> &'static str {
    THEME.read().expect("THEME lock not poisoned").theme.name()
}

/// Style for a breaking-change marker.
pub fn breaking_style() -> Style {
    Style::default().fg(colors().breaking).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("anything"), Theme::Dark);
    }
}
