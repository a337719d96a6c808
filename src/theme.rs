//! Appearance options: colour theme and sidebar layout

use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// How the sidebar arranges its buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SidebarLayout {
    /// Buttons listed top-down with a blank row between them
    #[default]
    Stack,
    /// Each button in an equal-height bordered cell
    Grid,
}

/// Colours used by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub topbar: Color,
    pub sidebar: Color,
    pub content: Color,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    /// Backdrop of cards whose image could not be loaded
    pub card_fallback: Color,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                topbar: Color::Rgb(36, 36, 36),
                sidebar: Color::Rgb(43, 43, 43),
                content: Color::Rgb(29, 30, 30),
                accent: Color::Rgb(31, 106, 165),
                text: Color::Rgb(220, 228, 238),
                muted: Color::Gray,
                card_fallback: Color::Rgb(60, 60, 60),
            },
            Theme::Light => Palette {
                topbar: Color::Rgb(219, 219, 219),
                sidebar: Color::Rgb(235, 235, 235),
                content: Color::Rgb(242, 242, 242),
                accent: Color::Rgb(58, 123, 213),
                text: Color::Rgb(26, 26, 26),
                muted: Color::DarkGray,
                card_fallback: Color::Rgb(200, 200, 200),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dark_stack_variant() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(SidebarLayout::default(), SidebarLayout::Stack);
    }

    #[test]
    fn test_palettes_differ_between_themes() {
        let dark = Theme::Dark.palette();
        let light = Theme::Light.palette();
        assert_ne!(dark.content, light.content);
        assert_ne!(dark.text, light.text);
    }

    #[test]
    fn test_theme_deserializes_lowercase() {
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
        let layout: SidebarLayout = serde_json::from_str("\"grid\"").unwrap();
        assert_eq!(layout, SidebarLayout::Grid);
    }
}
