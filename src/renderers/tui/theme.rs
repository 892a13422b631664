//! TUI design system: colors, styles and symbols shared by the views

use crate::types::Weight;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the browser
pub struct TuiTheme;

impl TuiTheme {
    // Primary Colors
    pub const FOCUS: Color = Color::Rgb(97, 175, 239); // Bright Blue
    pub const SUCCESS: Color = Color::Rgb(152, 195, 121); // Green
    pub const WARNING: Color = Color::Rgb(229, 192, 123); // Yellow
    pub const ERROR: Color = Color::Rgb(224, 108, 117); // Red
    pub const INFO: Color = Color::Rgb(198, 120, 221); // Purple

    // UI Colors
    pub const TEXT_PRIMARY: Color = Color::Rgb(171, 178, 191); // Light Gray
    pub const TEXT_SECONDARY: Color = Color::Rgb(92, 99, 112); // Dark Gray
    pub const BACKGROUND_SELECTED: Color = Color::Rgb(61, 67, 81); // Selected Background
    pub const BORDER_NORMAL: Color = Color::Rgb(92, 99, 112); // Normal Border
    pub const BORDER_FOCUSED: Color = Color::Rgb(97, 175, 239); // Focused Border

    /// Style for a point's weight badge. High weight is the alert style,
    /// low weight the positive one; everything else gets the medium style.
    pub fn weight_style(weight: Weight) -> Style {
        match weight {
            Weight::High => Style::default().fg(Self::ERROR),
            Weight::Low => Style::default().fg(Self::SUCCESS),
            Weight::Medium => Style::default().fg(Self::WARNING),
        }
    }

    /// Style for the active tab
    pub fn active_tab_style() -> Style {
        Style::default()
            .fg(Self::FOCUS)
            .bg(Self::BACKGROUND_SELECTED)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for inactive tabs
    pub fn inactive_tab_style() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn error_style() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn warning_style() -> Style {
        Style::default()
            .fg(Self::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success_style() -> Style {
        Style::default()
            .fg(Self::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info_style() -> Style {
        Style::default().fg(Self::INFO)
    }

    pub fn primary_text_style() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn secondary_text_style() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// A focused block with highlighted border
    pub fn focused_block(title: &str) -> Block {
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(Self::BORDER_FOCUSED)
                    .add_modifier(Modifier::BOLD),
            )
            .title_style(Style::default().fg(Self::FOCUS).add_modifier(Modifier::BOLD))
    }

    /// A normal block with standard styling
    pub fn normal_block(title: &str) -> Block {
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Self::BORDER_NORMAL))
            .title_style(Style::default().fg(Self::TEXT_PRIMARY))
    }
}

/// Symbols shared with the text report where it makes sense
pub struct UiSymbols;

impl UiSymbols {
    pub const PRO: &'static str = "\u{2713}";
    pub const CON: &'static str = "\u{2717}";
    pub const BULLET: &'static str = "\u{2022}";
    pub const WARNING: &'static str = "\u{26a0}";
    pub const INFO: &'static str = "\u{2139}";
    pub const POINTER: &'static str = "\u{25ba}";
}

/// Key hint formatting for the status bar and help overlay
pub struct KeyHints;

impl KeyHints {
    pub fn format_key_hints(hints: &[(&str, &str)]) -> String {
        hints
            .iter()
            .map(|(key, desc)| format!("[{}] {}", key, desc))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn browser_help() -> Vec<(&'static str, &'static str)> {
        vec![
            ("\u{2190}\u{2192}/Tab", "Switch topic"),
            ("1-9", "Jump to topic"),
            ("\u{2191}\u{2193}", "Scroll"),
            ("s", "Save report"),
            ("F1", "Help"),
            ("q", "Quit"),
        ]
    }
}
