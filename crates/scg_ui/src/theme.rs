//! Theme configuration for Swing Coach GUI.
//!
//! Colors, spacing, and font sizes, plus the container styles the views
//! share.

use iced::widget::container;
use iced::{Border, Color, Font};

/// Application theme colors (dark theme).
pub mod colors {
    use super::Color;

    /// Card/panel background
    pub const CARD: Color = Color::from_rgb(0.14, 0.14, 0.14);

    /// Success color (for the no-faults message)
    pub const SUCCESS: Color = Color::from_rgb(0.45, 0.75, 0.45);

    /// Error block background
    pub const ERROR: Color = Color::from_rgb(0.35, 0.18, 0.18);

    /// Error block border
    pub const ERROR_BORDER: Color = Color::from_rgb(0.60, 0.25, 0.25);

    /// Error block text
    pub const ERROR_TEXT: Color = Color::from_rgb(0.95, 0.80, 0.80);

    /// Secondary text
    pub const TEXT_MUTED: Color = Color::from_rgb(0.65, 0.65, 0.65);
}

/// Spacing scale in pixels.
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
}

/// Font sizes in pixels.
pub mod font {
    pub const SM: f32 = 12.0;
    pub const NORMAL: f32 = 14.0;
    pub const LG: f32 = 18.0;
    pub const XL: f32 = 22.0;
}

/// Bold variant of the default font.
pub fn bold() -> Font {
    Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Card container style for grouped sections.
pub fn card(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(colors::CARD.into()),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Visually distinct block for error details.
pub fn error_block(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(colors::ERROR.into()),
        text_color: Some(colors::ERROR_TEXT),
        border: Border {
            color: colors::ERROR_BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}
