//! Theme module for Board Compat Browser.
//!
//! Provides the light "hardware" theme, the spacing scale, shared color
//! constants and the custom widget style functions. Style functions
//! receive `&Theme` and derive their colors from its extended palette
//! plus the constants below.

pub mod spacing;
mod styles;

pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_MD, BORDER_RADIUS_SM, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y,
};
pub use styles::{
    badge_outline, badge_secondary, button_ghost, button_primary, button_secondary, card,
    detail_panel, table_header_cell, text_input_default,
};

use iced::theme::Palette;
use iced::{Color, Theme};

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Near-white page background.
pub const GRAY_50: Color = Color::from_rgb(0.98, 0.98, 0.99);
/// Secondary surface background.
pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.97);
/// Subtle borders.
pub const GRAY_200: Color = Color::from_rgb(0.90, 0.90, 0.93);
/// Default borders.
pub const GRAY_300: Color = Color::from_rgb(0.82, 0.82, 0.86);
/// Muted text.
pub const GRAY_500: Color = Color::from_rgb(0.50, 0.50, 0.55);
/// Secondary text.
pub const GRAY_700: Color = Color::from_rgb(0.30, 0.30, 0.35);
/// Primary text.
pub const GRAY_900: Color = Color::from_rgb(0.10, 0.10, 0.12);
/// Elevated surface (cards).
pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

/// Light tint of the accent, for active filter buttons.
pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.91, 0.98);
/// Hardware blue accent.
pub const PRIMARY_500: Color = Color::from_rgb(0.13, 0.42, 0.80);
/// Accent hover shade.
pub const PRIMARY_600: Color = Color::from_rgb(0.10, 0.35, 0.70);

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the light hardware theme.
///
/// This returns a `Theme` whose `Palette` Iced expands into the
/// `ExtendedPalette` the widget style functions draw from.
pub fn browser_theme() -> Theme {
    Theme::custom(
        "Hardware Light".to_string(),
        Palette {
            background: GRAY_50,
            text: GRAY_900,
            primary: PRIMARY_500,
            success: Color::from_rgb(0.20, 0.70, 0.40),
            warning: Color::from_rgb(0.95, 0.65, 0.05),
            danger: Color::from_rgb(0.85, 0.25, 0.25),
        },
    )
}
