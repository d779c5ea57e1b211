//! Custom widget style functions for the hardware theme.

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::spacing;
use super::{
    GRAY_50, GRAY_100, GRAY_200, GRAY_300, GRAY_500, GRAY_700, PRIMARY_100, PRIMARY_600, WHITE,
};

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - the active manufacturer filter.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: palette.primary.base.text,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.10),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(PRIMARY_600.into()),
            text_color: palette.primary.base.text,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(GRAY_300.into()),
            text_color: GRAY_500,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        },
    }
}

/// Secondary button style - inactive manufacturer filters.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: Some(WHITE.into()),
            text_color: GRAY_700,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 1.0,
                color: GRAY_300,
            },
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(GRAY_100.into()),
            text_color: palette.primary.base.color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 1.0,
                color: palette.primary.base.color,
            },
            ..Default::default()
        },
    }
}

/// Ghost button style - row detail toggles, search clear button.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.primary.base.color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(PRIMARY_100.into()),
            text_color: palette.primary.base.color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        },
    }
}

// =============================================================================
// TEXT INPUT
// =============================================================================

/// Default text input style - the search box.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let border_color = match status {
        text_input::Status::Focused { .. } => palette.primary.base.color,
        text_input::Status::Hovered => GRAY_500,
        _ => GRAY_300,
    };

    text_input::Style {
        background: WHITE.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: border_color,
        },
        icon: GRAY_500,
        placeholder: GRAY_500,
        value: palette.background.base.text,
        selection: PRIMARY_100,
    }
}

// =============================================================================
// CONTAINERS
// =============================================================================

/// Card container - the three page sections.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: GRAY_200,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Table header cell background.
pub fn table_header_cell(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(GRAY_100.into()),
        ..Default::default()
    }
}

/// Expanded detail panel below a table row.
pub fn detail_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(GRAY_50.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

// =============================================================================
// BADGES
// =============================================================================

/// Filled badge - manufacturer column, feature tags.
pub fn badge_secondary(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(GRAY_100.into()),
        text_color: Some(GRAY_700),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Outlined badge - supported CPU tags.
pub fn badge_outline(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        text_color: Some(GRAY_700),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: 1.0,
            color: GRAY_300,
        },
        ..Default::default()
    }
}
