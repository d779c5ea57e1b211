//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Full/pill radius - tags, badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// TABLE METRICS
// =============================================================================

/// Horizontal padding inside a table cell
pub const TABLE_CELL_PADDING_X: f32 = 12.0;

/// Vertical padding inside a table cell
pub const TABLE_CELL_PADDING_Y: f32 = 8.0;
