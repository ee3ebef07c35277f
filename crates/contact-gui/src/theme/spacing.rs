//! Spacing constants for consistent layout.
//!
//! All values are in pixels (f32).

/// Extra small spacing - label to input
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - input padding
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - gap between field groups
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - card padding
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins
pub const SPACING_XL: f32 = 32.0;

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards
pub const BORDER_RADIUS_MD: f32 = 6.0;

pub const BORDER_WIDTH_THIN: f32 = 1.0;

pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

/// Maximum width of the form column
pub const FORM_MAX_WIDTH: f32 = 560.0;
