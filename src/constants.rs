//! Sizing, color, and styling constants for the picker views.

use floem::peniko::Color;

/// Width of the hue and alpha strips
pub const STRIP_WIDTH: f64 = 18.0;

/// Knob ring radius on the plane
pub const KNOB_RADIUS: f64 = 7.0;

/// Knob bar height on the strips
pub const BAR_HEIGHT: f64 = 6.0;

/// Border radius for controls and fields
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding inside the dropdowns
pub const PADDING: f32 = 8.0;

/// Preview input width
pub const PREVIEW_WIDTH: f32 = 200.0;

/// Preview input and trigger height
pub const PREVIEW_HEIGHT: f32 = 30.0;

/// Number field width
pub const INPUT_WIDTH: f32 = 34.0;

/// Hex field width
pub const HEX_INPUT_WIDTH: f32 = 64.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Pixels per rem, for the presets grid metrics
pub const REM: f64 = 16.0;

/// Checkerboard cell size (for alpha backgrounds)
pub const CHECKER_CELL: f64 = 5.0;

pub const DARK_BG: Color = Color::rgb8(32, 32, 36);
pub const LIGHT_BG: Color = Color::rgb8(242, 242, 242);
pub const DARK_FG: Color = Color::rgb8(230, 230, 230);
pub const LIGHT_FG: Color = Color::rgb8(40, 40, 40);
pub const BORDER: Color = Color::rgb8(180, 180, 180);
pub const MUTED: Color = Color::rgb8(120, 120, 120);
