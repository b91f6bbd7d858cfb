//! Pixel geometry shared by layout, placement and drawing.

/// Extra pixels between windowed labels, added to the font size to get the
/// label pitch.
pub const SQUEEZE: i32 = 1;

/// Point size of the zoom hint.
pub const HINT_FONT_SIZE: u32 = 14;

/// Thickness of the accent bar drawn along the matrix edge in windowed mode.
pub const MATRIX_BAR_THICKNESS: i32 = 3;

/// How far the position indicator protrudes past the bar.
pub const INDICATOR_PROTRUSION: i32 = 0;

/// Blank margin between the matrix and the label text.
pub const LABEL_INDENT: i32 = 3;

/// Full margin reserved for the position indicator in windowed mode.
pub const INDICATOR_THICKNESS: i32 = MATRIX_BAR_THICKNESS + INDICATOR_PROTRUSION + LABEL_INDENT;

/// Label scroll step per mouse wheel notch.
pub const WHEEL_SCROLL_STEP: i32 = 6;

/// Text drawn for labels whose summary is absent.
pub const PLACEHOLDER_LABEL: &str = "No Label";

/// Text drawn when the strip is too dense to label.
pub const ZOOM_HINT: &str = "Zoom, reduce font, or hover & hit spacebar to see labels";
