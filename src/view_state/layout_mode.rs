//! Per-frame layout mode selection

use crate::model::{FlankLimit, FontAttributes};
use crate::view_state::constants::{INDICATOR_THICKNESS, LABEL_INDENT, SQUEEZE};

/// How a frame lays its labels out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Every visible item has room for its own label at its map position.
    Fitted,
    /// Items are too dense; a run of labels follows the hovered item.
    Windowed,
    /// Items are too dense and the label port is inactive; show the zoom
    /// hint.
    Hint,
}

impl LayoutMode {
    /// Whether any labels are drawn.
    pub fn draws_labels(self) -> bool {
        !matches!(self, Self::Hint)
    }
}

/// Smallest tile, in pixels, that fits a label.
pub fn min_tile_height(font: &FontAttributes) -> u32 {
    let size = if font.fixed { font.size } else { font.min_size };
    size + SQUEEZE.unsigned_abs()
}

/// Font size a non-fixed font adopts at `scale` pixels per item.
///
/// Fixed fonts keep their size.
pub fn adapted_font_size(font: &FontAttributes, scale: f64) -> u32 {
    if font.fixed {
        return font.size;
    }
    let target = (scale - f64::from(SQUEEZE)).floor();
    let min = f64::from(font.min_size);
    let max = f64::from(font.max_size.max(font.min_size));
    target.clamp(min, max) as u32
}

/// Choose the layout for a frame. Pure; never touches scroll state.
///
/// `port_active` is true when the label port is enabled and the pointer is
/// over a view linked to this strip.
pub fn select_layout_mode(scale: f64, font: &FontAttributes, port_active: bool) -> LayoutMode {
    if scale >= f64::from(min_tile_height(font)) {
        LayoutMode::Fitted
    } else if port_active {
        LayoutMode::Windowed
    } else {
        LayoutMode::Hint
    }
}

/// Margin reserved between the matrix edge and the label text.
///
/// Windowed frames reserve room for the position indicator unless the flank
/// is zero, in which case no indicator is drawn.
pub fn shift_margin(mode: LayoutMode, flank: FlankLimit) -> i32 {
    if mode == LayoutMode::Windowed && !flank.is_zero() {
        INDICATOR_THICKNESS
    } else {
        LABEL_INDENT
    }
}
