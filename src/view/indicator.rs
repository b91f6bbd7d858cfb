//! Matrix-side margin of a strip: the indent blank, or the port indicator
//! when windowed labels span more than the hovered item.

use crate::host::{AxisMap, PixelRect, Surface};
use crate::model::Orientation;
use crate::view::styles::StripPalette;
use crate::view_state::constants::{INDICATOR_THICKNESS, LABEL_INDENT, MATRIX_BAR_THICKNESS};
use crate::view_state::{IndexRange, ScrollWindow};

/// Label-space x of a margin `thickness` wide on the matrix side.
///
/// Aligned strips have the matrix at the end of the text direction, opposed
/// strips at its start.
fn margin_x(orientation: Orientation, window: &ScrollWindow, thickness: i32) -> i32 {
    match orientation {
        Orientation::Aligned => window.end_position - thickness,
        Orientation::Opposed => window.end_gap,
    }
}

/// Blank the label indent on the matrix side so text never touches the
/// matrix.
pub fn draw_indent_blank(
    surface: &mut dyn Surface,
    orientation: Orientation,
    window: &ScrollWindow,
    primary_extent: i32,
) {
    let x = margin_x(orientation, window, LABEL_INDENT);
    let bg = surface.background();
    surface.fill_rect(PixelRect::new(x, 0, LABEL_INDENT, primary_extent), bg);
}

/// Where the port indicator goes and what it marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortIndicator {
    /// Strip orientation.
    pub orientation: Orientation,
    /// Current scroll window.
    pub window: ScrollWindow,
    /// Strip length along the primary axis.
    pub primary_extent: i32,
    /// Items whose labels were drawn.
    pub drawn: IndexRange,
    /// Hovered item.
    pub hover: usize,
}

/// Draw the port indicator.
///
/// A bar in the port accent covers the matrix pixels of the drawn labels,
/// and a tick in the hover colour marks the hovered item's pixels.
pub fn draw_port_indicator(
    surface: &mut dyn Surface,
    map: &dyn AxisMap,
    indicator: &PortIndicator,
    palette: &StripPalette,
) {
    let PortIndicator {
        orientation,
        ref window,
        primary_extent,
        drawn,
        hover,
    } = *indicator;
    let bg = surface.background();
    let strip_x = margin_x(orientation, window, INDICATOR_THICKNESS);
    surface.fill_rect(PixelRect::new(strip_x, 0, INDICATOR_THICKNESS, primary_extent), bg);

    let bar_x = margin_x(orientation, window, MATRIX_BAR_THICKNESS);
    let bar_top = map.pixel_of(drawn.first());
    let bar_bottom = map.pixel_of(drawn.last() + 1);
    surface.fill_rect(
        PixelRect::new(bar_x, bar_top, MATRIX_BAR_THICKNESS, bar_bottom - bar_top),
        palette.port_accent,
    );

    let tick_x = margin_x(orientation, window, MATRIX_BAR_THICKNESS + 1);
    let tick_top = map.pixel_of(hover);
    let tick_height = (map.pixel_of(hover + 1) - tick_top).max(1);
    surface.fill_rect(
        PixelRect::new(tick_x, tick_top, MATRIX_BAR_THICKNESS + 1, tick_height),
        palette.hover_text,
    );
}
