//! Overrun arrows: triangles built from vertical line segments, marking that
//! a label continues past the visible edge.

use crate::host::{PixelRect, Point, Rgba, Surface};
use crate::view_state::{ArrowDirection, OverrunArrow};

/// Draw `arrow` in label space for a label whose glyph box starts at
/// `y_top` and is `height` pixels tall.
///
/// The text under the arrow is blanked with `background` first. The
/// triangle itself is built from vertical lines shrinking by two pixels per
/// column towards the tip; labels shorter than three pixels only get the
/// blanking patch.
pub fn draw_arrow(
    surface: &mut dyn Surface,
    arrow: OverrunArrow,
    y_top: i32,
    height: i32,
    color: Rgba,
    background: Rgba,
) {
    let patch = match arrow.direction {
        ArrowDirection::Backward => PixelRect::new(arrow.tip, y_top - 2, height / 2 + 1, height + 3),
        ArrowDirection::Forward => {
            PixelRect::new(arrow.tip - height / 2, y_top - 2, height / 2 + 3, height + 3)
        }
    };
    surface.fill_rect(patch, background);

    let mut h = height - 2;
    if h % 2 == 0 {
        h -= 1;
    }
    if h < 1 {
        return;
    }

    let half = h / 2;
    for step in 0..=half {
        let x = match arrow.direction {
            ArrowDirection::Backward => arrow.tip + half - step,
            ArrowDirection::Forward => arrow.tip - half + step,
        };
        let top = y_top + step;
        let length = h - 2 * step;
        surface.draw_line(Point::new(x, top), Point::new(x, top + length), color);
    }
}
