//! Label placement along the scrolled axis
//!
//! Label space runs along the text direction from 0 to the content breadth.
//! For aligned strips label space equals scroll space; for opposed strips
//! label coordinate `x` corresponds to scroll coordinate `content - x`. The
//! four orientation/justification combinations each get their own offset
//! function, selected from a table.

use crate::model::{Justification, Orientation};
use crate::view_state::scroll::ScrollWindow;
use tracing::warn;

/// What the offset functions need to place one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementInput {
    /// Current scroll window.
    pub window: ScrollWindow,
    /// Pixel length of the label text.
    pub label_length: i32,
    /// Margin reserved next to the matrix.
    pub shift: i32,
}

impl PlacementInput {
    /// Whether the label plus margin is longer than the visible breadth.
    pub fn overruns(&self) -> bool {
        self.label_length + self.shift > self.window.extent()
    }

    fn needed(&self) -> i32 {
        self.label_length + self.shift
    }
}

/// Computes a label's start coordinate in label space.
pub type OffsetFn = fn(&PlacementInput) -> i32;

fn aligned_start(p: &PlacementInput) -> i32 {
    let w = p.window;
    if p.overruns() {
        if w.end_position > p.needed() {
            w.end_position - p.needed()
        } else {
            0
        }
    } else {
        w.position
    }
}

fn aligned_end(p: &PlacementInput) -> i32 {
    let w = p.window;
    if p.overruns() {
        if w.position < w.content() - p.needed() {
            w.position
        } else {
            w.content() - p.needed()
        }
    } else {
        w.end_position - p.needed()
    }
}

fn opposed_start(p: &PlacementInput) -> i32 {
    let w = p.window;
    if p.overruns() {
        if w.position < w.content() - p.needed() {
            w.end_gap + w.extent() - p.label_length
        } else {
            p.shift
        }
    } else {
        w.end_gap + p.shift
    }
}

fn opposed_end(p: &PlacementInput) -> i32 {
    let w = p.window;
    if p.overruns() {
        if p.needed() >= w.end_position {
            w.content() - p.label_length
        } else {
            w.end_gap + p.shift
        }
    } else {
        w.end_gap + w.extent() - p.label_length
    }
}

/// Offset strategies indexed by `[orientation][justification]`.
const STRATEGIES: [[OffsetFn; 2]; 2] = [
    [aligned_start, aligned_end],
    [opposed_start, opposed_end],
];

/// Strategy for an orientation/justification pair.
pub fn strategy(orientation: Orientation, justification: Justification) -> OffsetFn {
    let row = match orientation {
        Orientation::Aligned => 0,
        Orientation::Opposed => 1,
    };
    let col = match justification {
        Justification::Start => 0,
        Justification::End => 1,
    };
    STRATEGIES[row][col]
}

/// Start coordinate of a label in label space, never negative.
///
/// A negative result means the window and the content disagree, which is a
/// bug upstream; it is clamped to 0 and logged.
pub fn label_start_offset(
    orientation: Orientation,
    justification: Justification,
    input: &PlacementInput,
) -> i32 {
    let offset = strategy(orientation, justification)(input);
    if offset < 0 {
        warn!(
            offset,
            ?orientation,
            ?justification,
            window = ?input.window,
            label_length = input.label_length,
            "Negative label offset clamped to 0"
        );
        0
    } else {
        offset
    }
}

/// Which way an overrun arrow points in label space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    /// Points toward lower label coordinates.
    Backward,
    /// Points toward higher label coordinates.
    Forward,
}

/// An arrow marking text hidden beyond a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverrunArrow {
    /// Direction the arrow points.
    pub direction: ArrowDirection,
    /// Label-space coordinate of the arrow tip.
    pub tip: i32,
}

/// Arrows for a label starting at `start`. Empty unless the label overruns.
pub fn overrun_arrows(
    orientation: Orientation,
    input: &PlacementInput,
    start: i32,
) -> Vec<OverrunArrow> {
    let mut arrows = Vec::with_capacity(2);
    if !input.overruns() {
        return arrows;
    }
    let w = input.window;
    let end_of_text = start + input.label_length;
    match orientation {
        Orientation::Aligned => {
            if w.end_position - input.shift < end_of_text {
                arrows.push(OverrunArrow {
                    direction: ArrowDirection::Forward,
                    tip: w.end_position - input.shift - 1,
                });
            }
            if w.position > start {
                arrows.push(OverrunArrow {
                    direction: ArrowDirection::Backward,
                    tip: w.position,
                });
            }
        }
        Orientation::Opposed => {
            if w.position > w.content() - end_of_text {
                arrows.push(OverrunArrow {
                    direction: ArrowDirection::Forward,
                    tip: w.content() - w.position,
                });
            }
            if w.end_gap + input.shift > start {
                arrows.push(OverrunArrow {
                    direction: ArrowDirection::Backward,
                    tip: w.end_gap + input.shift + 1,
                });
            }
        }
    }
    arrows
}
