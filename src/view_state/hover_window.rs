//! Windowed-mode label run around the hovered index
//!
//! When items are too dense to label individually, labels are stacked at a
//! fixed pitch (`font size + SQUEEZE`) centred on the hovered item. The run
//! is shifted as a whole so the hovered label is never clipped at either
//! edge, and labels that only partly fit are drawn lightened.

use crate::model::FlankLimit;
use crate::view_state::constants::SQUEEZE;
use crate::view_state::types::{EdgeOffsets, IndexRange, VisibleLabels};

/// Inputs for [`build_hover_window`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverWindowInput {
    /// Hovered index; must lie within `visible`.
    pub hover: usize,
    /// Map's pixel for the centre of the hovered item.
    pub hover_middle: i32,
    /// Items the map shows.
    pub visible: IndexRange,
    /// Font ascent in pixels.
    pub ascent: i32,
    /// Font point size.
    pub font_size: i32,
    /// Strip viewport length along the primary axis.
    pub viewport: i32,
    /// Pixel length of all items along the primary axis.
    pub content_extent: i32,
    /// Labels allowed either side of the hovered one.
    pub flank: FlankLimit,
}

/// One label slot in a hover window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverSlot {
    /// Item index.
    pub index: usize,
    /// Baseline pixel along the primary axis.
    pub baseline: i32,
    /// Partly outside the viewport; draw with reduced alpha.
    pub lightened: bool,
    /// Within the flank limit; text is drawn.
    pub drawn: bool,
}

/// Result of [`build_hover_window`].
///
/// # Invariants
/// - `capacity` lies within the visible range
/// - `drawn` lies within `capacity`
/// - `slots` are ordered by index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverWindow {
    /// Every slot the walk visited.
    pub slots: Vec<HoverSlot>,
    /// Fully visible labels within the flank.
    pub drawn: IndexRange,
    /// Top gap before the first drawn label and bottom gap after the last.
    pub drawn_offsets: EdgeOffsets,
    /// Fully visible labels, flank ignored.
    pub capacity: IndexRange,
    /// Offsets for `capacity`.
    pub capacity_offsets: EdgeOffsets,
}

impl HoverWindow {
    /// Write-back record for the axis map.
    pub fn visible_labels(&self) -> VisibleLabels {
        VisibleLabels {
            drawn: self.drawn,
            drawn_offsets: self.drawn_offsets,
            capacity: self.capacity,
            capacity_offsets: self.capacity_offsets,
            windowed: true,
        }
    }
}

/// Shift applied to every slot so the hovered label stays on screen.
pub fn edge_offset(hover_middle: i32, ascent: i32, viewport: i32) -> i32 {
    if hover_middle + ascent > viewport {
        hover_middle + ascent - viewport
    } else if hover_middle - ascent / 2 < 0 {
        hover_middle - ascent / 2
    } else {
        0
    }
}

/// Lay out the label run around `input.hover`.
pub fn build_hover_window(input: &HoverWindowInput) -> HoverWindow {
    let hover = input.hover.clamp(input.visible.first(), input.visible.last());
    let pitch = input.font_size + SQUEEZE;
    let ascent = input.ascent;
    let hover_y = input.hover_middle + ascent / 2;
    let edge = edge_offset(input.hover_middle, ascent, input.viewport);
    let baseline_of = |j: usize| -> i32 {
        let diff = j as i64 - hover as i64;
        let offset = i32::try_from(diff * i64::from(pitch)).unwrap_or(i32::MAX);
        hover_y.saturating_add(offset) - edge
    };
    let bottom_gap = |y: i32| input.viewport - ((y - ascent) + input.font_size);

    let mut drawn_first = hover;
    let mut drawn_last = hover;
    let mut capacity_first = hover;
    let mut capacity_last = hover;
    let mut drawn_offsets = EdgeOffsets::default();
    let mut capacity_offsets = EdgeOffsets::default();
    let mut backward = Vec::new();
    let mut forward = Vec::new();

    for j in (input.visible.first()..=hover).rev() {
        let y = baseline_of(j);
        if y <= -ascent / 2 {
            break;
        }
        let drawn = input.flank.allows(hover - j);
        let mut lightened = false;
        if y >= ascent {
            if drawn {
                drawn_first = j;
                drawn_offsets.leading = y - ascent;
            }
            capacity_first = j;
            capacity_offsets.leading = y - ascent;
        } else if j != hover {
            lightened = true;
        }
        if j == hover {
            drawn_offsets.trailing = bottom_gap(y);
            capacity_offsets.trailing = bottom_gap(y);
        }
        backward.push(HoverSlot {
            index: j,
            baseline: y,
            lightened,
            drawn,
        });
    }

    for j in hover + 1..=input.visible.last() {
        let y = baseline_of(j);
        if y >= input.content_extent + ascent / 2 {
            break;
        }
        let drawn = input.flank.allows(j - hover);
        let mut lightened = false;
        if y <= input.viewport {
            if drawn {
                drawn_last = j;
                drawn_offsets.trailing = bottom_gap(y);
            }
            capacity_last = j;
            capacity_offsets.trailing = bottom_gap(y);
        } else {
            lightened = true;
        }
        forward.push(HoverSlot {
            index: j,
            baseline: y,
            lightened,
            drawn,
        });
    }

    backward.reverse();
    backward.extend(forward);

    HoverWindow {
        slots: backward,
        drawn: IndexRange::new(drawn_first, drawn_last),
        drawn_offsets,
        capacity: IndexRange::new(capacity_first, capacity_last),
        capacity_offsets,
    }
}
