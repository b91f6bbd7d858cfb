//! Collaborators the label strip renders against.
//!
//! The strip never owns the index↔pixel mapping, the label data, the
//! selection, font measurement or the drawing target. Hosting applications
//! provide them through these traits; [`memory`] has small in-memory
//! implementations used by tests, benchmarks and the terminal demo.

pub mod geometry;
pub mod memory;

pub use geometry::{PixelRect, Point, Rgba, Transform};

use crate::model::{FontSpec, LookupError};
use crate::view_state::{IndexRange, VisibleLabels};

/// Index↔pixel mapping along the strip's primary axis.
///
/// Pixels are relative to the strip viewport's start edge, so labels scrolled
/// out of view map to negative pixels or pixels past the viewport.
pub trait AxisMap {
    /// Pixel where item `index` starts. Defined for `index == max_index() + 1`
    /// so callers can compute tile heights.
    fn pixel_of(&self, index: usize) -> i32;

    /// Item under `pixel`, clamped to `[min_index, max_index]`.
    fn index_of(&self, pixel: i32) -> usize;

    /// Pixel at the centre of item `index`.
    fn middle_pixel(&self, index: usize) -> i32 {
        (self.pixel_of(index) + self.pixel_of(index + 1)) / 2
    }

    /// First item at least partly inside the viewport.
    fn first_visible(&self) -> usize;

    /// Last item at least partly inside the viewport.
    fn last_visible(&self) -> usize;

    /// Smallest valid index.
    fn min_index(&self) -> usize {
        0
    }

    /// Largest valid index. Meaningless when `total_items() == 0`.
    fn max_index(&self) -> usize;

    /// Number of items on the axis.
    fn total_items(&self) -> usize;

    /// Pixels per item at the current zoom level.
    fn scale(&self) -> f64;

    /// Item under the pointer, if any.
    fn hover_index(&self) -> Option<usize>;

    /// Record the item under the pointer.
    fn set_hover_index(&mut self, index: Option<usize>);

    /// Index range of the tree node under the pointer, if any.
    fn hover_subtree(&self) -> Option<IndexRange>;

    /// Publish which labels are on screen. `None` while the zoom hint shows.
    fn set_visible_labels(&mut self, labels: Option<VisibleLabels>);
}

/// Source of per-item label text.
pub trait LabelSource {
    /// Number of labels.
    fn label_count(&self) -> usize;

    /// Summary text for item `index`, or `Ok(None)` when the item has no
    /// label.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::IndexOutOfBounds`] for indices past the end.
    fn summary_of(&self, index: usize) -> Result<Option<String>, LookupError>;
}

/// How a drag-in-progress affects the labels it sweeps over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// Swept labels become selected.
    Select,
    /// Swept labels flip their selection state.
    Toggle,
    /// Swept labels become deselected.
    Deselect,
}

/// A selection drag that has not been committed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragSelection {
    /// Index where the drag started. The other end is the hovered index.
    pub anchor: usize,
    /// What the drag will do when released.
    pub mode: DragMode,
}

/// Read access to the current selection.
pub trait SelectionSet {
    /// Whether item `index` is selected.
    fn is_selected(&self, index: usize) -> bool;

    /// Smallest range covering every selected item.
    fn selected_range(&self) -> Option<IndexRange>;

    /// The drag in progress, if any.
    fn drag(&self) -> Option<DragSelection>;
}

/// Text measurement.
pub trait FontMetrics {
    /// Advance width of `text` in pixels.
    fn string_width(&self, text: &str, font: &FontSpec) -> i32;

    /// Distance from baseline to the top of capitals, in pixels.
    fn ascent(&self, font: &FontSpec) -> i32;
}

/// Style for a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    /// Font to draw with.
    pub font: FontSpec,
    /// Foreground colour; alpha below 255 blends with what is underneath.
    pub color: Rgba,
}

/// A 2-D drawing target.
///
/// All coordinates passed to drawing calls are in label space and pass
/// through the current [`Transform`] before reaching the target.
pub trait Surface {
    /// Current label-to-surface transform.
    fn transform(&self) -> Transform;

    /// Replace the label-to-surface transform.
    fn set_transform(&mut self, transform: Transform);

    /// Colour the surface is cleared to.
    fn background(&self) -> Rgba;

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba);

    /// Draw a one pixel wide line between two points, ends included.
    fn draw_line(&mut self, from: Point, to: Point, color: Rgba);

    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
}
