//! In-memory collaborators: a linear axis map, vector-backed labels, a set
//! selection, fixed-advance metrics and a surface that records draw calls.

use super::{
    AxisMap, DragMode, DragSelection, FontMetrics, LabelSource, PixelRect, Point, Rgba,
    SelectionSet, Surface, TextStyle, Transform,
};
use crate::model::{FontSpec, LookupError};
use crate::view_state::{IndexRange, VisibleLabels};
use std::collections::BTreeSet;

// ===== LinearAxisMap =====

/// Axis map with a constant number of pixels per item.
///
/// `index_of(pixel_of(i)) == i` holds for every valid `i` as long as the
/// scale is at least one pixel per item.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearAxisMap {
    total: usize,
    scale: f64,
    first_visible: usize,
    viewport: i32,
    hover: Option<usize>,
    hover_subtree: Option<IndexRange>,
    visible_labels: Option<VisibleLabels>,
}

impl LinearAxisMap {
    /// Map `total` items at `scale` pixels each into a viewport `viewport`
    /// pixels long, scrolled to the first item.
    pub fn new(total: usize, scale: f64, viewport: i32) -> Self {
        Self {
            total,
            scale: sanitize_scale(scale),
            first_visible: 0,
            viewport: viewport.max(0),
            hover: None,
            hover_subtree: None,
            visible_labels: None,
        }
    }

    /// Change the zoom level, keeping the first visible item.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = sanitize_scale(scale);
        self.scroll_to(self.first_visible);
    }

    /// Change the viewport length.
    pub fn set_viewport(&mut self, viewport: i32) {
        self.viewport = viewport.max(0);
        self.scroll_to(self.first_visible);
    }

    /// Viewport length in pixels.
    pub fn viewport(&self) -> i32 {
        self.viewport
    }

    /// Number of whole or partial items the viewport shows.
    pub fn items_per_viewport(&self) -> usize {
        ((f64::from(self.viewport) / self.scale).ceil() as usize).max(1)
    }

    /// Scroll so `first` is the first visible item, clamped so the viewport
    /// stays filled where possible.
    pub fn scroll_to(&mut self, first: usize) {
        let max_first = self.total.saturating_sub(self.items_per_viewport());
        self.first_visible = first.min(max_first);
    }

    /// Scroll by a signed number of items.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.first_visible.saturating_add_signed(delta);
        self.scroll_to(target);
    }

    /// Set or clear the hovered tree node's index range.
    pub fn set_hover_subtree(&mut self, range: Option<IndexRange>) {
        self.hover_subtree = range;
    }

    /// Labels last published by a strip.
    pub fn visible_labels(&self) -> Option<VisibleLabels> {
        self.visible_labels
    }
}

fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

impl AxisMap for LinearAxisMap {
    fn pixel_of(&self, index: usize) -> i32 {
        let items = index as f64 - self.first_visible as f64;
        (items * self.scale).ceil() as i32
    }

    fn index_of(&self, pixel: i32) -> usize {
        let offset = (f64::from(pixel) / self.scale).floor();
        let index = self.first_visible as f64 + offset;
        index.clamp(0.0, self.max_index() as f64) as usize
    }

    fn first_visible(&self) -> usize {
        self.first_visible.min(self.max_index())
    }

    fn last_visible(&self) -> usize {
        let last = self.first_visible + self.items_per_viewport() - 1;
        last.min(self.max_index()).max(self.first_visible())
    }

    fn max_index(&self) -> usize {
        self.total.saturating_sub(1)
    }

    fn total_items(&self) -> usize {
        self.total
    }

    fn scale(&self) -> f64 {
        self.scale
    }

    fn hover_index(&self) -> Option<usize> {
        self.hover
    }

    fn set_hover_index(&mut self, index: Option<usize>) {
        self.hover = index.filter(|&i| i < self.total);
    }

    fn hover_subtree(&self) -> Option<IndexRange> {
        self.hover_subtree
    }

    fn set_visible_labels(&mut self, labels: Option<VisibleLabels>) {
        self.visible_labels = labels;
    }
}

// ===== FieldLabels =====

/// Multi-field labels summarised by joining the included fields with `", "`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldLabels {
    rows: Vec<Vec<String>>,
    included: Vec<usize>,
}

impl FieldLabels {
    /// Labels with several fields per item, summarising `included` fields in
    /// the given order.
    pub fn new(rows: Vec<Vec<String>>, included: Vec<usize>) -> Self {
        Self { rows, included }
    }

    /// One field per item.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = names.into_iter().map(|n| vec![n.into()]).collect();
        Self::new(rows, vec![0])
    }

    /// Change which fields make up the summary.
    pub fn set_included(&mut self, included: Vec<usize>) {
        self.included = included;
    }

    /// Replace an item's fields.
    pub fn set_row(&mut self, index: usize, fields: Vec<String>) -> Result<(), LookupError> {
        let count = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(LookupError::IndexOutOfBounds { index, count })?;
        *row = fields;
        Ok(())
    }
}

impl LabelSource for FieldLabels {
    fn label_count(&self) -> usize {
        self.rows.len()
    }

    fn summary_of(&self, index: usize) -> Result<Option<String>, LookupError> {
        let row = self.rows.get(index).ok_or(LookupError::IndexOutOfBounds {
            index,
            count: self.rows.len(),
        })?;
        let parts: Vec<&str> = self
            .included
            .iter()
            .filter_map(|&field| row.get(field))
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(parts.join(", ")))
        }
    }
}

// ===== IndexSelection =====

/// Selection held as an ordered index set plus an optional pending drag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexSelection {
    selected: BTreeSet<usize>,
    drag: Option<DragSelection>,
}

impl IndexSelection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select one index.
    pub fn select(&mut self, index: usize) {
        self.selected.insert(index);
    }

    /// Deselect one index.
    pub fn deselect(&mut self, index: usize) {
        self.selected.remove(&index);
    }

    /// Flip one index.
    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected indices.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Start a drag at `anchor`.
    pub fn begin_drag(&mut self, anchor: usize, mode: DragMode) {
        self.drag = Some(DragSelection { anchor, mode });
    }

    /// Apply the pending drag over `anchor..=end` and clear it.
    pub fn commit_drag(&mut self, end: usize) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        for index in IndexRange::new(drag.anchor, end).indices() {
            match drag.mode {
                DragMode::Select => self.select(index),
                DragMode::Toggle => self.toggle(index),
                DragMode::Deselect => self.deselect(index),
            }
        }
    }

    /// Drop the pending drag without applying it.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }
}

impl SelectionSet for IndexSelection {
    fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    fn selected_range(&self) -> Option<IndexRange> {
        let first = self.selected.first()?;
        let last = self.selected.last()?;
        Some(IndexRange::new(*first, *last))
    }

    fn drag(&self) -> Option<DragSelection> {
        self.drag
    }
}

// ===== MonospaceMetrics =====

/// Fixed-advance metrics: every character is `3/5` of the point size wide
/// and the ascent is `4/5` of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonospaceMetrics;

impl FontMetrics for MonospaceMetrics {
    fn string_width(&self, text: &str, font: &FontSpec) -> i32 {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        let size = i32::try_from(font.size).unwrap_or(i32::MAX);
        chars.saturating_mul(size).saturating_mul(3) / 5
    }

    fn ascent(&self, font: &FontSpec) -> i32 {
        i32::try_from(font.size).unwrap_or(i32::MAX).saturating_mul(4) / 5
    }
}

// ===== RecordingSurface =====

/// A draw call captured by [`RecordingSurface`], with the transform that was
/// active when it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// `fill_rect` call.
    Fill {
        /// Rectangle in label space.
        rect: PixelRect,
        /// Fill colour.
        color: Rgba,
        /// Active transform.
        transform: Transform,
    },
    /// `draw_line` call.
    Line {
        /// Start point in label space.
        from: Point,
        /// End point in label space.
        to: Point,
        /// Line colour.
        color: Rgba,
        /// Active transform.
        transform: Transform,
    },
    /// `draw_text` call.
    Text {
        /// The text.
        text: String,
        /// Baseline origin in label space.
        origin: Point,
        /// Font and colour.
        style: TextStyle,
        /// Active transform.
        transform: Transform,
    },
}

/// Surface that records every call for later inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    transform: Transform,
    background: Rgba,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Rgba::WHITE)
    }
}

impl RecordingSurface {
    /// Empty recording with the given background colour.
    pub fn new(background: Rgba) -> Self {
        Self {
            ops: Vec::new(),
            transform: Transform::IDENTITY,
            background,
        }
    }

    /// Every recorded call, in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget recorded calls.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Text calls as `(text, origin, style)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, &TextStyle)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text {
                text,
                origin,
                style,
                ..
            } => Some((text.as_str(), *origin, style)),
            _ => None,
        })
    }

    /// Line calls as `(from, to, color)`.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, color, .. } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    /// Fill calls as `(rect, color)`.
    pub fn fills(&self) -> impl Iterator<Item = (PixelRect, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Fill { rect, color, .. } => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn background(&self) -> Rgba {
        self.background
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        self.ops.push(DrawOp::Fill {
            rect,
            color,
            transform: self.transform,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgba) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            transform: self.transform,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            origin,
            style: style.clone(),
            transform: self.transform,
        });
    }
}
