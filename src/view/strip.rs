//! Label strip orchestration
//!
//! [`LabelStrip`] owns what one strip remembers between frames: the
//! longest-label cache, the viewport tracker, the scroll window, the port
//! settings and the hover animation. Each [`LabelStrip::render`] call picks a
//! layout mode, reconciles scrolling and paints through a [`Surface`].
//!
//! # Coordinates
//!
//! Labels are painted in *label space*: `x` runs along the text from 0 to the
//! content breadth and `y` runs along the primary axis in map pixels. Row
//! strips translate label space by the scroll position. Column strips turn
//! it a quarter so text reads upwards with its start next to the matrix.

use crate::host::{
    AxisMap, DragMode, FontMetrics, LabelSource, PixelRect, Point, Rgba, SelectionSet, Surface,
    TextStyle, Transform,
};
use crate::model::{
    FlankLimit, FontAttributes, FontChange, FontSpec, FontStyle, Justification, Orientation,
    StripAxis,
};
use crate::state::{HoverAnimation, LinkedViewPresence, PortSettings, Tick};
use crate::view::indicator::{draw_indent_blank, draw_port_indicator, PortIndicator};
use crate::view::overrun::draw_arrow;
use crate::view::styles::{lighten, StripPalette};
use crate::view_state::constants::{HINT_FONT_SIZE, SQUEEZE, WHEEL_SCROLL_STEP, ZOOM_HINT};
use crate::view_state::{
    adapted_font_size, build_hover_window, label_start_offset, label_text, overrun_arrows,
    select_layout_mode, shift_margin, HoverWindowInput, IndexRange, LayoutMode,
    LongestLabelCache, PlacementInput, ScrollAnchor, ScrollState, ScrollWindow,
    ViewportDimensions, ViewportTracker, VisibleLabels,
};
use std::time::Instant;
use tracing::{debug, info, trace};

/// Collaborators a strip renders against.
pub struct StripContext<'a> {
    /// Index↔pixel mapping of the strip's axis. Receives the visible-label
    /// write-back.
    pub map: &'a mut dyn AxisMap,
    /// Label text.
    pub labels: &'a dyn LabelSource,
    /// Selected indices and any drag in progress.
    pub selection: &'a dyn SelectionSet,
    /// Text measurement.
    pub metrics: &'a dyn FontMetrics,
}

/// What a frame did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameReport {
    /// Layout mode used.
    pub mode: LayoutMode,
    /// Scroll window the labels were placed in; `None` for the hint.
    pub window: Option<ScrollWindow>,
    /// Labels published to the axis map.
    pub visible: Option<VisibleLabels>,
    /// Point size labels were drawn at.
    pub font_size: u32,
}

fn px(size: u32) -> i32 {
    i32::try_from(size).unwrap_or(i32::MAX)
}

/// One axis's label strip.
#[derive(Debug, Clone)]
pub struct LabelStrip {
    axis: StripAxis,
    justification: Justification,
    port: PortSettings,
    font: FontAttributes,
    palette: StripPalette,
    longest: LongestLabelCache,
    tracker: ViewportTracker,
    scroll: ScrollState,
    measured: Option<(i32, i32)>,
    animation: HoverAnimation,
    presence: LinkedViewPresence,
    last_mode: Option<LayoutMode>,
}

impl LabelStrip {
    /// A strip with unset scroll state and an idle hover animation.
    pub fn new(
        axis: StripAxis,
        justification: Justification,
        port: PortSettings,
        font: FontAttributes,
    ) -> Self {
        Self {
            axis,
            justification,
            port,
            font: font.normalized(),
            palette: StripPalette::default(),
            longest: LongestLabelCache::new(),
            tracker: ViewportTracker::new(),
            scroll: ScrollState::new(),
            measured: None,
            animation: HoverAnimation::new(),
            presence: LinkedViewPresence::new(),
            last_mode: None,
        }
    }

    /// Replace the colours.
    pub fn with_palette(mut self, palette: StripPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Which axis this strip labels.
    pub fn axis(&self) -> StripAxis {
        self.axis
    }

    /// Current justification.
    pub fn justification(&self) -> Justification {
        self.justification
    }

    /// Current label port settings.
    pub fn port(&self) -> PortSettings {
        self.port
    }

    /// Configured font. Non-fixed fonts are drawn at a size adapted to the
    /// map scale; see [`LabelStrip::font_size_for`].
    pub fn font(&self) -> &FontAttributes {
        &self.font
    }

    /// Colours in use.
    pub fn palette(&self) -> &StripPalette {
        &self.palette
    }

    /// Current scroll window, `None` until the first labelled frame or after
    /// a reset.
    pub fn scroll_window(&self) -> Option<ScrollWindow> {
        self.scroll.window()
    }

    /// Mode of the last rendered frame.
    pub fn layout_mode(&self) -> Option<LayoutMode> {
        self.last_mode
    }

    /// Windowed labels may be shown: the port is enabled and the pointer is
    /// over a linked view.
    pub fn is_port_active(&self) -> bool {
        self.port.enabled && self.presence.is_over()
    }

    /// Point size labels are drawn at for a map scale.
    pub fn font_size_for(&self, scale: f64) -> u32 {
        adapted_font_size(&self.font, scale)
    }

    fn anchor(&self) -> ScrollAnchor {
        ScrollAnchor::for_layout(self.justification, self.axis.orientation())
    }

    // ===== Settings =====

    /// Change justification. The scroll window is kept and re-derived
    /// against the new anchor on the next frame.
    pub fn set_justification(&mut self, justification: Justification) {
        if justification != self.justification {
            debug!(axis = self.axis.name(), ?justification, "Justification changed");
            self.justification = justification;
        }
    }

    /// Flip between start and end justification.
    pub fn toggle_justification(&mut self) -> Justification {
        self.set_justification(self.justification.toggled());
        self.justification
    }

    /// Replace the port settings. Resets scrolling when the effective port
    /// mode changes.
    pub fn set_port_settings(&mut self, port: PortSettings) {
        if port.enabled != self.port.enabled || port.effective_flank() != self.port.effective_flank()
        {
            self.scroll.reset();
        }
        self.port = port;
    }

    /// Advance the port mode cycle and reset scrolling.
    pub fn on_mode_toggle(&mut self) -> PortSettings {
        self.port.cycle();
        self.scroll.reset();
        info!(
            axis = self.axis.name(),
            enabled = self.port.enabled,
            flank = ?self.port.effective_flank(),
            "Label port mode toggled"
        );
        self.port
    }

    /// Apply new font attributes.
    ///
    /// A face or style change resets scrolling. A size-only change keeps the
    /// window; the longest label is remeasured on the next frame.
    pub fn on_font_changed(&mut self, font: FontAttributes) -> FontChange {
        let font = font.normalized();
        let change = font.change_from(&self.font);
        if change == FontChange::FaceOrStyle {
            debug!(axis = self.axis.name(), face = %font.face, "Font face or style changed");
            self.scroll.reset();
        }
        self.font = font;
        change
    }

    /// The label source changed: forget the longest label and reset
    /// scrolling.
    pub fn on_data_changed(&mut self) {
        debug!(axis = self.axis.name(), "Label data changed");
        self.longest.invalidate();
        self.measured = None;
        self.scroll.reset();
    }

    // ===== Scrolling =====

    /// The strip's breadth along the text direction changed. Re-derives the
    /// window immediately when one exists.
    pub fn on_viewport_resized(&mut self, secondary: i32) -> Option<ScrollWindow> {
        if !self.tracker.observe_viewport(secondary) {
            return self.scroll.window();
        }
        let (longest, shift) = self.measured?;
        self.tracker.observe_content(longest, shift);
        let anchor = self.anchor();
        self.scroll
            .adjust(anchor, self.tracker.content(), self.tracker.viewport());
        self.scroll.window()
    }

    /// Forget the window; the next labelled frame starts at the anchored end.
    pub fn reset_scroll(&mut self) {
        self.scroll.reset();
    }

    /// Scroll to an absolute position. `None` before the first labelled
    /// frame, when the breadths are not known yet.
    pub fn scroll_to(&mut self, position: i32) -> Option<ScrollWindow> {
        if !self.tracker.is_primed() {
            return None;
        }
        Some(
            self.scroll
                .scroll_to(position, self.tracker.content(), self.tracker.viewport()),
        )
    }

    /// Scroll by a signed number of pixels.
    pub fn scroll_by(&mut self, delta: i32) -> Option<ScrollWindow> {
        if !self.tracker.is_primed() {
            return None;
        }
        Some(
            self.scroll
                .scroll_by(delta, self.tracker.content(), self.tracker.viewport()),
        )
    }

    /// Scroll by wheel notches.
    pub fn scroll_wheel(&mut self, notches: i32) -> Option<ScrollWindow> {
        self.scroll_by(notches.saturating_mul(WHEEL_SCROLL_STEP))
    }

    // ===== Hover =====

    /// Hover the item under a primary-axis pixel, or clear the hover.
    /// Returns the hovered index.
    pub fn set_hover_pixel(&self, map: &mut dyn AxisMap, pixel: Option<i32>) -> Option<usize> {
        let index = pixel
            .filter(|&p| p >= 0 && p < map.pixel_of(map.last_visible() + 1))
            .map(|p| map.index_of(p));
        map.set_hover_index(index);
        index
    }

    /// The pointer entered a view linked to this strip.
    pub fn pointer_entered_linked_view(&mut self, now: Instant) {
        self.presence.enter();
        self.animation.update(true, now);
    }

    /// The pointer left the linked views. Takes effect after a short linger.
    pub fn pointer_left_linked_view(&mut self, now: Instant) {
        self.presence.leave(now);
    }

    /// Advance presence and the hover animation to `now`. Returns true when
    /// the strip should repaint.
    pub fn poll_animation(&mut self, now: Instant) -> bool {
        let left = self.presence.poll(now);
        if left {
            self.animation.request_stop();
        }
        let tick = self.animation.poll(now);
        left || tick == Tick::Repaint
    }

    /// Earliest instant [`LabelStrip::poll_animation`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.animation.next_deadline(), self.presence.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ===== Rendering =====

    fn device_rect(&self, viewport: ViewportDimensions) -> PixelRect {
        match self.axis {
            StripAxis::Rows => PixelRect::new(0, 0, viewport.secondary, viewport.primary),
            StripAxis::Columns => PixelRect::new(0, 0, viewport.primary, viewport.secondary),
        }
    }

    fn label_transform(&self, window: &ScrollWindow) -> Transform {
        match self.axis.orientation() {
            Orientation::Aligned => Transform::translate(-window.position, 0),
            Orientation::Opposed => Transform::quarter_turn(window.content() - window.position),
        }
    }

    /// Paint one frame and publish the visible labels to the axis map.
    ///
    /// The surface's transform is restored before returning.
    pub fn render(
        &mut self,
        ctx: &mut StripContext<'_>,
        surface: &mut dyn Surface,
        viewport: ViewportDimensions,
    ) -> FrameReport {
        let saved = surface.transform();
        surface.set_transform(Transform::IDENTITY);
        let background = surface.background();
        surface.fill_rect(self.device_rect(viewport), background);

        let scale = ctx.map.scale();
        let font_size = self.font_size_for(scale);
        let mode = select_layout_mode(scale, &self.font, self.is_port_active());
        if self.last_mode != Some(mode) {
            debug!(axis = self.axis.name(), ?mode, scale, "Layout mode changed");
            self.last_mode = Some(mode);
        }

        let (window, visible) = if !mode.draws_labels() {
            self.paint_hint(surface, ctx.metrics, viewport);
            (None, None)
        } else if ctx.map.total_items() == 0 {
            (None, None)
        } else {
            let font = self.font.spec().with_size(font_size);
            let (window, shift) = self.sync_scroll(ctx, &font, mode, viewport.secondary);
            surface.set_transform(self.label_transform(&window));
            let visible = self.paint_labels(ctx, surface, mode, window, shift, font, viewport);
            (Some(window), Some(visible))
        };

        ctx.map.set_visible_labels(visible);
        surface.set_transform(saved);
        trace!(axis = self.axis.name(), ?mode, ?window, "Strip rendered");
        FrameReport {
            mode,
            window,
            visible,
            font_size,
        }
    }

    fn sync_scroll(
        &mut self,
        ctx: &StripContext<'_>,
        font: &FontSpec,
        mode: LayoutMode,
        secondary: i32,
    ) -> (ScrollWindow, i32) {
        let longest = self.longest.longest_length(ctx.labels, ctx.metrics, font);
        let shift = shift_margin(mode, self.port.effective_flank());
        self.measured = Some((longest, shift));
        self.tracker.observe_viewport(secondary);
        if self.tracker.observe_content(longest, shift) {
            debug!(
                axis = self.axis.name(),
                content = self.tracker.content(),
                previous = ?self.tracker.previous_content(),
                "Label content breadth changed"
            );
        }
        let anchor = self.anchor();
        let window = self
            .scroll
            .reconcile(anchor, self.tracker.content(), self.tracker.viewport());
        (window, shift)
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_labels(
        &self,
        ctx: &StripContext<'_>,
        surface: &mut dyn Surface,
        mode: LayoutMode,
        window: ScrollWindow,
        shift: i32,
        font: FontSpec,
        viewport: ViewportDimensions,
    ) -> VisibleLabels {
        let map: &dyn AxisMap = &*ctx.map;
        let visible = IndexRange::new(map.first_visible(), map.last_visible());
        let windowed = mode == LayoutMode::Windowed;
        let hover = if windowed {
            let h = map.hover_index().unwrap_or(visible.first());
            Some(h.clamp(visible.first(), visible.last()))
        } else {
            map.hover_index()
        };

        let painter = Painter {
            orientation: self.axis.orientation(),
            justification: self.justification,
            window,
            shift,
            hover_font: font.with_style(font.style.emboldened()),
            ascent: ctx.metrics.ascent(&font),
            font_size: px(font.size),
            font,
            palette: &self.palette,
            windowed,
            flank: self.port.effective_flank(),
            hover,
            subtree: map.hover_subtree(),
            labels: ctx.labels,
            selection: ctx.selection,
            metrics: ctx.metrics,
        };

        match hover.filter(|_| windowed) {
            Some(h) => painter.paint_windowed(surface, map, h, visible, viewport.primary),
            None => painter.paint_fitted(surface, map, visible, viewport.primary),
        }
    }

    fn paint_hint(
        &self,
        surface: &mut dyn Surface,
        metrics: &dyn FontMetrics,
        viewport: ViewportDimensions,
    ) {
        let font = FontSpec::new(self.font.face.clone(), FontStyle::Plain, HINT_FONT_SIZE);
        let transform = match self.axis {
            StripAxis::Rows => Transform::quarter_turn(viewport.primary),
            StripAxis::Columns => Transform::IDENTITY,
        };
        surface.set_transform(transform);
        let width = metrics.string_width(ZOOM_HINT, &font);
        let origin = Point::new((viewport.primary - width) / 2, viewport.secondary / 2);
        let style = TextStyle {
            font,
            color: self.palette.hint_text,
        };
        surface.draw_text(ZOOM_HINT, origin, &style);
    }
}

/// Per-frame drawing state shared by every label of the frame.
struct Painter<'p> {
    orientation: Orientation,
    justification: Justification,
    window: ScrollWindow,
    shift: i32,
    font: FontSpec,
    hover_font: FontSpec,
    ascent: i32,
    font_size: i32,
    palette: &'p StripPalette,
    windowed: bool,
    flank: FlankLimit,
    hover: Option<usize>,
    subtree: Option<IndexRange>,
    labels: &'p dyn LabelSource,
    selection: &'p dyn SelectionSet,
    metrics: &'p dyn FontMetrics,
}

impl Painter<'_> {
    fn paint_fitted(
        &self,
        surface: &mut dyn Surface,
        map: &dyn AxisMap,
        visible: IndexRange,
        primary: i32,
    ) -> VisibleLabels {
        for index in visible.indices() {
            let y_top = map.pixel_of(index);
            let height = map.pixel_of(index + 1) - y_top;
            let background = self.paint_background(surface, index, y_top, height);
            let middle = map.middle_pixel(index);
            self.paint_label(
                surface,
                index,
                middle + self.ascent / 2,
                middle - self.ascent / 2,
                false,
                background,
            );
        }
        draw_indent_blank(surface, self.orientation, &self.window, primary);
        VisibleLabels::fitted(visible)
    }

    fn paint_windowed(
        &self,
        surface: &mut dyn Surface,
        map: &dyn AxisMap,
        hover: usize,
        visible: IndexRange,
        primary: i32,
    ) -> VisibleLabels {
        let content_extent = map.pixel_of(map.max_index() + 1) - 1 - map.pixel_of(map.min_index());
        let run = build_hover_window(&HoverWindowInput {
            hover,
            hover_middle: map.middle_pixel(hover),
            visible,
            ascent: self.ascent,
            font_size: self.font_size,
            viewport: primary,
            content_extent,
            flank: self.flank,
        });

        for slot in &run.slots {
            let y_top = slot.baseline - self.ascent;
            let background =
                self.paint_background(surface, slot.index, y_top, self.font_size + SQUEEZE);
            if slot.drawn {
                self.paint_label(
                    surface,
                    slot.index,
                    slot.baseline,
                    y_top,
                    slot.lightened,
                    background,
                );
            }
        }

        if self.flank.is_zero() {
            draw_indent_blank(surface, self.orientation, &self.window, primary);
        } else {
            let indicator = PortIndicator {
                orientation: self.orientation,
                window: self.window,
                primary_extent: primary,
                drawn: run.drawn,
                hover,
            };
            draw_port_indicator(surface, map, &indicator, self.palette);
        }
        run.visible_labels()
    }

    fn in_subtree(&self, index: usize) -> bool {
        self.subtree.is_some_and(|r| r.contains(index))
    }

    /// Inside the range a drag would apply to right now.
    fn is_selecting(&self, index: usize) -> bool {
        match (self.selection.drag(), self.hover) {
            (Some(drag), Some(hover)) => IndexRange::new(drag.anchor, hover).contains(index),
            _ => false,
        }
    }

    fn within_flank(&self, index: usize) -> bool {
        !self.windowed
            || self
                .hover
                .is_none_or(|h| self.flank.allows(h.abs_diff(index)))
    }

    /// Fill the label's row if it is highlighted. Returns the colour now
    /// behind the label.
    fn paint_background(
        &self,
        surface: &mut dyn Surface,
        index: usize,
        y_top: i32,
        height: i32,
    ) -> Rgba {
        let background = surface.background();
        if index >= self.labels.label_count() || !self.within_flank(index) {
            return background;
        }
        let selected = self.selection.is_selected(index);
        let selecting = self.is_selecting(index);
        let drag_highlights = match self.selection.drag().map(|d| d.mode) {
            Some(DragMode::Select) => true,
            Some(DragMode::Toggle) => !selected,
            Some(DragMode::Deselect) | None => false,
        };
        let fill = if (selected && !selecting) || (selecting && drag_highlights) {
            self.palette.selection_background
        } else if self.in_subtree(index) {
            self.palette.subtree_background
        } else {
            return background;
        };
        surface.fill_rect(PixelRect::new(0, y_top, self.window.content(), height), fill);
        fill
    }

    fn text_color(&self, index: usize, lightened: bool) -> Rgba {
        let hot = self.hover == Some(index) || self.in_subtree(index);
        let color = if hot {
            self.palette.hover_text
        } else if self.selection.is_selected(index) {
            self.palette.selection_text
        } else {
            self.palette.text
        };
        if lightened {
            lighten(color)
        } else {
            color
        }
    }

    fn paint_label(
        &self,
        surface: &mut dyn Surface,
        index: usize,
        baseline: i32,
        arrow_top: i32,
        lightened: bool,
        background: Rgba,
    ) {
        if index >= self.labels.label_count() {
            return;
        }
        let text = match label_text(self.labels, index) {
            Ok(text) => text,
            Err(err) => {
                debug!(%err, index, "Skipping label");
                return;
            }
        };
        let font = if self.hover == Some(index) {
            &self.hover_font
        } else {
            &self.font
        };
        let input = PlacementInput {
            window: self.window,
            label_length: self.metrics.string_width(&text, font),
            shift: self.shift,
        };
        let x = label_start_offset(self.orientation, self.justification, &input);
        let color = self.text_color(index, lightened);
        let style = TextStyle {
            font: font.clone(),
            color,
        };
        surface.draw_text(&text, Point::new(x, baseline), &style);
        for arrow in overrun_arrows(self.orientation, &input, x) {
            draw_arrow(surface, arrow, arrow_top, self.font_size, color, background);
        }
    }
}

#[cfg(test)]
#[path = "strip_tests.rs"]
mod tests;
