//! Label scroll state
//!
//! The strip scrolls along the text direction. Which end of the scrolled
//! window stays put when the viewport or the content changes depends on the
//! justification and on whether label coordinates run with or against scroll
//! coordinates; see [`ScrollAnchor`].

use crate::model::{Justification, Orientation};

/// Which end of the scroll window is preserved across re-derivation.
///
/// # Anchoring
/// - `(Start, Aligned)` and `(End, Opposed)`: the text start sits at low
///   scroll coordinates, so the scroll position is kept.
/// - `(End, Aligned)` and `(Start, Opposed)`: the text sits at high scroll
///   coordinates, so the gap after the window is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAnchor {
    /// Preserve `position`.
    Leading,
    /// Preserve `end_gap`.
    Trailing,
}

impl ScrollAnchor {
    /// Anchor for a justification/orientation pair.
    pub fn for_layout(justification: Justification, orientation: Orientation) -> Self {
        match (justification, orientation) {
            (Justification::Start, Orientation::Aligned)
            | (Justification::End, Orientation::Opposed) => Self::Leading,
            (Justification::End, Orientation::Aligned)
            | (Justification::Start, Orientation::Opposed) => Self::Trailing,
        }
    }
}

/// The visible slice of the content along the scrolled axis.
///
/// # Invariants
/// - `0 <= position <= end_position`
/// - `end_position + end_gap == content`
/// - `end_position - position == min(viewport, content)` when derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollWindow {
    /// Scroll coordinate of the viewport's start edge.
    pub position: i32,
    /// Scroll coordinate of the viewport's end edge.
    pub end_position: i32,
    /// Content remaining past the viewport's end edge.
    pub end_gap: i32,
}

impl ScrollWindow {
    /// Visible breadth.
    pub fn extent(&self) -> i32 {
        self.end_position - self.position
    }

    /// Full content breadth.
    pub fn content(&self) -> i32 {
        self.end_position + self.end_gap
    }

    fn from_position(position: i32, content: i32, extent: i32) -> Self {
        let end_position = position + extent;
        Self {
            position,
            end_position,
            end_gap: content - end_position,
        }
    }

    fn from_end_gap(end_gap: i32, content: i32, extent: i32) -> Self {
        let end_position = content - end_gap;
        Self {
            position: end_position - extent,
            end_position,
            end_gap,
        }
    }
}

fn visible_extent(content: i32, viewport: i32) -> i32 {
    viewport.min(content).max(0)
}

/// Scroll state for one strip: unset until the first labelled frame.
///
/// Only [`initialize`](Self::initialize), [`adjust`](Self::adjust),
/// [`scroll_to`](Self::scroll_to)/[`scroll_by`](Self::scroll_by) and
/// [`reset`](Self::reset) change it. Rendering reads a copy via
/// [`window`](Self::window).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    window: Option<ScrollWindow>,
}

impl ScrollState {
    /// Unset scroll state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current window, `None` while unset.
    pub fn window(&self) -> Option<ScrollWindow> {
        self.window
    }

    /// Whether a window has been established.
    pub fn is_set(&self) -> bool {
        self.window.is_some()
    }

    /// Forget the window; the next labelled frame initializes afresh.
    pub fn reset(&mut self) {
        self.window = None;
    }

    /// Establish the window at the anchored end of the content.
    pub fn initialize(&mut self, anchor: ScrollAnchor, content: i32, viewport: i32) -> ScrollWindow {
        let content = content.max(0);
        let extent = visible_extent(content, viewport);
        let window = match anchor {
            ScrollAnchor::Leading => ScrollWindow::from_position(0, content, extent),
            ScrollAnchor::Trailing => ScrollWindow::from_end_gap(0, content, extent),
        };
        self.window = Some(window);
        window
    }

    /// Re-derive the window for new content/viewport breadths, preserving the
    /// anchored value unless it no longer fits. No-op while unset.
    ///
    /// Returns true when the window changed.
    pub fn adjust(&mut self, anchor: ScrollAnchor, content: i32, viewport: i32) -> bool {
        let Some(current) = self.window else {
            return false;
        };
        let content = content.max(0);
        let extent = visible_extent(content, viewport);
        let next = match anchor {
            ScrollAnchor::Leading => {
                let mut position = current.position;
                if position > 0 && viewport > content - position {
                    position = (content - viewport).max(0);
                }
                ScrollWindow::from_position(position.max(0), content, extent)
            }
            ScrollAnchor::Trailing => {
                let mut end_gap = current.end_gap;
                if end_gap > 0 && viewport > content - end_gap {
                    end_gap = (content - viewport).max(0);
                }
                ScrollWindow::from_end_gap(end_gap.max(0), content, extent)
            }
        };
        self.window = Some(next);
        next != current
    }

    /// Initialize when unset, otherwise adjust. Returns the resulting window.
    pub fn reconcile(&mut self, anchor: ScrollAnchor, content: i32, viewport: i32) -> ScrollWindow {
        self.adjust(anchor, content, viewport);
        match self.window {
            Some(window) => window,
            None => self.initialize(anchor, content, viewport),
        }
    }

    /// Scroll so the window starts at `position`, clamped to
    /// `[0, content - extent]`.
    pub fn scroll_to(&mut self, position: i32, content: i32, viewport: i32) -> ScrollWindow {
        let content = content.max(0);
        let extent = visible_extent(content, viewport);
        let position = position.clamp(0, content - extent);
        let window = ScrollWindow::from_position(position, content, extent);
        self.window = Some(window);
        window
    }

    /// Scroll by `delta` pixels from the current position (0 while unset).
    pub fn scroll_by(&mut self, delta: i32, content: i32, viewport: i32) -> ScrollWindow {
        let from = self.window.map_or(0, |w| w.position);
        self.scroll_to(from.saturating_add(delta), content, viewport)
    }
}
