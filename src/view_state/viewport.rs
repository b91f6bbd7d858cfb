//! Viewport and content breadth tracking along the scrolled axis.

/// Full unscrolled breadth of the strip's content.
///
/// The content is never narrower than the viewport, so a strip whose labels
/// all fit does not scroll.
pub fn content_breadth(longest: i32, shift_margin: i32, viewport: i32) -> i32 {
    (longest + shift_margin).max(viewport).max(0)
}

/// Remembers the last observed viewport and content breadths so frames can
/// tell whether either changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportTracker {
    viewport: Option<i32>,
    content: Option<i32>,
    previous_content: Option<i32>,
}

impl ViewportTracker {
    /// Tracker that has observed nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the viewport breadth. Returns true when it differs from the
    /// previous observation (the first observation always counts).
    pub fn observe_viewport(&mut self, breadth: i32) -> bool {
        let breadth = breadth.max(0);
        let changed = self.viewport != Some(breadth);
        self.viewport = Some(breadth);
        changed
    }

    /// Recompute the content breadth from the longest label and the reserved
    /// margin. Returns true when it changed.
    pub fn observe_content(&mut self, longest: i32, shift_margin: i32) -> bool {
        let content = content_breadth(longest, shift_margin, self.viewport());
        let changed = self.content != Some(content);
        if changed {
            self.previous_content = self.content;
        }
        self.content = Some(content);
        changed
    }

    /// Last observed viewport breadth, 0 before the first observation.
    pub fn viewport(&self) -> i32 {
        self.viewport.unwrap_or(0)
    }

    /// Current content breadth, 0 before the first observation.
    pub fn content(&self) -> i32 {
        self.content.unwrap_or(0)
    }

    /// Content breadth before the last change.
    pub fn previous_content(&self) -> Option<i32> {
        self.previous_content
    }

    /// Whether both breadths have been observed.
    pub fn is_primed(&self) -> bool {
        self.viewport.is_some() && self.content.is_some()
    }
}
