//! Label port settings and the toggle cycle.
//!
//! The label port is the windowed mode that follows the pointer when items
//! are too dense to label. Users cycle through its variants with one key.

use crate::model::FlankLimit;

/// Persisted label port settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortSettings {
    /// Windowed labels may be shown at all.
    pub enabled: bool,
    /// Restrict windowed labels to `flank_limit` either side of the hovered
    /// label.
    pub flank_mode: bool,
    /// Limit applied while `flank_mode` is on.
    pub flank_limit: FlankLimit,
    /// The toggle cycle passes through "off" instead of "flanked".
    pub default_none: bool,
}

impl Default for PortSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            flank_mode: true,
            flank_limit: FlankLimit::Limited(0),
            default_none: false,
        }
    }
}

impl PortSettings {
    /// Flank limit in force.
    pub fn effective_flank(&self) -> FlankLimit {
        if self.flank_mode {
            self.flank_limit
        } else {
            FlankLimit::Unlimited
        }
    }

    /// Advance the toggle cycle.
    ///
    /// Off or flanked goes to full. Full goes to off when `default_none` is
    /// set, otherwise to flanked.
    pub fn cycle(&mut self) {
        if !self.enabled || self.flank_mode {
            self.enabled = true;
            self.flank_mode = false;
        } else if self.default_none {
            self.enabled = false;
        } else {
            self.flank_mode = true;
        }
    }

    /// Whether windowed mode will show more than the hovered label.
    pub fn shows_neighbours(&self) -> bool {
        self.enabled && !self.effective_flank().is_zero()
    }
}
