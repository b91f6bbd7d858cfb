//! Strip colours and terminal colour configuration.

use crate::host::Rgba;

// ===== ColorConfig =====

/// Whether the terminal demo paints in colour.
///
/// Without colour the terminal surface marks highlighted cells with reverse
/// video instead. Turned off by `--no-color` or a set `NO_COLOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Colour unless the flag is passed or `NO_COLOR` has any value.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors forced on or off.
    pub fn with_enabled(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Whether colours are painted.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== StripPalette =====

/// Alpha applied to labels that only partly fit in windowed mode.
pub const LIGHTENED_ALPHA: u8 = 100;

/// Colours a strip paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripPalette {
    /// Ordinary label text.
    pub text: Rgba,
    /// Text of selected labels.
    pub selection_text: Rgba,
    /// Row fill behind selected labels.
    pub selection_background: Rgba,
    /// Text of the hovered label and its tree subtree.
    pub hover_text: Rgba,
    /// Row fill behind labels under the hovered tree node.
    pub subtree_background: Rgba,
    /// Bar marking the matrix rows the windowed labels belong to.
    pub port_accent: Rgba,
    /// Zoom hint text.
    pub hint_text: Rgba,
}

impl Default for StripPalette {
    fn default() -> Self {
        Self {
            text: Rgba::BLACK,
            selection_text: Rgba::BLACK,
            selection_background: Rgba::rgb(249, 238, 160),
            hover_text: Rgba::RED,
            subtree_background: Rgba::rgb(227, 236, 250),
            port_accent: Rgba::rgb(30, 144, 251),
            hint_text: Rgba::BLACK,
        }
    }
}

/// Translucent version of `color` for partly fitting labels.
pub fn lighten(color: Rgba) -> Rgba {
    color.with_alpha(LIGHTENED_ALPHA)
}

// ===== Tests =====
