//! Demo keyboard actions independent of key bindings.

/// Actions the terminal demo can map keys to.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Primary axis
    /// Move the matrix up one item. Default: k/↑
    ScrollUp,
    /// Move the matrix down one item. Default: j/↓
    ScrollDown,
    /// Move the matrix up one screen. Default: Ctrl+u/Page Up
    PageUp,
    /// Move the matrix down one screen. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first item. Default: g/Home
    ScrollToTop,
    /// Jump to the last item. Default: G/End
    ScrollToBottom,
    /// Halve items per screen. Default: +/=
    ZoomIn,
    /// Double items per screen. Default: -
    ZoomOut,

    // Label strip
    /// Scroll the labels towards their start. Default: h/←
    LabelScrollBack,
    /// Scroll the labels towards their end. Default: l/→
    LabelScrollForward,
    /// Forget the label scroll position. Default: 0
    ResetLabelScroll,
    /// Cycle the label port mode. Default: Space
    CyclePortMode,
    /// Flip start/end justification. Default: t
    ToggleJustification,
    /// Make the strip wider. Default: ]
    WidenStrip,
    /// Make the strip narrower. Default: [
    NarrowStrip,
    /// Cycle which label fields are summarised. Default: f
    CycleFields,

    // Selection
    /// Deselect everything. Default: c
    ClearSelection,

    // Application
    /// Exit. Default: q/Esc
    Quit,
}
