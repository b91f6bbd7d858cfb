//! View-state layer - pure layout and scroll bookkeeping for a label strip
//!
//! Nothing here draws. Each module computes one piece of a frame from plain
//! inputs so it can be tested without a surface.
//!
//! # Module Structure
//!
//! - `types`: Core value types (IndexRange, EdgeOffsets, VisibleLabels, ViewportDimensions)
//! - `constants`: Pixel geometry (indent, indicator thickness, label pitch squeeze)
//! - `longest_label`: LongestLabelCache - memoized longest label length
//! - `viewport`: ViewportTracker - viewport and content breadth tracking
//! - `scroll`: ScrollState - scroll window bookkeeping and re-derivation
//! - `layout_mode`: Fitted / Windowed / Hint selection and font adaptation
//! - `hover_window`: Windowed label run around the hovered index
//! - `placement`: Label start offsets and overrun arrows

pub mod constants;
pub mod hover_window;
pub mod layout_mode;
pub mod longest_label;
pub mod placement;
pub mod scroll;
pub mod types;
pub mod viewport;

pub use hover_window::{build_hover_window, HoverSlot, HoverWindow, HoverWindowInput};
pub use layout_mode::{adapted_font_size, min_tile_height, select_layout_mode, shift_margin, LayoutMode};
pub use longest_label::{label_text, measure_longest, CacheValidity, LongestLabelCache};
pub use placement::{
    label_start_offset, overrun_arrows, ArrowDirection, OverrunArrow, PlacementInput,
};
pub use scroll::{ScrollAnchor, ScrollState, ScrollWindow};
pub use types::{EdgeOffsets, IndexRange, ViewportDimensions, VisibleLabels};
pub use viewport::{content_breadth, ViewportTracker};
