//! Label strip rendering (impure shell)
//!
//! [`LabelStrip`] paints through the [`crate::host::Surface`] trait, so the
//! same code drives the recording surface in tests, the terminal surface of
//! the demo, and exports.

pub mod app;
pub mod export;
mod indicator;
mod overrun;
pub mod strip;
mod styles;
pub mod terminal;

pub use app::{run, restore_terminal, synthetic_labels, DemoApp, DemoError, DemoOptions};
pub use export::{export_range, ExportContext, ExportLayout, ExportRegion, ExportRequest};
pub use strip::{FrameReport, LabelStrip, StripContext};
pub use styles::{lighten, ColorConfig, StripPalette, LIGHTENED_ALPHA};
pub use terminal::{CellMetrics, TerminalSurface, CELL_ASCENT};
