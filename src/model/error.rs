//! Error types for labelstrip.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the demo binary
//!   - [`ConfigError`] - Config file read/parse/write failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`DemoError`] - Terminal I/O failures in the interactive demo
//! - [`LookupError`] - Label lookups against the label source
//!
//! # Error Recovery Strategy
//!
//! Nothing inside a frame is fatal. A failed label lookup skips that label and
//! the frame continues; out-of-range scroll requests are clamped; a negative
//! computed offset is clamped to zero and logged. Only startup and terminal
//! errors propagate to `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::DemoError;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// Domain errors convert via `From`, so `main` can use `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or stored.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The interactive terminal demo failed.
    ///
    /// Raised for crossterm/ratatui I/O failures. The terminal is restored
    /// before this error reaches the caller.
    #[error("Terminal error: {0}")]
    Demo(#[from] DemoError),
}

/// Errors raised when a label is requested from a label source.
///
/// Callers inside the render path treat every variant as "skip this label".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The requested index lies outside the label axis.
    ///
    /// Happens transiently when the axis map and the label source disagree
    /// about the item count, e.g. right after a data reload.
    #[error("Label index {index} out of bounds (label count {count})")]
    IndexOutOfBounds {
        /// Index that was requested.
        index: usize,
        /// Number of labels the source holds.
        count: usize,
    },
}
