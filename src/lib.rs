//! labelstrip
//!
//! Label strip for the row or column axis of a heatmap-style matrix view.
//!
//! The strip decides how to present labels (all of them, a hover window, or a
//! zoom hint), tracks a scroll position across the label text, places and
//! clips labels with overrun arrows, and animates the hover window.
//!
//! Pure state lives in [`view_state`] and [`state`]; painting goes through the
//! [`host::Surface`] trait in [`view`], which also holds the terminal demo.

pub mod config;
pub mod host;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;
