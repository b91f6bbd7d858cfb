//! Domain model types (pure).
//!
//! All types in this module are plain data with no rendering dependencies.

pub mod error;
pub mod font;
pub mod key_action;
pub mod settings;

pub use error::{AppError, LookupError};
pub use font::{FontAttributes, FontChange, FontSpec, FontStyle};
pub use key_action::KeyAction;
pub use settings::{FlankLimit, Justification, Orientation, StripAxis};
