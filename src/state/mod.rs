//! Time- and interaction-driven strip state.
//!
//! These types own no pixels. They decide *when* a strip repaints and *which*
//! label port variant is active; `view` consults them while drawing.

pub mod animation;
pub mod port_mode;
pub mod presence;

pub use animation::{AnimationState, HoverAnimation, Tick, REPAINT_INTERVAL};
pub use port_mode::PortSettings;
pub use presence::{LinkedViewPresence, LINGER};
