//! Interaction controller coordinating state, events, and actions.
//!
//! This layer implements the event-driven heart of the control. It follows a
//! unidirectional data flow:
//!
//! ```text
//! Host input → Events → Event handler → State mutations → Actions → Host effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and lifecycle transition coordinator
//! - [`modes`]: Lifecycle, selection-mode, and focus-target enums
//! - [`state`]: Central interaction state container

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, Key};
pub use modes::{FocusTarget, Lifecycle, SelectionMode};
pub use state::{PostRenderWork, SelectState};
