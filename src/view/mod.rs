//! Presentation-facing view models.
//!
//! Computed from interaction state on demand; contains no interaction logic.

pub mod model;

pub use model::{MenuView, RowView, SelectView, TriggerSummary, TriggerView};
