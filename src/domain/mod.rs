//! Domain layer for the headless-select crate.
//!
//! This module contains the core domain types shared by every other layer,
//! independent of any particular host or presentation stack.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`option`]: Option catalog entry type

pub mod error;
pub mod option;

pub use error::{Result, SelectError};
pub use option::SelectOption;
