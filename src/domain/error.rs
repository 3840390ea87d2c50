//! Error types for the headless-select crate.
//!
//! This module defines the centralized error type [`SelectError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Interaction edge cases (committing a disabled option, moving the cursor over an
//! empty view, removing an absent value) are deliberately *not* errors: they degrade
//! to no-ops inside the event handler. Errors only surface at the host boundary,
//! currently when parsing configuration from untyped key/value entries.

use thiserror::Error;

/// The main error type for headless-select operations.
///
/// # Examples
///
/// ```
/// use headless_select::SelectError;
///
/// fn validate() -> Result<(), SelectError> {
///     Err(SelectError::Config("invalid value for multiple: maybe".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum SelectError {
    /// Configuration is invalid or malformed.
    ///
    /// Occurs when a configuration entry cannot be parsed into its typed form,
    /// e.g. a non-boolean string for `multiple` or a non-numeric string for
    /// `max_menu_height`. The string describes the offending key and value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for headless-select operations.
///
/// This is a type alias for `std::result::Result<T, SelectError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, SelectError>;
