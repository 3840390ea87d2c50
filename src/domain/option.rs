//! Option catalog entry type.
//!
//! This module defines [`SelectOption`], one selectable entry in the host-supplied
//! catalog. The catalog is an ordered `Vec<SelectOption<T>>`; the core reads it to
//! derive the filtered view and the view models but never mutates individual
//! entries. Labels need not be unique, and values need not be unique unless the
//! host guarantees it.

use serde::{Deserialize, Serialize};

/// One selectable option in the catalog.
///
/// The `value` is the host-meaningful payload carried through selection changes;
/// the `label` is what filtering matches against and what view models display.
/// `icon` is an opaque render token passed through to the presentation layer
/// untouched — the core never interprets it.
///
/// # Examples
///
/// ```
/// use headless_select::SelectOption;
///
/// let plain = SelectOption::new(1, "Option 1");
/// let locked = SelectOption::new(2, "Option 2").disabled();
/// let fancy = SelectOption::new(3, "Option 3").with_icon("star");
///
/// assert!(!plain.disabled);
/// assert!(locked.disabled);
/// assert_eq!(fancy.icon.as_deref(), Some("star"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption<T> {
    /// Host-meaningful value committed when this option is selected.
    pub value: T,

    /// Display label; the default filter matches the query against it.
    pub label: String,

    /// Disabled options are shown but cannot be committed and are skipped
    /// by cursor navigation.
    #[serde(default)]
    pub disabled: bool,

    /// Opaque render token forwarded to the presentation layer.
    #[serde(default)]
    pub icon: Option<String>,
}

impl<T> SelectOption<T> {
    /// Creates an enabled option with no icon.
    #[must_use]
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
            icon: None,
        }
    }

    /// Marks the option as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Attaches an opaque icon token.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}
