//! headless-select: a headless combobox interaction core.
//!
//! This crate implements the interaction state machine behind a select
//! dropdown — trigger activation, the open/close lifecycle, text filtering,
//! cyclic disabled-skipping cursor navigation, single/multi selection
//! commit/removal semantics, and outside-press dismissal — with no rendering,
//! no geometry computation, and no opinion about the host stack.
//!
//! # Architecture
//!
//! The crate follows a layered, event-driven architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host / presentation layer                          │  ← renders views,
//! │  (GUI toolkit, TUI, web runtime)                    │    forwards input,
//! └─────────────────────────────────────────────────────┘    executes actions
//!            │  events + current value        ▲  render flag + actions
//!            ▼                                │
//! ┌─────────────────────────────────────────────────────┐
//! │  Controller (control/)                              │  ← state machine
//! │  - Event handling and lifecycle transitions         │
//! │  - Cursor navigation, deferred post-render work     │
//! └─────────────────────────────────────────────────────┘
//!      │               │                │
//! ┌──────────┐  ┌─────────────┐  ┌─────────────────┐
//! │ Filter   │  │ Selection   │  │ Dismissal       │
//! │ (filter) │  │ (selection) │  │ (dismiss)       │
//! │ visible  │  │ pure value  │  │ outside-press   │
//! │ subset   │  │ transforms  │  │ contains-check  │
//! └──────────┘  └─────────────┘  └─────────────────┘
//!      │               │                │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & geometry (domain/, geometry)              │
//! │  - Catalog entries, errors, regions, placement      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Two ownership rules shape the API:
//!
//! - **The host owns the selection value.** Every call to [`handle_event`]
//!   receives the current [`SelectionValue`]; the core proposes changes back
//!   through [`Action::ValueChange`] carrying the complete next value and
//!   never stores a copy of its own.
//! - **The core owns the transient interaction state.** Lifecycle, cursor,
//!   and query live in [`SelectState`] for the lifetime of one mounted
//!   control and have a single logical writer: the handler reacting to the
//!   current event.
//!
//! Anchored positioning (collision avoidance, flipping, viewport sizing) is an
//! external collaborator: the core requests recomputes through the deferred
//! [`PostRenderWork`] and stores the resulting opaque [`Placement`].
//!
//! # Example
//!
//! ```
//! use headless_select::{
//!     handle_event, Action, Event, Key, SelectConfig, SelectOption, SelectState, SelectionValue,
//! };
//!
//! let options = vec![
//!     SelectOption::new("apple", "Apple"),
//!     SelectOption::new("banana", "Banana"),
//! ];
//! let mut state = SelectState::new(options, SelectConfig::default());
//! let mut value: SelectionValue<&str> = SelectionValue::Empty;
//!
//! // ArrowDown on the focused trigger opens the menu.
//! handle_event(&mut state, &value, &Event::TriggerKey(Key::ArrowDown))?;
//! assert!(state.is_open());
//!
//! // Typing filters the view; Enter commits the active option.
//! handle_event(&mut state, &value, &Event::SearchInput('b'))?;
//! let (_, actions) = handle_event(&mut state, &value, &Event::MenuKey(Key::Enter))?;
//! if let Some(Action::ValueChange(next)) = actions.first() {
//!     value = next.clone();
//! }
//! assert_eq!(value, SelectionValue::Single("banana"));
//! assert!(!state.is_open()); // single select closes on commit
//! # Ok::<(), headless_select::SelectError>(())
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` spans and events around filtering and event
//! handling. No subscriber is installed; hosts bring their own.

pub mod control;
pub mod dismiss;
pub mod domain;
pub mod filter;
pub mod geometry;
pub mod selection;
pub mod view;

pub use control::{
    handle_event, Action, Event, FocusTarget, Key, Lifecycle, PostRenderWork, SelectState,
    SelectionMode,
};
pub use dismiss::DismissWatcher;
pub use domain::{Result, SelectError, SelectOption};
pub use geometry::{Placement, Point, Region};
pub use selection::SelectionValue;
pub use view::{MenuView, RowView, SelectView, TriggerSummary, TriggerView};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Control configuration, fixed for the lifetime of one mounted instance.
///
/// All fields are optional at construction via struct-update syntax or serde
/// defaults; the shipped defaults match a searchable single select.
///
/// # Examples
///
/// ```
/// use headless_select::SelectConfig;
///
/// let config = SelectConfig {
///     multiple: true,
///     placeholder: "Pick some fruit".to_string(),
///     ..SelectConfig::default()
/// };
/// assert!(!config.should_close_on_select()); // multi selects stay open
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Multi-value selection (ordered, duplicate-free, toggle on commit).
    pub multiple: bool,

    /// Whether the menu carries a search input that filters the catalog.
    pub searchable: bool,

    /// Whether a commit closes the menu. `None` resolves to `!multiple`.
    pub close_on_select: Option<bool>,

    /// Disabled controls ignore all activation.
    pub disabled: bool,

    /// Trigger text while nothing is selected.
    pub placeholder: String,

    /// Search input placeholder text.
    pub search_placeholder: String,

    /// Height cap (host units) the positioning collaborator sizes against.
    pub max_menu_height: u32,

    /// Render the menu outside normal layout flow (in `portal_container` when
    /// the host names one). Purely a rendering concern; dismissal works the
    /// same either way because regions are tracked explicitly.
    pub portal: bool,

    /// Host-meaningful name of the container portal-rendered menus mount
    /// into. `None` means the host's default overlay root.
    pub portal_container: Option<String>,

    /// Stacking order for portal-rendered menus.
    pub z_index: i32,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            searchable: true,
            close_on_select: None,
            disabled: false,
            placeholder: "Select...".to_string(),
            search_placeholder: "Search".to_string(),
            max_menu_height: 260,
            portal: true,
            portal_container: None,
            z_index: i32::MAX,
        }
    }
}

impl SelectConfig {
    /// Resolves the effective close-on-select behavior.
    ///
    /// Defaults to closing for single selects and staying open for multi
    /// selects unless explicitly overridden.
    #[must_use]
    pub fn should_close_on_select(&self) -> bool {
        self.close_on_select.unwrap_or(!self.multiple)
    }

    /// Selection cardinality implied by `multiple`.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        if self.multiple {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }

    /// Parses configuration from untyped string key/value entries.
    ///
    /// Hosts that load configuration from files or embedding-specific maps can
    /// hand the entries straight through. Unknown keys are ignored (and logged
    /// at debug level); malformed values are an error rather than silently
    /// falling back.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Config`] when a value fails to parse, naming the
    /// key and the offending value.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use headless_select::SelectConfig;
    ///
    /// let mut entries = BTreeMap::new();
    /// entries.insert("multiple".to_string(), "true".to_string());
    /// entries.insert("max_menu_height".to_string(), "320".to_string());
    ///
    /// let config = SelectConfig::from_entries(&entries)?;
    /// assert!(config.multiple);
    /// assert_eq!(config.max_menu_height, 320);
    /// # Ok::<(), headless_select::SelectError>(())
    /// ```
    pub fn from_entries(entries: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = Self::default();
        for (key, raw) in entries {
            match key.as_str() {
                "multiple" => config.multiple = parse_bool(key, raw)?,
                "searchable" => config.searchable = parse_bool(key, raw)?,
                "close_on_select" => config.close_on_select = Some(parse_bool(key, raw)?),
                "disabled" => config.disabled = parse_bool(key, raw)?,
                "placeholder" => config.placeholder = raw.clone(),
                "search_placeholder" => config.search_placeholder = raw.clone(),
                "max_menu_height" => {
                    config.max_menu_height = raw
                        .parse()
                        .map_err(|_| invalid_value(key, raw))?;
                }
                "portal" => config.portal = parse_bool(key, raw)?,
                "portal_container" => config.portal_container = Some(raw.clone()),
                "z_index" => {
                    config.z_index = raw.parse().map_err(|_| invalid_value(key, raw))?;
                }
                _ => tracing::debug!(key = %key, "ignoring unknown config key"),
            }
        }
        Ok(config)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(invalid_value(key, raw)),
    }
}

fn invalid_value(key: &str, raw: &str) -> SelectError {
    SelectError::Config(format!("invalid value for {key}: {raw}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_a_searchable_single_select() {
        let config = SelectConfig::default();
        assert!(!config.multiple);
        assert!(config.searchable);
        assert!(config.should_close_on_select());
        assert_eq!(config.placeholder, "Select...");
        assert_eq!(config.max_menu_height, 260);
        assert!(config.portal);
    }

    #[test]
    fn close_on_select_defaults_follow_mode() {
        let multi = SelectConfig {
            multiple: true,
            ..SelectConfig::default()
        };
        assert!(!multi.should_close_on_select());

        let pinned = SelectConfig {
            multiple: true,
            close_on_select: Some(true),
            ..SelectConfig::default()
        };
        assert!(pinned.should_close_on_select());
    }

    #[test]
    fn from_entries_applies_overrides_and_ignores_unknown_keys() {
        let mut entries = BTreeMap::new();
        entries.insert("searchable".to_string(), "no".to_string());
        entries.insert("placeholder".to_string(), "Pick one".to_string());
        entries.insert("frobnicate".to_string(), "whatever".to_string());

        let config = SelectConfig::from_entries(&entries).unwrap();
        assert!(!config.searchable);
        assert_eq!(config.placeholder, "Pick one");
    }

    #[test]
    fn from_entries_rejects_malformed_values() {
        let mut entries = BTreeMap::new();
        entries.insert("multiple".to_string(), "maybe".to_string());

        let err = SelectConfig::from_entries(&entries).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid value for multiple: maybe"
        );
    }

    #[test]
    fn config_serde_round_trip() {
        let config = SelectConfig {
            multiple: true,
            max_menu_height: 400,
            ..SelectConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SelectConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_json_uses_field_defaults() {
        let config: SelectConfig = serde_json::from_str(r#"{"multiple": true}"#).unwrap();
        assert!(config.multiple);
        assert!(config.searchable);
        assert_eq!(config.max_menu_height, 260);
    }
}
