//! View model types representing renderable control state.
//!
//! View models are immutable snapshots computed from [`SelectState`] plus the
//! host-owned selection value via
//! [`SelectState::compute_view`](crate::SelectState::compute_view). They carry
//! display-ready data only — no business logic — so any presentation layer
//! (GUI, TUI, web runtime) can render them without consulting the state
//! machine again.
//!
//! Presentation-override hooks live entirely on the rendering side: for each
//! row the core supplies exactly the `{selected, active}` pair (plus the
//! catalog fields) and never depends on how the row is drawn.

use crate::geometry::Placement;

/// Complete view model for one render of the control.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectView {
    /// Trigger surface state.
    pub trigger: TriggerView,

    /// Menu state; `None` while closed.
    pub menu: Option<MenuView>,
}

/// Display state for the trigger surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerView {
    /// Whether the whole control is disabled.
    pub disabled: bool,

    /// What the trigger should display for the current selection.
    pub summary: TriggerSummary,
}

/// Trigger content derived from the selection.
///
/// Labels are resolved through the catalog with the configured comparator;
/// selected values without a catalog entry are omitted (a single-mode value
/// with no catalog match falls back to the placeholder).
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerSummary {
    /// Nothing selected: show the configured placeholder text.
    Placeholder(String),

    /// Single-mode selection: show the selected option's label.
    Single(String),

    /// Multi-mode selection: one removable chip per selected value, in
    /// insertion order.
    Chips(Vec<String>),
}

/// Display state for the open menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    /// Current query text for the search input.
    pub query: String,

    /// Whether the search input is rendered at all.
    pub search_visible: bool,

    /// Placeholder text for the search input.
    pub search_placeholder: String,

    /// Opaque placement from the positioning collaborator, if reported.
    pub placement: Option<Placement>,

    /// Configured cap on the menu's scrollable height.
    pub max_height: u32,

    /// Message shown instead of rows when the filtered view is empty.
    pub empty_state: Option<String>,

    /// One row per option in the filtered view, in catalog order.
    pub rows: Vec<RowView>,
}

/// Display state for a single option row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Index into the filtered view; echo this back in
    /// [`Event::OptionClick`](crate::Event::OptionClick) and
    /// [`Event::OptionHover`](crate::Event::OptionHover).
    pub view_index: usize,

    /// Option label.
    pub label: String,

    /// Opaque icon token from the catalog entry.
    pub icon: Option<String>,

    /// Disabled rows render but cannot be committed.
    pub disabled: bool,

    /// Whether this option is part of the current selection.
    pub selected: bool,

    /// Whether the navigation cursor is on this row.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Placement, SelectConfig, SelectOption, SelectState, SelectionValue};

    fn catalog() -> Vec<SelectOption<&'static str>> {
        vec![
            SelectOption::new("a", "Alpha").with_icon("leaf"),
            SelectOption::new("b", "Beta").disabled(),
        ]
    }

    #[test]
    fn closed_control_has_no_menu_view() {
        let state = SelectState::new(catalog(), SelectConfig::default());
        let view = state.compute_view(&SelectionValue::Empty);
        assert_eq!(view.menu, None);
        assert_eq!(
            view.trigger.summary,
            TriggerSummary::Placeholder("Select...".to_string())
        );
    }

    #[test]
    fn single_selection_shows_catalog_label() {
        let state = SelectState::new(catalog(), SelectConfig::default());
        let view = state.compute_view(&SelectionValue::Single("a"));
        assert_eq!(view.trigger.summary, TriggerSummary::Single("Alpha".to_string()));
    }

    #[test]
    fn unmatched_single_value_falls_back_to_placeholder() {
        let state = SelectState::new(catalog(), SelectConfig::default());
        let view = state.compute_view(&SelectionValue::Single("zz"));
        assert_eq!(
            view.trigger.summary,
            TriggerSummary::Placeholder("Select...".to_string())
        );
    }

    #[test]
    fn multi_selection_renders_chips_in_insertion_order() {
        let config = SelectConfig {
            multiple: true,
            ..SelectConfig::default()
        };
        let state = SelectState::new(catalog(), config);
        let view = state.compute_view(&SelectionValue::Multi(vec!["b", "a"]));
        assert_eq!(
            view.trigger.summary,
            TriggerSummary::Chips(vec!["Beta".to_string(), "Alpha".to_string()])
        );
    }

    #[test]
    fn rows_carry_selected_and_active_flags() {
        let mut state = SelectState::new(catalog(), SelectConfig::default());
        state.open();
        state.set_placement(Some(Placement {
            x: 4.0,
            y: 46.0,
            max_height: 200.0,
        }));

        let view = state.compute_view(&SelectionValue::Single("a"));
        let menu = view.menu.expect("menu view while open");
        assert_eq!(menu.placement.map(|p| p.max_height), Some(200.0));
        assert_eq!(menu.empty_state, None);

        let alpha = &menu.rows[0];
        assert!(alpha.selected && alpha.active && !alpha.disabled);
        assert_eq!(alpha.icon.as_deref(), Some("leaf"));

        let beta = &menu.rows[1];
        assert!(!beta.selected && !beta.active && beta.disabled);
    }

    #[test]
    fn empty_filtered_view_reports_no_results() {
        let mut state = SelectState::new(catalog(), SelectConfig::default());
        state.open();
        state.set_query("zzz".to_string());

        let menu = state
            .compute_view(&SelectionValue::Empty)
            .menu
            .expect("menu view while open");
        assert!(menu.rows.is_empty());
        assert_eq!(menu.empty_state.as_deref(), Some("No results"));
    }
}
