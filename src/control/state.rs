//! Core interaction state container.
//!
//! This module defines [`SelectState`], the single-writer state for one mounted
//! control instance: the open/closed lifecycle, the filtered view over the
//! catalog, the active-option cursor, and the query string. The host-owned
//! selection value is deliberately *not* stored here — it is passed into the
//! event handler on every interaction cycle and only proposed back through
//! [`Action::ValueChange`](crate::Action::ValueChange).
//!
//! # Architecture
//!
//! `SelectState` separates host-supplied data (catalog, config, regions,
//! placement) from derived state (filtered indices, cursor). Derived state is
//! recomputed synchronously whenever its inputs change; nothing here blocks,
//! and every mutation is a reaction to one discrete event.
//!
//! # Deferred work
//!
//! Entering `Open` schedules a one-shot post-render task (focus acquisition
//! plus a reposition request). The task carries the generation counter of the
//! transition that scheduled it; [`SelectState::take_post_render`] yields the
//! work only while that generation is still current, so a rapid open→close
//! cannot act on stale targets.

use crate::control::modes::{FocusTarget, Lifecycle, SelectionMode};
use crate::dismiss::DismissWatcher;
use crate::domain::SelectOption;
use crate::filter::{substring_filter, FilterFn};
use crate::geometry::{Placement, Point, Region};
use crate::selection::{self, structural_eq, EqFn, SelectionValue};
use crate::view::model::{MenuView, RowView, SelectView, TriggerSummary, TriggerView};
use crate::SelectConfig;

/// Empty-state message when the filtered view has no rows.
const NO_RESULTS: &str = "No results";

/// One-shot work to run after the first render that follows opening.
///
/// Obtained from [`SelectState::take_post_render`]. `focus` names the element
/// that should receive real focus; `reposition` asks the host to run its
/// anchored-positioning collaborator and report the result back through
/// [`SelectState::set_placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostRenderWork {
    /// Element to focus: the search input when searchable, else the list.
    pub focus: FocusTarget,

    /// Whether an anchored-positioning recompute is requested.
    pub reposition: bool,
}

/// Pending deferred task, valid only for the generation that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PostRenderTask {
    generation: u64,
    focus: FocusTarget,
}

/// Central interaction state for one mounted control instance.
///
/// Created once per mounted control and destroyed on unmount. All transient
/// interaction state lives here; the selection value stays with the host.
pub struct SelectState<T> {
    /// Ordered option catalog, replaced wholesale by the host.
    options: Vec<SelectOption<T>>,

    /// Indices into `options` passing the current filter, in catalog order.
    filtered: Vec<usize>,

    /// Query string; always empty while `Closed`.
    query: String,

    /// Open/closed lifecycle state.
    lifecycle: Lifecycle,

    /// Cursor into `filtered`. Invariant: when `Some`, the referenced option
    /// is enabled.
    active: Option<usize>,

    config: SelectConfig,
    filter: FilterFn<T>,
    eq: EqFn<T>,

    /// Host-reported trigger rectangle, `None` while unmounted.
    trigger_region: Option<Region>,

    /// Host-reported menu rectangle, `None` while closed or unmounted.
    menu_region: Option<Region>,

    /// Opaque placement from the positioning collaborator.
    placement: Option<Placement>,

    watcher: DismissWatcher,

    /// Bumped on every lifecycle transition; stale deferred tasks compare
    /// against it and are dropped.
    generation: u64,

    pending: Option<PostRenderTask>,
}

impl<T> std::fmt::Debug for SelectState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectState")
            .field("options", &self.options.len())
            .field("filtered", &self.filtered.len())
            .field("query", &self.query)
            .field("lifecycle", &self.lifecycle)
            .field("active", &self.active)
            .field("generation", &self.generation)
            .field("watcher", &self.watcher)
            .finish_non_exhaustive()
    }
}

impl<T> SelectState<T>
where
    T: PartialEq + 'static,
{
    /// Creates state for a mounted control with the default substring filter
    /// and structural-equality comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use headless_select::{Lifecycle, SelectConfig, SelectOption, SelectState};
    ///
    /// let state = SelectState::new(
    ///     vec![SelectOption::new(1, "Option 1")],
    ///     SelectConfig::default(),
    /// );
    /// assert_eq!(state.lifecycle(), Lifecycle::Closed);
    /// assert_eq!(state.view_len(), 1);
    /// ```
    #[must_use]
    pub fn new(options: Vec<SelectOption<T>>, config: SelectConfig) -> Self {
        let mut state = Self {
            options,
            filtered: Vec::new(),
            query: String::new(),
            lifecycle: Lifecycle::Closed,
            active: None,
            config,
            filter: substring_filter(),
            eq: structural_eq(),
            trigger_region: None,
            menu_region: None,
            placement: None,
            watcher: DismissWatcher::default(),
            generation: 0,
            pending: None,
        };
        state.apply_filter();
        state
    }
}

impl<T> SelectState<T> {
    /// Replaces the filter predicate and recomputes the filtered view.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterFn<T>) -> Self {
        self.filter = filter;
        self.apply_filter();
        self
    }

    /// Replaces the selection-membership comparator.
    #[must_use]
    pub fn with_comparator(mut self, eq: EqFn<T>) -> Self {
        self.eq = eq;
        self
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lifecycle == Lifecycle::Open
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Selection cardinality derived from the configuration.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.config.mode()
    }

    /// Cursor position as an index into the filtered view, `None` when no
    /// option is active.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Number of options in the current filtered view.
    #[must_use]
    pub fn view_len(&self) -> usize {
        self.filtered.len()
    }

    /// Options of the current filtered view, in catalog order.
    pub fn visible_options(&self) -> impl Iterator<Item = &SelectOption<T>> {
        self.filtered.iter().map(|&i| &self.options[i])
    }

    /// Option at a filtered-view index, if in bounds.
    #[must_use]
    pub fn visible_option(&self, view_index: usize) -> Option<&SelectOption<T>> {
        self.filtered.get(view_index).map(|&i| &self.options[i])
    }

    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    #[must_use]
    pub fn is_watcher_armed(&self) -> bool {
        self.watcher.is_armed()
    }

    /// Replaces the catalog and recomputes the filtered view.
    ///
    /// While open this also re-targets the cursor at the first enabled option
    /// of the new view, matching the behavior of a query change.
    pub fn set_options(&mut self, options: Vec<SelectOption<T>>) {
        self.options = options;
        self.apply_filter();
    }

    /// Records the host-reported trigger rectangle (`None` on unmount).
    pub fn set_trigger_region(&mut self, region: Option<Region>) {
        self.trigger_region = region;
    }

    /// Records the host-reported menu rectangle (`None` on unmount).
    pub fn set_menu_region(&mut self, region: Option<Region>) {
        self.menu_region = region;
    }

    /// Stores the opaque placement computed by the positioning collaborator.
    pub fn set_placement(&mut self, placement: Option<Placement>) {
        self.placement = placement;
    }

    /// Appends a character to the query and refilters.
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        tracing::trace!(query = %self.query, "query extended");
        self.apply_filter();
    }

    /// Removes the last character from the query and refilters.
    ///
    /// Returns `false` when the query was already empty.
    pub fn pop_query_char(&mut self) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.apply_filter();
        true
    }

    /// Replaces the whole query (e.g. a paste) and refilters.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.apply_filter();
    }

    /// Recomputes the filtered view from the catalog and query.
    ///
    /// The view is a strict subsequence of the catalog: options are tested in
    /// order and never reordered. Non-searchable controls always show the full
    /// catalog. While open, the cursor is re-targeted at the first enabled
    /// option of the new view (or cleared when none exists); while closed the
    /// cursor stays cleared.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            total_options = self.options.len(),
            query_len = self.query.len(),
            searchable = self.config.searchable
        )
        .entered();

        self.filtered = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| !self.config.searchable || (self.filter)(option, &self.query))
            .map(|(i, _)| i)
            .collect();

        self.active = match self.lifecycle {
            Lifecycle::Open => self.first_enabled(),
            Lifecycle::Closed => None,
        };

        tracing::debug!(filtered_count = self.filtered.len(), "filter applied");
    }

    /// Index of the first enabled option in the filtered view.
    #[must_use]
    pub fn first_enabled(&self) -> Option<usize> {
        self.filtered
            .iter()
            .position(|&i| !self.options[i].disabled)
    }

    /// Moves the cursor by `delta` (+1 or -1) with cyclic, disabled-skipping
    /// scan semantics.
    ///
    /// No-op on an empty view. Otherwise scans from `(current + delta) mod len`
    /// stepping by `delta`, at most `len` probes, and stops at the first
    /// enabled option. A fully-disabled view leaves the cursor unchanged.
    /// Returns `true` when the cursor actually moved.
    pub fn move_active(&mut self, delta: i32) -> bool {
        let len = self.filtered.len();
        if len == 0 {
            return false;
        }

        let len = len as i64;
        // A cleared cursor starts one step before the first option, so +1
        // lands on index 0 and -1 wraps to the end.
        let mut idx = self.active.map_or(-1, |i| i as i64);
        for _ in 0..len {
            idx = (idx + i64::from(delta)).rem_euclid(len);
            let option = &self.options[self.filtered[idx as usize]];
            if !option.disabled {
                let next = Some(idx as usize);
                let moved = self.active != next;
                self.active = next;
                return moved;
            }
        }
        false
    }

    /// Places the cursor directly on a filtered-view index (pointer hover).
    ///
    /// Out-of-bounds indices and disabled options are ignored, preserving the
    /// enabled-cursor invariant. Returns `true` when the cursor moved.
    pub fn set_active(&mut self, view_index: usize) -> bool {
        match self.visible_option(view_index) {
            Some(option) if !option.disabled => {
                let next = Some(view_index);
                let moved = self.active != next;
                self.active = next;
                moved
            }
            _ => false,
        }
    }

    /// Transitions `Closed -> Open`.
    ///
    /// Recomputes the view against the (already empty) query, targets the
    /// cursor at the first enabled option, arms the dismissal watcher, and
    /// schedules the one-shot post-render task. No-op while already open.
    pub fn open(&mut self) {
        if self.lifecycle == Lifecycle::Open {
            return;
        }
        self.lifecycle = Lifecycle::Open;
        self.generation += 1;
        self.apply_filter();
        self.watcher.arm();

        let focus = if self.config.searchable {
            FocusTarget::Search
        } else {
            FocusTarget::List
        };
        self.pending = Some(PostRenderTask {
            generation: self.generation,
            focus,
        });

        tracing::debug!(
            active = ?self.active,
            filtered_count = self.filtered.len(),
            "menu opened"
        );
    }

    /// Transitions `Open -> Closed`.
    ///
    /// Resets the query, clears the cursor, disarms the dismissal watcher, and
    /// cancels any pending post-render task. No-op while already closed.
    pub fn close(&mut self) {
        if self.lifecycle == Lifecycle::Closed {
            return;
        }
        self.lifecycle = Lifecycle::Closed;
        self.generation += 1;
        self.query.clear();
        self.apply_filter();
        self.watcher.disarm();
        self.pending = None;

        tracing::debug!("menu closed");
    }

    /// Yields the deferred post-render work, once, if still current.
    ///
    /// The host calls this after the render that follows an open transition.
    /// Work scheduled by a transition that has since been superseded (rapid
    /// open→close) is dropped rather than acting on stale targets.
    pub fn take_post_render(&mut self) -> Option<PostRenderWork> {
        let task = self.pending.take()?;
        if task.generation != self.generation {
            tracing::trace!("dropping stale post-render task");
            return None;
        }
        Some(PostRenderWork {
            focus: task.focus,
            reposition: true,
        })
    }

    /// Consults the dismissal watcher for a pointer press.
    ///
    /// Returns `true` when the press should close the menu: watcher armed and
    /// the point inside neither tracked region (a missing region handle counts
    /// as outside).
    #[must_use]
    pub fn should_dismiss(&self, point: Point) -> bool {
        self.watcher
            .should_dismiss(point, self.trigger_region, self.menu_region)
    }

    /// Tests a candidate value against the current selection via the
    /// configured comparator.
    #[must_use]
    pub fn is_value_selected(&self, value: &SelectionValue<T>, candidate: &T) -> bool {
        selection::is_selected(self.mode(), value, &self.eq, candidate)
    }

    /// Label of the catalog option matching a selected value, if any.
    fn label_for(&self, value: &T) -> Option<&str> {
        self.options
            .iter()
            .find(|option| (self.eq)(&option.value, value))
            .map(|option| option.label.as_str())
    }

    /// Computes an immutable view model from current state and the host value.
    ///
    /// The trigger summary resolves selected values to catalog labels through
    /// the configured comparator; values without a catalog entry are omitted
    /// (single mode falls back to the placeholder). The menu part is `None`
    /// while closed. Each row carries exactly the `{selected, active}` pair the
    /// presentation-override hooks receive.
    #[must_use]
    pub fn compute_view(&self, value: &SelectionValue<T>) -> SelectView {
        let items = selection::selected_items(self.mode(), value);
        let summary = if items.is_empty() {
            TriggerSummary::Placeholder(self.config.placeholder.clone())
        } else {
            match self.mode() {
                SelectionMode::Single => self.label_for(items[0]).map_or_else(
                    || TriggerSummary::Placeholder(self.config.placeholder.clone()),
                    |label| TriggerSummary::Single(label.to_string()),
                ),
                SelectionMode::Multi => TriggerSummary::Chips(
                    items
                        .iter()
                        .filter_map(|item| self.label_for(item))
                        .map(String::from)
                        .collect(),
                ),
            }
        };

        let menu = self.is_open().then(|| MenuView {
            query: self.query.clone(),
            search_visible: self.config.searchable,
            search_placeholder: self.config.search_placeholder.clone(),
            placement: self.placement,
            max_height: self.config.max_menu_height,
            empty_state: self.filtered.is_empty().then(|| NO_RESULTS.to_string()),
            rows: self
                .filtered
                .iter()
                .enumerate()
                .map(|(view_index, &catalog_index)| {
                    let option = &self.options[catalog_index];
                    RowView {
                        view_index,
                        label: option.label.clone(),
                        icon: option.icon.clone(),
                        disabled: option.disabled,
                        selected: selection::is_selected(
                            self.mode(),
                            value,
                            &self.eq,
                            &option.value,
                        ),
                        active: self.active == Some(view_index),
                    }
                })
                .collect(),
        });

        SelectView {
            trigger: TriggerView {
                disabled: self.config.disabled,
                summary,
            },
            menu,
        }
    }
}

impl<T: Clone> SelectState<T> {
    /// Computes the next selection value for a commit at a filtered-view index.
    ///
    /// Returns `None` — no value change, no side effects — when the index is
    /// out of bounds or the option is disabled.
    #[must_use]
    pub fn commit_at(
        &self,
        value: &SelectionValue<T>,
        view_index: usize,
    ) -> Option<SelectionValue<T>> {
        let option = self.visible_option(view_index)?;
        if option.disabled {
            tracing::debug!(view_index, "ignoring commit on disabled option");
            return None;
        }
        Some(selection::commit(
            self.mode(),
            value,
            &self.eq,
            &option.value,
        ))
    }

    /// Computes the next selection value after removing `target`.
    #[must_use]
    pub fn remove_value(&self, value: &SelectionValue<T>, target: &T) -> SelectionValue<T> {
        selection::remove(self.mode(), value, &self.eq, target)
    }

    /// Last selected item in insertion order, cloned, if any.
    #[must_use]
    pub fn last_selected(&self, value: &SelectionValue<T>) -> Option<T> {
        selection::selected_items(self.mode(), value)
            .last()
            .map(|item| (*item).clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> Vec<SelectOption<&'static str>> {
        vec![
            SelectOption::new("a", "Alpha"),
            SelectOption::new("b", "Beta").disabled(),
            SelectOption::new("c", "Gamma"),
        ]
    }

    fn open_state() -> SelectState<&'static str> {
        let mut state = SelectState::new(catalog(), SelectConfig::default());
        state.open();
        state
    }

    #[test]
    fn opening_targets_first_enabled_option() {
        let state = open_state();
        assert_eq!(state.lifecycle(), Lifecycle::Open);
        assert_eq!(state.active_index(), Some(0));
        assert!(state.is_watcher_armed());
    }

    #[test]
    fn opening_with_no_enabled_options_leaves_cursor_cleared() {
        let mut state = SelectState::new(
            vec![SelectOption::new("a", "Alpha").disabled()],
            SelectConfig::default(),
        );
        state.open();
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn cursor_skips_disabled_and_wraps() {
        // Catalog [A(enabled), B(disabled), C(enabled)]: open lands on A,
        // +1 skips B to C, +1 again wraps back to A.
        let mut state = open_state();
        assert_eq!(state.active_index(), Some(0));

        assert!(state.move_active(1));
        assert_eq!(state.active_index(), Some(2));

        assert!(state.move_active(1));
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn cursor_moves_backwards_with_wrap() {
        let mut state = open_state();
        assert!(state.move_active(-1));
        assert_eq!(state.active_index(), Some(2));
    }

    #[test]
    fn full_cycle_returns_cursor_to_origin() {
        let mut state = open_state();
        let origin = state.active_index();
        for _ in 0..state.view_len() {
            state.move_active(1);
        }
        assert_eq!(state.active_index(), origin);
    }

    #[test]
    fn fully_disabled_view_leaves_cursor_unchanged() {
        let mut state = SelectState::new(
            vec![
                SelectOption::new("a", "Alpha").disabled(),
                SelectOption::new("b", "Beta").disabled(),
            ],
            SelectConfig::default(),
        );
        state.open();
        assert!(!state.move_active(1));
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn empty_view_cursor_move_is_noop() {
        let mut state = SelectState::new(Vec::<SelectOption<&str>>::new(), SelectConfig::default());
        state.open();
        assert!(!state.move_active(1));
        assert!(!state.move_active(-1));
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn query_change_retargets_cursor_at_first_enabled_match() {
        let mut state = open_state();
        state.move_active(1);
        assert_eq!(state.active_index(), Some(2));

        state.push_query_char('g');
        let labels: Vec<&str> = state.visible_options().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Gamma"]);
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn query_with_no_matches_clears_cursor() {
        let mut state = open_state();
        state.set_query("zzz".to_string());
        assert_eq!(state.view_len(), 0);
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn non_searchable_control_ignores_query() {
        let config = SelectConfig {
            searchable: false,
            ..SelectConfig::default()
        };
        let mut state = SelectState::new(catalog(), config);
        state.open();
        state.set_query("zzz".to_string());
        assert_eq!(state.view_len(), 3);
    }

    #[test]
    fn closing_resets_query_cursor_and_watcher() {
        let mut state = open_state();
        state.push_query_char('a');
        state.close();

        assert_eq!(state.lifecycle(), Lifecycle::Closed);
        assert_eq!(state.query(), "");
        assert_eq!(state.active_index(), None);
        assert!(!state.is_watcher_armed());
    }

    #[test]
    fn watcher_pairing_survives_repeated_cycles() {
        let mut state = open_state();
        for _ in 0..5 {
            state.close();
            assert!(!state.is_watcher_armed());
            state.open();
            assert!(state.is_watcher_armed());
        }
    }

    #[test]
    fn post_render_task_runs_once() {
        let mut state = open_state();
        let work = state.take_post_render().expect("work scheduled on open");
        assert_eq!(work.focus, FocusTarget::Search);
        assert!(work.reposition);
        assert_eq!(state.take_post_render(), None);
    }

    #[test]
    fn post_render_task_focuses_list_when_not_searchable() {
        let config = SelectConfig {
            searchable: false,
            ..SelectConfig::default()
        };
        let mut state = SelectState::new(catalog(), config);
        state.open();
        let work = state.take_post_render().expect("work scheduled on open");
        assert_eq!(work.focus, FocusTarget::List);
    }

    #[test]
    fn rapid_close_cancels_pending_post_render_task() {
        let mut state = SelectState::new(catalog(), SelectConfig::default());
        state.open();
        state.close();
        assert_eq!(state.take_post_render(), None);
    }

    #[test]
    fn hover_on_disabled_option_is_ignored() {
        let mut state = open_state();
        assert!(!state.set_active(1));
        assert_eq!(state.active_index(), Some(0));
        assert!(state.set_active(2));
        assert_eq!(state.active_index(), Some(2));
    }

    #[test]
    fn catalog_replacement_refilters() {
        let mut state = open_state();
        state.set_options(vec![SelectOption::new("x", "Xi").disabled()]);
        assert_eq!(state.view_len(), 1);
        assert_eq!(state.active_index(), None);
    }
}
