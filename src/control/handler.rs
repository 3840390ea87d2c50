//! Event handling and lifecycle transition logic.
//!
//! This module implements the core event handler that processes discrete input
//! events from the host (keys, pointer presses, query edits, catalog updates),
//! mutates [`SelectState`] accordingly, and returns the actions the host must
//! execute. It is the single coordinator for every lifecycle transition.
//!
//! # Architecture
//!
//! Unidirectional flow, one event at a time:
//! 1. The host translates raw input into an [`Event`] and supplies its current
//!    selection value.
//! 2. [`handle_event`] pattern-matches the event and calls state methods.
//! 3. Actions are collected and returned alongside a render flag.
//!
//! The handler never stores the selection; value changes travel back to the
//! host as [`Action::ValueChange`] carrying the complete next value.
//!
//! # Keyboard contract
//!
//! | Focus / state           | Key                 | Effect                              |
//! |-------------------------|---------------------|-------------------------------------|
//! | Trigger, closed         | ArrowDown / ArrowUp | open, no selection change           |
//! | Trigger                 | Enter / Space       | toggle open                         |
//! | Menu, open              | Escape              | close, refocus trigger              |
//! | Menu, open              | ArrowDown / ArrowUp | move cursor (+1 / -1)               |
//! | Menu, open              | Enter               | commit option at cursor             |
//! | Search, multi, empty    | Backspace           | remove last selected value          |

use crate::control::actions::Action;
use crate::control::modes::SelectionMode;
use crate::control::state::SelectState;
use crate::domain::{Result, SelectOption};
use crate::geometry::Point;
use crate::selection::SelectionValue;

/// Keys the handler distinguishes. Character input reaches the query through
/// [`Event::SearchInput`] instead of a key variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Space,
    Escape,
}

/// Discrete input events translated from the host's raw input layer.
///
/// Each event may cause state changes and action emissions. The handler
/// processes them sequentially; there is no internal queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<T> {
    /// Pointer activation of the trigger surface (toggles the menu).
    TriggerClick,

    /// Key press while the trigger has focus.
    TriggerKey(Key),

    /// Key press while the menu (list or search input) has focus.
    MenuKey(Key),

    /// Pointer activation of the option at this filtered-view index.
    OptionClick(usize),

    /// Pointer hover over the option at this filtered-view index.
    OptionHover(usize),

    /// Character typed into the search input.
    SearchInput(char),

    /// Backspace in the search input. With an empty query in a searchable
    /// multi-select this removes the last selected value instead.
    SearchBackspace,

    /// Wholesale query replacement (e.g. paste or IME commit).
    SetQuery(String),

    /// Pointer press anywhere in the host surface, fed to the dismissal
    /// watcher while the menu is open.
    PointerDown(Point),

    /// Removal of one selected value (chip-style "x" in the trigger).
    RemoveValue(T),

    /// The host replaced the option catalog.
    OptionsChanged(Vec<SelectOption<T>>),
}

impl<T> Event<T> {
    /// Stable name for tracing spans, independent of `T`.
    fn kind(&self) -> &'static str {
        match self {
            Self::TriggerClick => "trigger_click",
            Self::TriggerKey(_) => "trigger_key",
            Self::MenuKey(_) => "menu_key",
            Self::OptionClick(_) => "option_click",
            Self::OptionHover(_) => "option_hover",
            Self::SearchInput(_) => "search_input",
            Self::SearchBackspace => "search_backspace",
            Self::SetQuery(_) => "set_query",
            Self::PointerDown(_) => "pointer_down",
            Self::RemoveValue(_) => "remove_value",
            Self::OptionsChanged(_) => "options_changed",
        }
    }
}

/// Processes one event against the state and the host-owned value.
///
/// Returns `(render, actions)`: whether visible state changed, plus the side
/// effects for the host runtime to execute. Every edge case the interaction
/// model defines (disabled commits, empty-view cursor moves, absent-value
/// removal, stale indices) degrades to `(false, [])` rather than an error —
/// the `Result` shape is kept for host boundaries that can fail in future.
///
/// # Examples
///
/// ```
/// use headless_select::{
///     handle_event, Action, Event, Key, SelectConfig, SelectOption, SelectState, SelectionValue,
/// };
///
/// let mut state = SelectState::new(
///     vec![SelectOption::new("a", "Alpha")],
///     SelectConfig::default(),
/// );
/// let value = SelectionValue::Empty;
///
/// let (render, _) = handle_event(&mut state, &value, &Event::TriggerKey(Key::ArrowDown))?;
/// assert!(render && state.is_open());
///
/// let (_, actions) = handle_event(&mut state, &value, &Event::MenuKey(Key::Enter))?;
/// assert_eq!(actions[0], Action::ValueChange(SelectionValue::Single("a")));
/// # Ok::<(), headless_select::SelectError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event<T: Clone>(
    state: &mut SelectState<T>,
    value: &SelectionValue<T>,
    event: &Event<T>,
) -> Result<(bool, Vec<Action<T>>)> {
    let _span = tracing::debug_span!("handle_event", event_kind = event.kind()).entered();

    match event {
        Event::TriggerClick => {
            if state.config().disabled {
                return Ok((false, vec![]));
            }
            toggle(state);
            Ok((true, vec![]))
        }
        Event::TriggerKey(key) => {
            if state.config().disabled {
                return Ok((false, vec![]));
            }
            match key {
                Key::ArrowDown | Key::ArrowUp => {
                    // Arrows open but never toggle closed.
                    if state.is_open() {
                        return Ok((false, vec![]));
                    }
                    state.open();
                    Ok((true, vec![]))
                }
                Key::Enter | Key::Space => {
                    toggle(state);
                    Ok((true, vec![]))
                }
                Key::Escape => Ok((false, vec![])),
            }
        }
        Event::MenuKey(key) => {
            if !state.is_open() {
                return Ok((false, vec![]));
            }
            match key {
                Key::Escape => {
                    state.close();
                    Ok((true, vec![Action::FocusTrigger]))
                }
                Key::ArrowDown => Ok(move_cursor(state, 1)),
                Key::ArrowUp => Ok(move_cursor(state, -1)),
                Key::Enter => {
                    let Some(active) = state.active_index() else {
                        return Ok((false, vec![]));
                    };
                    Ok(commit_at(state, value, active))
                }
                Key::Space => Ok((false, vec![])),
            }
        }
        Event::OptionClick(view_index) => {
            if !state.is_open() {
                return Ok((false, vec![]));
            }
            Ok(commit_at(state, value, *view_index))
        }
        Event::OptionHover(view_index) => {
            if !state.is_open() {
                return Ok((false, vec![]));
            }
            Ok((state.set_active(*view_index), vec![]))
        }
        Event::SearchInput(c) => {
            if !state.is_open() || !state.config().searchable {
                return Ok((false, vec![]));
            }
            state.push_query_char(*c);
            Ok((true, vec![]))
        }
        Event::SearchBackspace => {
            if !state.is_open() || !state.config().searchable {
                return Ok((false, vec![]));
            }
            if state.pop_query_char() {
                return Ok((true, vec![]));
            }
            // Empty query: in multi mode, peel off the last selected value.
            if state.mode() != SelectionMode::Multi {
                return Ok((false, vec![]));
            }
            let Some(last) = state.last_selected(value) else {
                return Ok((false, vec![]));
            };
            let next = state.remove_value(value, &last);
            Ok((true, vec![Action::ValueChange(next)]))
        }
        Event::SetQuery(query) => {
            if !state.is_open() || !state.config().searchable {
                return Ok((false, vec![]));
            }
            state.set_query(query.clone());
            Ok((true, vec![]))
        }
        Event::PointerDown(point) => {
            if state.should_dismiss(*point) {
                tracing::debug!("outside press dismissed menu");
                state.close();
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::RemoveValue(target) => {
            let next = state.remove_value(value, target);
            Ok((true, vec![Action::ValueChange(next)]))
        }
        Event::OptionsChanged(options) => {
            state.set_options(options.clone());
            Ok((true, vec![]))
        }
    }
}

/// Toggles the lifecycle for trigger activation (click, Enter, Space).
fn toggle<T>(state: &mut SelectState<T>) {
    if state.is_open() {
        state.close();
    } else {
        state.open();
    }
}

/// Moves the cursor and emits the scroll effect when it moved.
fn move_cursor<T>(state: &mut SelectState<T>, delta: i32) -> (bool, Vec<Action<T>>) {
    if !state.move_active(delta) {
        return (false, vec![]);
    }
    match state.active_index() {
        Some(active) => (true, vec![Action::ScrollActiveIntoView(active)]),
        None => (true, vec![]),
    }
}

/// Commits the option at a filtered-view index, closing afterwards when
/// configured to.
fn commit_at<T: Clone>(
    state: &mut SelectState<T>,
    value: &SelectionValue<T>,
    view_index: usize,
) -> (bool, Vec<Action<T>>) {
    let Some(next) = state.commit_at(value, view_index) else {
        return (false, vec![]);
    };
    if state.config().should_close_on_select() {
        state.close();
    }
    (true, vec![Action::ValueChange(next)])
}
