//! Selection model: pure value transformations.
//!
//! The host owns the selection value (controlled-value discipline). Every
//! function here is a stateless transformer from a current value plus an event
//! to the complete next value; the core never keeps its own copy of the
//! selection, so it can never diverge from the host's source of truth.
//!
//! Membership tests go through a pluggable comparator. The default is
//! structural equality (`PartialEq`) via [`structural_eq`]; hosts whose values
//! carry incidental fields can substitute a key-based comparator through
//! [`SelectState::with_comparator`](crate::SelectState::with_comparator).
//!
//! # Invariants
//!
//! - A multi-mode selection never contains comparator-equal duplicates:
//!   committing an already-selected value removes it (toggle, not append).
//! - Removal is order-preserving and idempotent.

use serde::{Deserialize, Serialize};

use crate::control::SelectionMode;

/// Pluggable equality comparator used for selection membership tests.
pub type EqFn<T> = Box<dyn Fn(&T, &T) -> bool>;

/// Returns the default structural-equality comparator.
#[must_use]
pub fn structural_eq<T: PartialEq + 'static>() -> EqFn<T> {
    Box::new(|a, b| a == b)
}

/// The host-owned selection value.
///
/// Single mode uses `Empty` or `Single`; multi mode uses `Empty` or `Multi`
/// with entries in the insertion order of selection actions. A value of the
/// wrong shape for the active mode (e.g. `Single` while in multi mode) is
/// treated as an empty selection rather than an error — see
/// [`selected_items`].
///
/// # Examples
///
/// ```
/// use headless_select::SelectionValue;
///
/// let single: SelectionValue<&str> = SelectionValue::Single("apple");
/// let multi = SelectionValue::Multi(vec!["apple", "pear"]);
/// assert!(!single.is_empty());
/// assert!(!multi.is_empty());
/// assert!(SelectionValue::<&str>::Empty.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionValue<T> {
    /// Nothing selected.
    Empty,
    /// Single-mode selection.
    Single(T),
    /// Multi-mode selection in insertion order.
    Multi(Vec<T>),
}

impl<T> SelectionValue<T> {
    /// Returns `true` when nothing is selected.
    ///
    /// `Multi` with an empty vector counts as empty; hosts may report an empty
    /// multi selection either way.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Single(_) => false,
            Self::Multi(items) => items.is_empty(),
        }
    }
}

/// Normalizes a host value into the list of currently selected items.
///
/// Multi mode yields the `Multi` entries in order and treats any other shape
/// as empty (malformed-value degradation). Single mode yields at most one
/// item and treats `Multi` as empty.
#[must_use]
pub fn selected_items<T>(mode: SelectionMode, value: &SelectionValue<T>) -> Vec<&T> {
    match (mode, value) {
        (SelectionMode::Multi, SelectionValue::Multi(items)) => items.iter().collect(),
        (SelectionMode::Single, SelectionValue::Single(item)) => vec![item],
        _ => Vec::new(),
    }
}

/// Tests whether a candidate value is part of the current selection.
#[must_use]
pub fn is_selected<T>(
    mode: SelectionMode,
    value: &SelectionValue<T>,
    eq: &dyn Fn(&T, &T) -> bool,
    candidate: &T,
) -> bool {
    selected_items(mode, value)
        .iter()
        .any(|item| eq(item, candidate))
}

/// Computes the next value after committing a candidate.
///
/// Single mode replaces the value outright. Multi mode toggles membership:
/// an already-selected candidate is removed (order-preserving filter), an
/// unselected one is appended at the end.
///
/// Disabled-option guarding happens in the event handler before this is
/// called; the selection model itself knows nothing about the catalog.
#[must_use]
pub fn commit<T: Clone>(
    mode: SelectionMode,
    value: &SelectionValue<T>,
    eq: &dyn Fn(&T, &T) -> bool,
    candidate: &T,
) -> SelectionValue<T> {
    match mode {
        SelectionMode::Single => SelectionValue::Single(candidate.clone()),
        SelectionMode::Multi => {
            let current = selected_items(mode, value);
            if current.iter().any(|item| eq(item, candidate)) {
                SelectionValue::Multi(
                    current
                        .into_iter()
                        .filter(|item| !eq(item, candidate))
                        .cloned()
                        .collect(),
                )
            } else {
                let mut next: Vec<T> = current.into_iter().cloned().collect();
                next.push(candidate.clone());
                SelectionValue::Multi(next)
            }
        }
    }
}

/// Computes the next value after removing a target value.
///
/// Single mode clears unconditionally. Multi mode filters out every
/// comparator-equal entry; removing an absent value returns the selection
/// unchanged.
#[must_use]
pub fn remove<T: Clone>(
    mode: SelectionMode,
    value: &SelectionValue<T>,
    eq: &dyn Fn(&T, &T) -> bool,
    target: &T,
) -> SelectionValue<T> {
    match mode {
        SelectionMode::Single => SelectionValue::Empty,
        SelectionMode::Multi => SelectionValue::Multi(
            selected_items(mode, value)
                .into_iter()
                .filter(|item| !eq(item, target))
                .cloned()
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn eq(a: &&str, b: &&str) -> bool {
        a == b
    }

    #[test]
    fn multi_commit_toggles_membership() {
        let value = SelectionValue::Multi(vec!["a"]);
        let with_b = commit(SelectionMode::Multi, &value, &eq, &"b");
        assert_eq!(with_b, SelectionValue::Multi(vec!["a", "b"]));

        // Committing again with no intervening changes undoes the commit.
        let toggled = commit(SelectionMode::Multi, &with_b, &eq, &"b");
        assert_eq!(toggled, SelectionValue::Multi(vec!["a"]));
    }

    #[test]
    fn multi_removal_preserves_order() {
        let value = SelectionValue::Multi(vec!["a", "b"]);
        let next = commit(SelectionMode::Multi, &value, &eq, &"a");
        assert_eq!(next, SelectionValue::Multi(vec!["b"]));
    }

    #[test]
    fn single_commit_replaces() {
        let value = SelectionValue::Single("a");
        let next = commit(SelectionMode::Single, &value, &eq, &"b");
        assert_eq!(next, SelectionValue::Single("b"));
    }

    #[test]
    fn remove_absent_value_is_idempotent() {
        let value = SelectionValue::Multi(vec!["a", "b"]);
        let next = remove(SelectionMode::Multi, &value, &eq, &"z");
        assert_eq!(next, SelectionValue::Multi(vec!["a", "b"]));
    }

    #[test]
    fn remove_in_single_mode_clears() {
        let value = SelectionValue::Single("a");
        assert_eq!(
            remove(SelectionMode::Single, &value, &eq, &"z"),
            SelectionValue::Empty
        );
    }

    #[test]
    fn malformed_multi_value_reads_as_empty() {
        let value = SelectionValue::Single("a");
        assert!(selected_items(SelectionMode::Multi, &value).is_empty());

        // Committing against the malformed value starts a fresh selection.
        let next = commit(SelectionMode::Multi, &value, &eq, &"b");
        assert_eq!(next, SelectionValue::Multi(vec!["b"]));
    }

    #[test]
    fn is_selected_respects_mode() {
        let value = SelectionValue::Multi(vec!["a"]);
        assert!(is_selected(SelectionMode::Multi, &value, &eq, &"a"));
        assert!(!is_selected(SelectionMode::Single, &value, &eq, &"a"));
    }
}
