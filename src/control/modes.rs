//! State machine enums for the interaction controller.
//!
//! These types describe *which* regime the control is operating in: whether
//! the menu is open, whether selection is single- or multi-valued, and which
//! element the deferred post-render work should focus.

/// Menu lifecycle state. Initial state is `Closed`.
///
/// There are exactly two states. Re-activating the trigger while `Open`
/// toggles back to `Closed` (Enter/Space/click) or is a no-op (arrow keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Menu hidden; query empty, cursor cleared, dismissal watcher disarmed.
    Closed,

    /// Menu visible; dismissal watcher armed, cursor tracking the filtered view.
    Open,
}

/// Selection cardinality, derived from [`SelectConfig::multiple`](crate::SelectConfig::multiple).
///
/// Single mode replaces the value on commit; multi mode toggles membership in
/// an ordered, duplicate-free sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// At most one value selected.
    Single,

    /// Ordered sequence of selected values.
    Multi,
}

/// Focus destination for the deferred post-render task scheduled on open.
///
/// Searchable controls focus the search input so typing filters immediately;
/// non-searchable controls focus the option list so arrow keys work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The search input inside the menu.
    Search,

    /// The option list itself.
    List,
}
