//! Actions representing side effects to be executed by the host runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions bridge the pure state transitions inside the core and the effectful
//! operations only the host can perform: persisting the new selection value,
//! moving real focus, and scrolling the active row into view.
//!
//! Value changes deserve emphasis: the core never stores the selection, so
//! [`Action::ValueChange`] always carries the *complete* next value. The host
//! adopts it (or not) and supplies its current value on the next event.

use crate::selection::SelectionValue;

/// Commands emitted by the event handler for the host runtime to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    /// Requests that the host adopt this complete next selection value.
    ///
    /// Emitted by commits, chip removal, and empty-query Backspace. The host
    /// remains the single source of truth; the core only proposes.
    ValueChange(SelectionValue<T>),

    /// Requests that real focus return to the trigger element.
    ///
    /// Emitted when Escape closes the menu so keyboard context is not lost.
    FocusTrigger,

    /// Requests that the presentation layer scroll the row at this filtered-view
    /// index into its visible region.
    ///
    /// Emitted whenever cursor navigation changes the active option. The clamp
    /// (keeping the row's leading/trailing edge inside the scrollable viewport)
    /// is a rendering-side concern; the core only names the row.
    ScrollActiveIntoView(usize),
}
