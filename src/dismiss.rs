//! Outside-interaction dismissal watcher.
//!
//! While the menu is open, any pointer press landing outside both the trigger
//! region and the menu region should close it. The watcher implements this as
//! an explicit contains-check against the two tracked regions rather than
//! relying on event propagation order, which keeps behavior deterministic
//! regardless of how the menu is rendered (including portal rendering outside
//! normal layout flow).
//!
//! Arming and disarming are strictly paired with the Open/Closed lifecycle
//! transitions; a watcher left armed across repeated open/close cycles is a
//! defect the state machine guards against by disarming on every close.

use crate::geometry::{Point, Region};

/// Watches for pointer presses outside the trigger and menu regions.
///
/// The watcher itself is passive: the host forwards pointer-down events as
/// [`Event::PointerDown`](crate::Event::PointerDown) and the event handler
/// consults [`DismissWatcher::should_dismiss`]. When disarmed (menu closed)
/// every press is ignored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DismissWatcher {
    armed: bool,
}

impl DismissWatcher {
    /// Arms the watcher. Called on every `Closed -> Open` transition.
    pub fn arm(&mut self) {
        if self.armed {
            tracing::warn!("dismiss watcher armed while already armed");
        }
        self.armed = true;
    }

    /// Disarms the watcher. Called on every `Open -> Closed` transition.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Returns whether the watcher is currently armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Decides whether a pointer press should dismiss the menu.
    ///
    /// Returns `false` when disarmed. Otherwise the press dismisses unless it
    /// lands inside the trigger or menu region. A region whose handle is
    /// unavailable (e.g. unmounted) counts as "outside": a press can never be
    /// inside an element that no longer exists, so the menu closes rather than
    /// erroring.
    #[must_use]
    pub fn should_dismiss(
        &self,
        point: Point,
        trigger: Option<Region>,
        menu: Option<Region>,
    ) -> bool {
        if !self.armed {
            return false;
        }
        let inside = |region: Option<Region>| region.is_some_and(|r| r.contains(point));
        !inside(trigger) && !inside(menu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: Region = Region {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 40.0,
    };
    const MENU: Region = Region {
        x: 0.0,
        y: 46.0,
        width: 100.0,
        height: 200.0,
    };

    #[test]
    fn disarmed_watcher_ignores_everything() {
        let watcher = DismissWatcher::default();
        assert!(!watcher.should_dismiss(Point::new(500.0, 500.0), Some(TRIGGER), Some(MENU)));
    }

    #[test]
    fn press_inside_either_region_does_not_dismiss() {
        let mut watcher = DismissWatcher::default();
        watcher.arm();
        assert!(!watcher.should_dismiss(Point::new(50.0, 20.0), Some(TRIGGER), Some(MENU)));
        assert!(!watcher.should_dismiss(Point::new(50.0, 100.0), Some(TRIGGER), Some(MENU)));
    }

    #[test]
    fn press_outside_both_regions_dismisses() {
        let mut watcher = DismissWatcher::default();
        watcher.arm();
        assert!(watcher.should_dismiss(Point::new(500.0, 500.0), Some(TRIGGER), Some(MENU)));
    }

    #[test]
    fn missing_region_counts_as_outside() {
        let mut watcher = DismissWatcher::default();
        watcher.arm();
        // Even a press that would land inside the menu dismisses once the
        // menu handle is gone.
        assert!(watcher.should_dismiss(Point::new(50.0, 100.0), Some(TRIGGER), None));
        assert!(watcher.should_dismiss(Point::new(50.0, 100.0), None, None));
    }
}
