//! Geometry primitives for the positioning and dismissal boundaries.
//!
//! The core performs no anchored-position math of its own. It only needs three
//! small types: [`Point`] for pointer coordinates, [`Region`] for the host-reported
//! trigger and menu rectangles (hit-tested by the dismissal watcher), and
//! [`Placement`] for the opaque result handed back by the external positioning
//! collaborator. Placement values are stored and passed through to view models
//! without interpretation.

use serde::{Deserialize, Serialize};

/// A point in host coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in host coordinate space.
///
/// Used for the tracked trigger and menu regions. Containment uses half-open
/// edges so adjacent regions never both claim a boundary point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Checks whether a point is within this region.
    ///
    /// # Examples
    ///
    /// ```
    /// use headless_select::{Point, Region};
    ///
    /// let region = Region::new(10.0, 10.0, 100.0, 40.0);
    /// assert!(region.contains(Point::new(10.0, 10.0)));
    /// assert!(!region.contains(Point::new(110.0, 10.0)));
    /// ```
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Opaque placement computed by the external positioning collaborator.
///
/// The collaborator resolves collisions, flipping, and sizing against the
/// viewport; the core stores the result and forwards it to the menu view model
/// unchanged. `max_height` is the height constraint the collaborator derived
/// from available space and the configured menu height cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub max_height: f64,
}
