//! Axis-aligned boxes and the geometry provider seam
//!
//! The simulation never reads element geometry directly. Whoever owns the
//! scene (the DOM on the web, synthetic boxes in tests) implements
//! [`GeometryProvider`] and the simulation snapshots it on every start.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal midpoint
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Source of element geometry, queried once per run start
pub trait GeometryProvider {
    /// Place this run's obstacles before they are measured.
    ///
    /// Called once per idle-to-running transition. Providers whose geometry
    /// is fixed leave this as a no-op.
    fn prepare_run(&mut self) {}

    /// Current box of the player element
    fn player_box(&self) -> BoundingBox;

    /// Boxes of every placed obstacle, in placement (left-to-right) order
    fn obstacle_boxes(&self) -> Vec<BoundingBox>;
}

/// Fixed set of boxes, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    pub player: BoundingBox,
    pub obstacles: Vec<BoundingBox>,
}

impl StaticGeometry {
    pub fn new(player: BoundingBox, obstacles: Vec<BoundingBox>) -> Self {
        Self { player, obstacles }
    }
}

impl GeometryProvider for StaticGeometry {
    fn player_box(&self) -> BoundingBox {
        self.player
    }

    fn obstacle_boxes(&self) -> Vec<BoundingBox> {
        self.obstacles.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_center_x() {
        let b = BoundingBox::new(40.0, 460.0, 30.0, 36.0);
        assert_eq!(b.center_x(), 55.0);
    }

    #[test]
    fn test_static_geometry_returns_snapshot() {
        let geometry = StaticGeometry::new(
            BoundingBox::new(40.0, 0.0, 30.0, 36.0),
            vec![BoundingBox::new(300.0, 450.0, 20.0, 50.0)],
        );
        assert_eq!(geometry.player_box().width, 30.0);
        assert_eq!(geometry.obstacle_boxes().len(), 1);
    }
}
