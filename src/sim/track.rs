//! Obstacle track
//!
//! Obstacles live in a queue ordered left to right, so the head is always the
//! nearest threat. The track only ever looks at the head.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::geometry::BoundingBox;
use super::physics::PlayerBody;

/// An active obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleRecord {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ObstacleRecord {
    pub fn from_box(id: u32, b: BoundingBox) -> Self {
        Self {
            id,
            x: b.x,
            y: b.y,
            width: b.width,
            height: b.height,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }

    /// True once the trailing edge (padded by the player's width) is behind the player
    #[inline]
    pub fn is_passed_by(&self, player: &PlayerBody) -> bool {
        self.x + self.width + player.width < player.x
    }
}

/// Obstacles of the current run, head first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleQueue {
    records: VecDeque<ObstacleRecord>,
}

impl ObstacleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from records, ordering them by x (stable for equal x)
    pub fn from_records(mut records: Vec<ObstacleRecord>) -> Self {
        records.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self {
            records: records.into(),
        }
    }

    /// Build a queue from geometry boxes, assigning ids in placement order
    pub fn from_boxes(boxes: &[BoundingBox]) -> Self {
        Self::from_records(
            boxes
                .iter()
                .enumerate()
                .map(|(i, b)| ObstacleRecord::from_box(i as u32, *b))
                .collect(),
        )
    }

    /// Nearest remaining obstacle
    pub fn head(&self) -> Option<&ObstacleRecord> {
        self.records.front()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstacleRecord> {
        self.records.iter()
    }

    /// Shift every obstacle left by `speed`
    pub fn scroll(&mut self, speed: f32) {
        for obstacle in &mut self.records {
            obstacle.x -= speed;
        }
    }

    /// Drop the head if the player has fully passed it.
    ///
    /// At most one obstacle leaves per call. If the scroll speed ever exceeds
    /// the obstacle spacing, a second passed obstacle stays queued until the
    /// next tick.
    pub fn evict_passed(&mut self, player: &PlayerBody) -> Option<ObstacleRecord> {
        if self.head()?.is_passed_by(player) {
            self.records.pop_front()
        } else {
            None
        }
    }
}
