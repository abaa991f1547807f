//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameWorld`].

use serde::{Deserialize, Serialize};

use super::geometry::{BoundingBox, GeometryProvider};
use super::physics::PlayerBody;
use super::track::ObstacleQueue;
use crate::consts::*;

/// Tunable simulation constants (all per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    /// Negative = upward
    pub jump_impulse: f32,
    pub scroll_speed: f32,
    pub floor_y: f32,
    pub collision_tolerance_x: f32,
    pub collision_tolerance_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
            floor_y: FLOOR_Y,
            collision_tolerance_x: COLLISION_TOLERANCE_X,
            collision_tolerance_y: COLLISION_TOLERANCE_Y,
        }
    }
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Waiting for a start signal (initial, and after a collision)
    Idle,
    /// Obstacles scrolling
    Running,
}

/// Flags and counters of the current run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub started: bool,
    /// Set by the jump signal, cleared when the impulse fires or on reset
    pub jump_requested: bool,
    /// Accumulated horizontal scene displacement (pixels, <= 0)
    pub scroll_offset: f32,
}

impl RunState {
    pub fn phase(&self) -> RunPhase {
        if self.started {
            RunPhase::Running
        } else {
            RunPhase::Idle
        }
    }

    /// Back to the initial values
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Things that happened during a tick or signal, for the display layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began with this many obstacles queued
    Started { obstacles: usize },
    /// The jump impulse fired
    Jumped,
    /// The head obstacle was passed and dropped
    ObstacleEvicted { id: u32 },
    /// The player hit an obstacle and the run was reset
    Collided { obstacle_id: u32 },
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWorld {
    pub player: PlayerBody,
    pub obstacles: ObstacleQueue,
    pub run: RunState,
    pub tuning: Tuning,
    /// Frames simulated since creation
    pub frame: u64,
}

impl GameWorld {
    /// Idle world with the player resting at the given box
    pub fn new(player: BoundingBox, tuning: Tuning) -> Self {
        Self {
            player: PlayerBody::from_box(player),
            obstacles: ObstacleQueue::new(),
            run: RunState::default(),
            tuning,
            frame: 0,
        }
    }

    /// Idle world seeded from a geometry snapshot of the player
    pub fn from_geometry<G: GeometryProvider + ?Sized>(geometry: &G, tuning: Tuning) -> Self {
        Self::new(geometry.player_box(), tuning)
    }

    pub fn phase(&self) -> RunPhase {
        self.run.phase()
    }

    pub fn is_running(&self) -> bool {
        self.run.started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_is_idle() {
        let world = GameWorld::new(BoundingBox::new(40.0, 100.0, 30.0, 36.0), Tuning::default());
        assert_eq!(world.phase(), RunPhase::Idle);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.player.velocity, 0.0);
        assert_eq!(world.run.scroll_offset, 0.0);
    }

    #[test]
    fn test_run_state_reset() {
        let mut run = RunState {
            started: true,
            jump_requested: true,
            scroll_offset: -125.0,
        };
        assert_eq!(run.phase(), RunPhase::Running);
        run.reset();
        assert_eq!(run, RunState::default());
        assert_eq!(run.phase(), RunPhase::Idle);
    }

    #[test]
    fn test_tuning_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"scroll_speed": 7.5}"#).unwrap();
        assert_eq!(tuning.scroll_speed, 7.5);
        assert_eq!(tuning.gravity, GRAVITY);
    }
}
