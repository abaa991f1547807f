//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Geometry only through [`GeometryProvider`]
//! - Stable queue order (left to right)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod physics;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{collides, reference_delta};
pub use geometry::{BoundingBox, GeometryProvider, StaticGeometry};
pub use physics::PlayerBody;
pub use state::{GameEvent, GameWorld, RunPhase, RunState, Tuning};
pub use tick::{request_jump, start, tick};
pub use track::{ObstacleQueue, ObstacleRecord};
