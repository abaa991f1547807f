//! City Runner - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle track, collisions, run state)
//! - `scene`: Seeded scene setup (obstacle lanes, decorative clones)
//! - `platform`: Browser/native platform abstraction (input, display, frame loop)
//! - `settings`: Data-driven tuning, persisted in LocalStorage

pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;

pub use scene::{SceneConfig, ScenePlan};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.17;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_IMPULSE: f32 = -4.0;
    /// Horizontal scroll per tick (pixels)
    pub const SCROLL_SPEED: f32 = 5.0;
    /// Ground plane; the player's bottom edge never goes below this
    pub const FLOOR_Y: f32 = 500.0;

    /// Collision forgiveness between player and obstacle centers
    pub const COLLISION_TOLERANCE_X: f32 = 10.0;
    pub const COLLISION_TOLERANCE_Y: f32 = 20.0;

    /// Obstacle templates cloned per run
    pub const OBSTACLE_POOL_SIZE: usize = 75;
    /// Clones of each decorative layer (clouds, buildings)
    pub const DECOR_CLONES: usize = 75;
    /// Horizontal lane offsets an obstacle may be translated to
    pub const OBSTACLE_LANES: [f32; 4] = [100.0, 150.0, 175.0, 200.0];

    /// SVG `cy` of the player is its y minus this offset
    pub const PLAYER_DISPLAY_OFFSET: f32 = 349.0;
    /// Shown in the start banner after a collision
    pub const FAILURE_MESSAGE: &str = "Oops! Hit any key start again.";
}
