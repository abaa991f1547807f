//! Per-frame simulation tick and run transitions
//!
//! Signals (start, jump) only flip flags and snapshot geometry; all motion
//! happens in [`tick`].

use super::collision::collides;
use super::geometry::GeometryProvider;
use super::state::{GameEvent, GameWorld};
use super::track::ObstacleQueue;

/// Begin a run if idle: place obstacles, snapshot their geometry, refresh the
/// player's x and mark the run started.
///
/// Returns `None` when a run is already active.
pub fn start<G: GeometryProvider + ?Sized>(
    world: &mut GameWorld,
    geometry: &mut G,
) -> Option<GameEvent> {
    if world.run.started {
        return None;
    }

    geometry.prepare_run();
    world.obstacles = ObstacleQueue::from_boxes(&geometry.obstacle_boxes());
    world.player.x = geometry.player_box().x;
    world.run.started = true;

    let obstacles = world.obstacles.len();
    if obstacles == 0 {
        log::warn!("Run started with an empty obstacle track");
    }
    log::info!("Run started with {} obstacles", obstacles);
    Some(GameEvent::Started { obstacles })
}

/// Queue a jump for the next grounded tick, starting the run if idle
pub fn request_jump<G: GeometryProvider + ?Sized>(
    world: &mut GameWorld,
    geometry: &mut G,
) -> Option<GameEvent> {
    world.run.jump_requested = true;
    start(world, geometry)
}

/// Advance the world by one frame
pub fn tick(world: &mut GameWorld) -> Vec<GameEvent> {
    let mut events = Vec::new();
    world.frame += 1;

    if world.run.started {
        if world.player.try_jump(world.run.jump_requested, &world.tuning) {
            world.run.jump_requested = false;
            log::debug!("Jump at frame {}", world.frame);
            events.push(GameEvent::Jumped);
        }

        let speed = world.tuning.scroll_speed;
        world.obstacles.scroll(speed);
        world.run.scroll_offset -= speed;

        let player_box = world.player.bounding_box();
        let hit = world
            .obstacles
            .head()
            .filter(|head| collides(&player_box, &head.bounding_box(), &world.tuning))
            .map(|head| head.id);

        if let Some(passed) = world.obstacles.evict_passed(&world.player) {
            log::debug!("Obstacle {} passed", passed.id);
            events.push(GameEvent::ObstacleEvicted { id: passed.id });
        }

        if let Some(obstacle_id) = hit {
            log::info!(
                "Collision with obstacle {} at frame {} (scrolled {}px)",
                obstacle_id,
                world.frame,
                -world.run.scroll_offset
            );
            world.run.reset();
            events.push(GameEvent::Collided { obstacle_id });
        }
    }

    world.player.integrate(&world.tuning);
    events
}
