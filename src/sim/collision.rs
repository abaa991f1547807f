//! Player vs obstacle collision
//!
//! Not a rectangle overlap test. Both boxes are reduced to a reference point
//! (horizontal center, vertical position shifted by their height difference)
//! and a hit is any pair of points closer than the per-axis tolerances. Near
//! misses are forgiven on purpose.

use glam::Vec2;

use super::geometry::BoundingBox;
use super::state::Tuning;

/// Offset from the player's reference point to the obstacle's
pub fn reference_delta(player: &BoundingBox, obstacle: &BoundingBox) -> Vec2 {
    let height_diff = (obstacle.height - player.height).abs();
    let player_point = Vec2::new(player.center_x(), player.y - height_diff);
    let obstacle_point = Vec2::new(obstacle.center_x(), obstacle.y + height_diff);
    obstacle_point - player_point
}

/// Check whether the player collides with an obstacle
pub fn collides(player: &BoundingBox, obstacle: &BoundingBox, tuning: &Tuning) -> bool {
    let delta = reference_delta(player, obstacle).abs();
    delta.x < tuning.collision_tolerance_x && delta.y < tuning.collision_tolerance_y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> Tuning {
        Tuning::default()
    }

    #[test]
    fn test_reference_example_collides() {
        let player = BoundingBox::new(40.0, 460.0, 30.0, 36.0);
        let obstacle = BoundingBox::new(45.0, 450.0, 20.0, 50.0);
        // heightDiff 14: player point (55, 446), obstacle point (55, 464)
        assert_eq!(reference_delta(&player, &obstacle), Vec2::new(0.0, 18.0));
        assert!(collides(&player, &obstacle, &tuning()));
    }

    #[test]
    fn test_horizontal_miss() {
        let player = BoundingBox::new(40.0, 460.0, 30.0, 36.0);
        let obstacle = BoundingBox::new(65.0, 450.0, 20.0, 50.0);
        // dx = 75 - 55 = 20
        assert!(!collides(&player, &obstacle, &tuning()));
    }

    #[test]
    fn test_tolerance_is_exclusive() {
        let player = BoundingBox::new(40.0, 460.0, 30.0, 36.0);
        // dx exactly 10
        let obstacle = BoundingBox::new(55.0, 450.0, 20.0, 50.0);
        assert!(!collides(&player, &obstacle, &tuning()));
    }

    #[test]
    fn test_jumping_clears_obstacle() {
        let grounded = BoundingBox::new(40.0, 464.0, 30.0, 36.0);
        let airborne = BoundingBox::new(40.0, 420.0, 30.0, 36.0);
        let obstacle = BoundingBox::new(45.0, 450.0, 20.0, 50.0);
        // Grounded: dy = 464 - 450 = 14
        assert!(collides(&grounded, &obstacle, &tuning()));
        // Airborne: dy = 464 - 406 = 58
        assert!(!collides(&airborne, &obstacle, &tuning()));
    }

    #[test]
    fn test_not_assumed_commutative() {
        let a = BoundingBox::new(40.0, 460.0, 30.0, 36.0);
        let b = BoundingBox::new(45.0, 450.0, 20.0, 50.0);
        // Swapping roles flips the sign of the height shift on each side
        let dy_ab = reference_delta(&a, &b).y;
        let dy_ba = reference_delta(&b, &a).y;
        assert_eq!(dy_ab, 18.0);
        assert_eq!(dy_ba, 38.0);
        assert!(collides(&a, &b, &tuning()));
        assert!(!collides(&b, &a, &tuning()));
    }

    #[test]
    fn test_custom_tolerances() {
        let player = BoundingBox::new(40.0, 460.0, 30.0, 36.0);
        let obstacle = BoundingBox::new(45.0, 450.0, 20.0, 50.0);
        let strict = Tuning {
            collision_tolerance_y: 15.0,
            ..Tuning::default()
        };
        assert!(!collides(&player, &obstacle, &strict));
    }
}
