//! Player jump physics
//!
//! Vertical motion only: constant gravity, a hard floor and an instantaneous
//! jump impulse. The player never moves horizontally; the world scrolls instead.

use serde::{Deserialize, Serialize};

use super::geometry::BoundingBox;
use super::state::Tuning;

/// The runner's physical state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Left edge, fixed once the run starts
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Vertical velocity per tick (positive = falling)
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
}

impl PlayerBody {
    /// Body at rest at the given box
    pub fn from_box(b: BoundingBox) -> Self {
        Self {
            x: b.x,
            y: b.y,
            velocity: 0.0,
            width: b.width,
            height: b.height,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }

    /// Standing on the floor (or at the very apex, which never happens in practice)
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.velocity == 0.0
    }

    /// Apply the jump impulse if one is requested and the player is grounded.
    ///
    /// Returns true when the request was consumed. A request made mid-air is
    /// left pending and fires on the first grounded tick.
    pub fn try_jump(&mut self, jump_requested: bool, tuning: &Tuning) -> bool {
        if jump_requested && self.is_grounded() {
            self.velocity = tuning.jump_impulse;
            true
        } else {
            false
        }
    }

    /// Advance one tick of gravity, clamping to the floor
    pub fn integrate(&mut self, tuning: &Tuning) {
        if self.y + self.velocity + self.height > tuning.floor_y {
            self.velocity = 0.0;
            self.y = tuning.floor_y - self.height;
        } else {
            self.velocity += tuning.gravity;
            self.y += self.velocity;
        }
    }

    /// Full physics step: impulse gate, then integration.
    ///
    /// Returns whether the jump request was consumed.
    pub fn tick(&mut self, jump_requested: bool, tuning: &Tuning) -> bool {
        let consumed = self.try_jump(jump_requested, tuning);
        self.integrate(tuning);
        consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grounded_body(tuning: &Tuning) -> PlayerBody {
        PlayerBody {
            x: 40.0,
            y: tuning.floor_y - 36.0,
            velocity: 0.0,
            width: 30.0,
            height: 36.0,
        }
    }

    #[test]
    fn test_settles_on_floor() {
        let tuning = Tuning::default();
        let mut body = PlayerBody::from_box(BoundingBox::new(40.0, 100.0, 30.0, 36.0));
        // Resting on the floor alternates between a clamp tick and a gravity tick
        for _ in 0..500 {
            body.tick(false, &tuning);
            if body.is_grounded() {
                break;
            }
        }
        assert_eq!(body.velocity, 0.0);
        assert_eq!(body.y, tuning.floor_y - body.height);
    }

    #[test]
    fn test_grounded_stays_grounded() {
        let tuning = Tuning::default();
        let mut body = grounded_body(&tuning);
        body.tick(false, &tuning);
        // First tick off the floor accelerates by gravity, second clamps back
        body.tick(false, &tuning);
        assert_eq!(body.y, tuning.floor_y - body.height);
        assert_eq!(body.velocity, 0.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let tuning = Tuning::default();
        let mut body = grounded_body(&tuning);
        let start_y = body.y;

        assert!(body.tick(true, &tuning));
        assert_eq!(body.velocity, tuning.jump_impulse + tuning.gravity);
        assert!(body.y < start_y);
    }

    #[test]
    fn test_jump_arc_returns_to_floor() {
        let tuning = Tuning::default();
        let mut body = grounded_body(&tuning);
        let floor_top = body.y;
        body.tick(true, &tuning);

        let mut apex = body.y;
        let mut landed_after = None;
        for t in 0..200 {
            body.tick(false, &tuning);
            apex = apex.min(body.y);
            if body.is_grounded() {
                landed_after = Some(t);
                break;
            }
        }
        assert!(landed_after.is_some(), "player never landed");
        assert_eq!(body.y, floor_top);
        // v^2 / 2g with v = 4, g = 0.17 is ~47px
        assert!(floor_top - apex > 40.0);
    }

    #[test]
    fn test_no_double_jump_keeps_request_pending() {
        let tuning = Tuning::default();
        let mut body = grounded_body(&tuning);
        body.tick(true, &tuning);
        let airborne_velocity = body.velocity;

        // Mid-air request is refused and not consumed
        let consumed = body.tick(true, &tuning);
        assert!(!consumed);
        assert_eq!(body.velocity, airborne_velocity + tuning.gravity);

        // Keep asking until landing; the request fires on the grounded tick
        let mut fired = false;
        for _ in 0..200 {
            if body.tick(true, &tuning) {
                fired = true;
                break;
            }
        }
        assert!(fired);
        assert!(body.velocity < 0.0);
    }

    proptest! {
        #[test]
        fn prop_floor_clamp(v in 0.0f32..50.0, depth in 0.01f32..100.0, height in 1.0f32..80.0) {
            let tuning = Tuning::default();
            // y chosen so that y + v + height exceeds the floor
            let y = tuning.floor_y - height - v + depth;
            let mut body = PlayerBody { x: 0.0, y, velocity: v, width: 10.0, height };
            prop_assume!(body.y + body.velocity + body.height > tuning.floor_y);
            body.integrate(&tuning);
            prop_assert_eq!(body.velocity, 0.0);
            prop_assert_eq!(body.y, tuning.floor_y - height);
        }

        #[test]
        fn prop_gravity_monotonic_while_airborne(v in -4.0f32..2.0, y in 0.0f32..200.0) {
            let tuning = Tuning::default();
            let mut body = PlayerBody { x: 0.0, y, velocity: v, width: 30.0, height: 36.0 };
            // Far above the floor, so no clamp for a few ticks
            for _ in 0..5 {
                let before = body.velocity;
                body.integrate(&tuning);
                prop_assert!(body.velocity > before);
                prop_assert!((body.velocity - before - tuning.gravity).abs() < 1e-4);
            }
        }
    }
}
