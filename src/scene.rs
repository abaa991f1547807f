//! Scene setup
//!
//! Decides, once per run, how many decorative clones to make and which lane
//! each obstacle template is translated to. The plan is seeded so a run can
//! be replayed; applying it to a real surface is the platform's job.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{BoundingBox, GeometryProvider};

/// Scene layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Obstacle templates cloned per run
    pub obstacle_pool: usize,
    /// Clones of each decorative layer
    pub decor_clones: usize,
    /// Candidate lane offsets (pixels)
    pub lanes: Vec<f32>,
    /// Headless layout: x of the first obstacle slot
    pub first_slot_x: f32,
    /// Headless layout: distance between obstacle slots
    pub slot_spacing: f32,
    /// Headless layout: obstacle size
    pub obstacle_width: f32,
    pub obstacle_height: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            obstacle_pool: OBSTACLE_POOL_SIZE,
            decor_clones: DECOR_CLONES,
            lanes: OBSTACLE_LANES.to_vec(),
            first_slot_x: 400.0,
            slot_spacing: 250.0,
            obstacle_width: 20.0,
            obstacle_height: 50.0,
        }
    }
}

/// Lane choice for every obstacle of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePlan {
    pub seed: u64,
    pub decor_clones: usize,
    /// Lane offset per obstacle, in placement order
    pub lane_offsets: Vec<f32>,
}

impl ScenePlan {
    /// Pick a lane for each pooled obstacle
    pub fn generate(seed: u64, config: &SceneConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let lane_offsets = if config.lanes.is_empty() {
            vec![0.0; config.obstacle_pool]
        } else {
            (0..config.obstacle_pool)
                .map(|_| config.lanes[rng.random_range(0..config.lanes.len())])
                .collect()
        };

        Self {
            seed,
            decor_clones: config.decor_clones,
            lane_offsets,
        }
    }

    /// `(index, lane_offset)` for each obstacle template
    pub fn placements(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.lane_offsets.iter().copied().enumerate()
    }

    pub fn obstacle_count(&self) -> usize {
        self.lane_offsets.len()
    }
}

/// Geometry for headless runs: lays the plan out on evenly spaced slots
/// resting on the floor, with a fresh plan on every run.
#[derive(Debug, Clone)]
pub struct PlannedGeometry {
    config: SceneConfig,
    player: BoundingBox,
    floor_y: f32,
    seed: u64,
    runs: u64,
    plan: Option<ScenePlan>,
}

impl PlannedGeometry {
    pub fn new(config: SceneConfig, player: BoundingBox, floor_y: f32, seed: u64) -> Self {
        Self {
            config,
            player,
            floor_y,
            seed,
            runs: 0,
            plan: None,
        }
    }

    /// Plan used by the current run, if one has started
    pub fn plan(&self) -> Option<&ScenePlan> {
        self.plan.as_ref()
    }

    fn slot_box(&self, index: usize, lane: f32) -> BoundingBox {
        BoundingBox::new(
            self.config.first_slot_x + index as f32 * self.config.slot_spacing + lane,
            self.floor_y - self.config.obstacle_height,
            self.config.obstacle_width,
            self.config.obstacle_height,
        )
    }
}

impl GeometryProvider for PlannedGeometry {
    fn prepare_run(&mut self) {
        let seed = self.seed.wrapping_add(self.runs);
        self.runs += 1;
        log::debug!("Planning scene for run {} (seed {})", self.runs, seed);
        self.plan = Some(ScenePlan::generate(seed, &self.config));
    }

    fn player_box(&self) -> BoundingBox {
        self.player
    }

    fn obstacle_boxes(&self) -> Vec<BoundingBox> {
        self.plan
            .as_ref()
            .map(|plan| {
                plan.placements()
                    .map(|(i, lane)| self.slot_box(i, lane))
                    .collect()
            })
            .unwrap_or_default()
    }
}
