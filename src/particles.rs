//! Drifting leaf sprites.
//!
//! Every leaf's full trajectory is fixed at construction by its sampled
//! parameters; pose and opacity at time `t` are a pure function of
//! `(params, t)`. There is no per-frame integration state, so frames can be
//! skipped, repeated, or evaluated out of order and always reproduce the
//! same image.

use crate::commands::{RenderCommand, RenderCommandList, Rgba};
use crate::constants::*;
use crate::easing::{cylindrical_to_cartesian, ease_out_circ};
use glam::{EulerRot, Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

/// Immutable per-leaf parameters sampled once at population construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafParams {
    pub texture_id: u32,
    /// Base orientation Euler angles (yaw, pitch, roll), radians.
    pub base_euler: Vec3,
    pub base_pos: Vec3,
    pub drift_x: f32,
    pub drift_y: f32,
    pub start_delay: f32,
    pub target_radius: f32,
    pub target_height: f32,
    pub angular_offset: f32,
    pub lifetime: f32,
}

/// Evaluated pose for one leaf at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafPose {
    pub position: Vec3,
    pub orientation: Quat,
    /// In [0, 1]; exactly 0 once the leaf has expired.
    pub opacity: f32,
}

impl LeafParams {
    pub fn sample(rng: &mut impl Rng) -> Self {
        let e = LEAF_BASE_POS_EXTENT;
        let base_pos = Vec3::new(
            rng.gen_range(-e..=e),
            rng.gen_range(-e..=e),
            rng.gen_range(-e..=e),
        );
        // Higher leaves launch later, staggering the initial burst
        let start_delay = (e + base_pos.y) / (2.0 * e) * LEAF_START_DELAY_MAX_SEC;
        let target_height = rng.gen_range(LEAF_TARGET_HEIGHT_MIN..=LEAF_TARGET_HEIGHT_MAX);
        // Mid-column targets bulge outward; the clamp keeps a minimum radius
        let bulge = 3.5 - (target_height - 4.0).abs();
        let target_radius =
            (rng.gen_range(0.1..=1.0_f32) + bulge * rng.gen_range(0.2..=0.4)).max(LEAF_TARGET_RADIUS_MIN);
        Self {
            texture_id: rng.gen_range(0..LEAF_TEXTURE_COUNT),
            base_euler: Vec3::new(
                rng.gen_range(0.0..TAU),
                rng.gen_range(0.0..TAU),
                rng.gen_range(0.0..TAU),
            ),
            base_pos,
            drift_x: rng.gen_range(-LEAF_DRIFT_X_EXTENT..=LEAF_DRIFT_X_EXTENT),
            drift_y: rng.gen_range(0.0..=LEAF_DRIFT_Y_MAX),
            start_delay,
            target_radius,
            target_height,
            angular_offset: rng.gen_range(0.0..TAU),
            lifetime: rng.gen_range(LEAF_LIFETIME_MIN_SEC..=LEAF_LIFETIME_MAX_SEC),
        }
    }

    /// Pose at `elapsed_sec` since the shared timer started. Pure and total
    /// for any `elapsed_sec >= 0`.
    pub fn evaluate(&self, elapsed_sec: f32) -> LeafPose {
        let hold = LEAF_PAUSE_SEC + self.start_delay;
        let t = (elapsed_sec - hold).max(0.0);

        // Appear ramp: small drift away from the base point during the hold
        let rise = (elapsed_sec / hold).clamp(0.0, 1.0);
        let base = self.base_pos + Vec3::new(self.drift_x * rise, self.drift_y * rise, 0.0);

        let radius = self.target_radius + t * LEAF_RADIUS_GROWTH_PER_SEC;
        let height = self.target_height + t * LEAF_HEIGHT_GROWTH_PER_SEC;
        let target =
            cylindrical_to_cartesian(radius, self.angular_offset + t * LEAF_ANGULAR_VEL_RAD, height);

        let e = ease_out_circ((t * LEAF_EASE_RATE_PER_SEC).min(1.0));
        let position = base.lerp(target, e);

        let opacity = (self.lifetime - t).min(1.0).max(0.0);

        let base_orientation = Quat::from_euler(
            EulerRot::YXZ,
            self.base_euler.x,
            self.base_euler.y,
            self.base_euler.z,
        );
        let spin = Quat::from_euler(
            EulerRot::YXZ,
            t * LEAF_SPIN_YAW_RAD,
            t * LEAF_SPIN_PITCH_RAD,
            0.0,
        );
        LeafPose {
            position,
            orientation: base_orientation * spin,
            opacity,
        }
    }
}

/// Fixed-size leaf population. Read-only after construction.
#[derive(Clone, Debug)]
pub struct LeafField {
    leaves: Vec<LeafParams>,
}

impl LeafField {
    /// Sample `LEAF_COUNT` leaves from an explicitly seeded RNG so a run is
    /// reproducible end to end.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let leaves = (0..LEAF_COUNT).map(|_| LeafParams::sample(&mut rng)).collect();
        Self { leaves }
    }

    pub fn leaves(&self) -> &[LeafParams] {
        &self.leaves
    }

    /// Emit sprite commands for every live leaf at `elapsed_sec`. Expired
    /// leaves are still evaluated; only their draw is skipped, keeping the
    /// evaluation itself branch-free on prior state.
    pub fn emit(&self, elapsed_sec: f32, out: &mut RenderCommandList) {
        let tint = Rgba::from_rgb(LEAF_COLOR);
        for leaf in &self.leaves {
            let pose = leaf.evaluate(elapsed_sec);
            if pose.opacity <= 0.0 {
                continue;
            }
            out.push(RenderCommand::Sprite3d {
                texture_id: leaf.texture_id,
                position: pose.position + LEAF_WORLD_OFFSET,
                orientation: pose.orientation,
                scale: LEAF_SPRITE_SCALE,
                tint: tint.with_alpha(pose.opacity),
            });
        }
    }
}
