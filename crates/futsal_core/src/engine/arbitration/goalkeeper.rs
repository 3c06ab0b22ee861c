//! Goalkeeper positioning and shot prediction.
//!
//! Geometry only: the keeper shadows the ball laterally and reads the
//! ball's straight-line path to the goal line.
//!
//! Key features:
//! - Lateral position: partial follow of the ball's Z, clamped to the goal area
//! - Shot detection: fast ball whose heading is within the alignment cone
//! - Arrival prediction: linear extrapolation to the goal-line X
//! - Near-miss detection: path crosses the line just outside the goal area

use serde::{Deserialize, Serialize};

use crate::engine::config::GoalkeeperConfig;
use crate::models::PitchPos;

/// Tuning defaults
pub mod constants {
    /// Share of the way from goal centre toward the ball's Z
    pub const LATERAL_RATIO: f32 = 0.6;
    /// cos(60°): ball heading within ±60° of the goal
    pub const SHOT_ALIGNMENT_THRESHOLD: f32 = 0.5;
    /// Below this |velocity.x| the ball is not travelling toward the line
    pub const MIN_VELOCITY_X: f32 = 1e-3;
    /// Extra width outside the goal area still counted as a near miss (m)
    pub const NEAR_MISS_MARGIN: f32 = 1.5;
    /// Slowest ball speed read as a shot (m/s)
    pub const SHOT_SPEED_THRESHOLD: f32 = 8.0;
}

/// Goal position and the width the keeper may cover. Fixed per keeper.
///
/// The half width is always a non-negative number: negative input is
/// mirrored and NaN collapses to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "GeometryParams")]
pub struct GoalkeeperGeometry {
    goal_area_half_width: f32,
    goal_center_x: f32,
    goal_center_z: f32,
}

/// Wire shape; deserialization goes through `GoalkeeperGeometry::new`.
#[derive(Deserialize)]
struct GeometryParams {
    goal_area_half_width: f32,
    goal_center_x: f32,
    goal_center_z: f32,
}

impl From<GeometryParams> for GoalkeeperGeometry {
    fn from(p: GeometryParams) -> Self {
        Self::new(p.goal_area_half_width, p.goal_center_x, p.goal_center_z)
    }
}

fn sanitize_half_width(width: f32) -> f32 {
    if width.is_nan() {
        0.0
    } else {
        width.abs()
    }
}

impl GoalkeeperGeometry {
    pub fn new(goal_area_half_width: f32, goal_center_x: f32, goal_center_z: f32) -> Self {
        Self {
            goal_area_half_width: sanitize_half_width(goal_area_half_width),
            goal_center_x,
            goal_center_z,
        }
    }

    pub fn goal_area_half_width(&self) -> f32 {
        self.goal_area_half_width
    }

    pub fn goal_center_x(&self) -> f32 {
        self.goal_center_x
    }

    pub fn goal_center_z(&self) -> f32 {
        self.goal_center_z
    }

    pub fn goal_center(&self) -> PitchPos {
        (self.goal_center_x, self.goal_center_z)
    }

    /// Clamp a Z coordinate into `goal_center_z ± goal_area_half_width`.
    ///
    /// Never panics: NaN bounds leave `z` unclamped on that side.
    pub fn clamp_z(&self, z: f32) -> f32 {
        let lo = self.goal_center_z - self.goal_area_half_width;
        let hi = self.goal_center_z + self.goal_area_half_width;
        z.max(lo).min(hi)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalkeeperPredictor {
    geometry: GoalkeeperGeometry,
    lateral_ratio: f32,
    shot_alignment_threshold: f32,
    shot_speed_threshold: f32,
    near_miss_margin: f32,
}

impl GoalkeeperPredictor {
    pub fn new(geometry: GoalkeeperGeometry) -> Self {
        Self {
            geometry,
            lateral_ratio: constants::LATERAL_RATIO,
            shot_alignment_threshold: constants::SHOT_ALIGNMENT_THRESHOLD,
            shot_speed_threshold: constants::SHOT_SPEED_THRESHOLD,
            near_miss_margin: constants::NEAR_MISS_MARGIN,
        }
    }

    pub fn from_config(config: &GoalkeeperConfig) -> Self {
        Self {
            geometry: GoalkeeperGeometry::new(
                config.goal_area_half_width,
                config.goal_center_x,
                config.goal_center_z,
            ),
            lateral_ratio: config.lateral_ratio,
            shot_alignment_threshold: config.shot_alignment_threshold,
            shot_speed_threshold: config.shot_speed_threshold,
            near_miss_margin: config.near_miss_margin,
        }
    }

    pub fn geometry(&self) -> &GoalkeeperGeometry {
        &self.geometry
    }

    /// Keeper Z: lerp from goal centre toward the ball, kept inside the goal area.
    ///
    /// The clamp is centred on the goal, not on Z = 0: with `goal_center_z = 10`
    /// and half width 2.5 the result lies in `7.5..=12.5`.
    pub fn lateral_position(&self, ball_z: f32) -> f32 {
        let center_z = self.geometry.goal_center_z;
        self.geometry.clamp_z(center_z + (ball_z - center_z) * self.lateral_ratio)
    }

    /// Fast enough and heading broadly at the goal.
    pub fn is_shot_detected(
        &self,
        ball_pos: PitchPos,
        ball_velocity: PitchPos,
        ball_speed: f32,
        speed_threshold: f32,
    ) -> bool {
        if ball_speed.is_nan() || ball_speed < speed_threshold {
            return false;
        }
        let to_goal = (
            self.geometry.goal_center_x - ball_pos.0,
            self.geometry.goal_center_z - ball_pos.1,
        );
        let (Some(dir_goal), Some(dir_ball)) = (normalize(to_goal), normalize(ball_velocity)) else {
            return false;
        };
        dot(dir_goal, dir_ball) > self.shot_alignment_threshold
    }

    /// `is_shot_detected` with speed from the velocity and the configured threshold.
    pub fn detects_shot(&self, ball_pos: PitchPos, ball_velocity: PitchPos) -> bool {
        let speed = length(ball_velocity);
        self.is_shot_detected(ball_pos, ball_velocity, speed, self.shot_speed_threshold)
    }

    /// Seconds until the ball reaches the goal-line X, `None` if it never will.
    pub fn time_to_goal_line(&self, ball_pos: PitchPos, ball_velocity: PitchPos) -> Option<f32> {
        let vx = ball_velocity.0;
        if !vx.is_finite() || vx.abs() < constants::MIN_VELOCITY_X {
            return None;
        }
        let t = (self.geometry.goal_center_x - ball_pos.0) / vx;
        if t < 0.0 {
            None
        } else {
            Some(t)
        }
    }

    fn raw_arrival_z(&self, ball_pos: PitchPos, ball_velocity: PitchPos) -> Option<f32> {
        self.time_to_goal_line(ball_pos, ball_velocity)
            .map(|t| ball_pos.1 + ball_velocity.1 * t)
    }

    /// Z where the ball crosses the goal line, clamped to the goal area.
    ///
    /// Moving away or no X velocity: the ball's current Z (clamped).
    pub fn predict_arrival_z(&self, ball_pos: PitchPos, ball_velocity: PitchPos) -> f32 {
        let z = self.raw_arrival_z(ball_pos, ball_velocity).unwrap_or(ball_pos.1);
        self.geometry.clamp_z(z)
    }

    /// Path crosses the goal line outside the goal area but within the margin.
    pub fn is_near_miss(&self, ball_pos: PitchPos, ball_velocity: PitchPos) -> bool {
        let Some(z) = self.raw_arrival_z(ball_pos, ball_velocity) else {
            return false;
        };
        let offset = (z - self.geometry.goal_center_z).abs();
        offset > self.geometry.goal_area_half_width
            && offset <= self.geometry.goal_area_half_width + self.near_miss_margin
    }
}

#[inline]
fn dot(a: PitchPos, b: PitchPos) -> f32 {
    a.0 * b.0 + a.1 * b.1
}

#[inline]
fn length(v: PitchPos) -> f32 {
    (v.0 * v.0 + v.1 * v.1).sqrt()
}

fn normalize(v: PitchPos) -> Option<PitchPos> {
    let len = length(v);
    if len > f32::EPSILON && len.is_finite() {
        Some((v.0 / len, v.1 / len))
    } else {
        None
    }
}
