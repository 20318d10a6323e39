//! Snowfall: flakes wobbling down the viewport and wrapping at its edges.

#[cfg(test)]
#[path = "snowfall_test.rs"]
mod snowfall_test;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::FieldRng;
use crate::consts::{
    FLAKE_COUNT, FLAKE_DRIFT, FLAKE_FILL, FLAKE_MAX_FALL, FLAKE_MAX_RADIUS, FLAKE_MIN_FALL, FLAKE_MIN_RADIUS,
    FLAKE_WOBBLE_AMPLITUDE, FLAKE_WOBBLE_STEP, FLAKE_WRAP_X, FLAKE_WRAP_Y,
};
use crate::field::{Dot, Field, FieldError, between, ordered, positive};
use crate::viewport::LayoutSize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowfallConfig {
    pub count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_fall: f64,
    pub max_fall: f64,
    /// Constant sideways drift is drawn from `[-drift, drift)`.
    pub drift: f64,
}

impl Default for SnowfallConfig {
    fn default() -> Self {
        Self {
            count: FLAKE_COUNT,
            min_radius: FLAKE_MIN_RADIUS,
            max_radius: FLAKE_MAX_RADIUS,
            min_fall: FLAKE_MIN_FALL,
            max_fall: FLAKE_MAX_FALL,
            drift: FLAKE_DRIFT,
        }
    }
}

impl SnowfallConfig {
    /// # Errors
    ///
    /// Returns [`FieldError`] for a non-positive count, radius or fall speed,
    /// or an inverted range.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<(), FieldError> {
        positive("snowfall.count", self.count as f64)?;
        positive("snowfall.min_radius", self.min_radius)?;
        ordered(("snowfall.min_radius", self.min_radius), ("snowfall.max_radius", self.max_radius))?;
        positive("snowfall.min_fall", self.min_fall)?;
        ordered(("snowfall.min_fall", self.min_fall), ("snowfall.max_fall", self.max_fall))
    }
}

/// One snowflake, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flake {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub vx: f64,
    pub vy: f64,
    /// Phase of the sideways sway, in radians.
    pub wobble: f64,
}

#[derive(Debug, Clone)]
pub struct Snowfall {
    flakes: Vec<Flake>,
}

impl Snowfall {
    #[must_use]
    pub fn new(config: SnowfallConfig, rng: &mut FieldRng, size: LayoutSize) -> Self {
        let flakes = (0..config.count)
            .map(|_| Flake {
                x: between(rng, 0.0, size.w),
                y: between(rng, 0.0, size.h),
                r: between(rng, config.min_radius, config.max_radius),
                vy: between(rng, config.min_fall, config.max_fall),
                vx: between(rng, -config.drift, config.drift),
                wobble: between(rng, 0.0, TAU),
            })
            .collect();
        Self { flakes }
    }

    #[must_use]
    pub fn flakes(&self) -> &[Flake] {
        &self.flakes
    }
}

impl Field for Snowfall {
    fn fill(&self) -> &'static str {
        FLAKE_FILL
    }

    /// Flakes keep their positions; the new size only moves the wrap edges.
    fn resize(&mut self, _rng: &mut FieldRng, _size: LayoutSize, _scroll_y: f64) {}

    fn step(&mut self, rng: &mut FieldRng, size: LayoutSize, _scroll_y: f64) {
        for flake in &mut self.flakes {
            flake.wobble += FLAKE_WOBBLE_STEP;
            flake.x += flake.vx + flake.wobble.sin() * FLAKE_WOBBLE_AMPLITUDE;
            flake.y += flake.vy;

            if flake.y > size.h + FLAKE_WRAP_Y {
                flake.y = -FLAKE_WRAP_Y;
                flake.x = between(rng, 0.0, size.w);
            }
            if flake.x < -FLAKE_WRAP_X {
                flake.x = size.w + FLAKE_WRAP_X;
            }
            if flake.x > size.w + FLAKE_WRAP_X {
                flake.x = -FLAKE_WRAP_X;
            }
        }
    }

    fn dots(&self, _size: LayoutSize, _scroll_y: f64) -> Vec<Dot> {
        self.flakes.iter().map(|f| Dot { x: f.x, y: f.y, r: f.r }).collect()
    }
}
