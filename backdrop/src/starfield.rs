//! Starfield: stars drifting down through the document.
//!
//! Stars live in document coordinates so they scroll with the page. A star
//! that falls below the viewport is recycled into a band just above the
//! current scroll position, keeping the visible sky populated however far the
//! reader scrolls.

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

use serde::{Deserialize, Serialize};

use crate::FieldRng;
use crate::consts::{
    STAR_COUNT, STAR_DRAW_MARGIN, STAR_FILL, STAR_MAX_SPEED, STAR_MIN_SPEED, STAR_RADIUS, STAR_RECYCLE_MARGIN,
    STAR_RESPAWN_BAND,
};
use crate::field::{Dot, Field, FieldError, between, ordered, positive};
use crate::viewport::LayoutSize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    pub radius: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub respawn_band: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            radius: STAR_RADIUS,
            min_speed: STAR_MIN_SPEED,
            max_speed: STAR_MAX_SPEED,
            respawn_band: STAR_RESPAWN_BAND,
        }
    }
}

impl StarfieldConfig {
    /// # Errors
    ///
    /// Returns [`FieldError`] if the count, radius or speeds are not positive,
    /// or the speed range is inverted.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<(), FieldError> {
        positive("starfield.count", self.count as f64)?;
        positive("starfield.radius", self.radius)?;
        positive("starfield.min_speed", self.min_speed)?;
        ordered(("starfield.min_speed", self.min_speed), ("starfield.max_speed", self.max_speed))?;
        positive("starfield.respawn_band", self.respawn_band)
    }
}

/// One star, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    config: StarfieldConfig,
    stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `config.count` stars over the viewport at the current scroll position.
    #[must_use]
    pub fn new(config: StarfieldConfig, rng: &mut FieldRng, size: LayoutSize, scroll_y: f64) -> Self {
        let mut field = Self { config, stars: Vec::with_capacity(config.count) };
        field.scatter(rng, size, scroll_y);
        field
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    fn scatter(&mut self, rng: &mut FieldRng, size: LayoutSize, scroll_y: f64) {
        let (min, max) = (self.config.min_speed, self.config.max_speed);
        self.stars = (0..self.config.count)
            .map(|_| Star {
                x: between(rng, 0.0, size.w),
                y: between(rng, 0.0, size.h) + scroll_y,
                speed: between(rng, min, max),
            })
            .collect();
    }
}

impl Field for Starfield {
    fn fill(&self) -> &'static str {
        STAR_FILL
    }

    fn resize(&mut self, rng: &mut FieldRng, size: LayoutSize, scroll_y: f64) {
        self.scatter(rng, size, scroll_y);
    }

    fn step(&mut self, rng: &mut FieldRng, size: LayoutSize, scroll_y: f64) {
        let config = self.config;
        for star in &mut self.stars {
            star.y += star.speed;
            if star.y - scroll_y > size.h + STAR_RECYCLE_MARGIN {
                star.y = scroll_y - between(rng, 0.0, config.respawn_band);
                star.x = between(rng, 0.0, size.w);
                star.speed = between(rng, config.min_speed, config.max_speed);
            }
            if star.x > size.w {
                star.x = between(rng, 0.0, size.w);
            }
        }
    }

    fn dots(&self, size: LayoutSize, scroll_y: f64) -> Vec<Dot> {
        self.stars
            .iter()
            .map(|s| (s.x, s.y - scroll_y))
            .filter(|&(_, sy)| (-STAR_DRAW_MARGIN..=size.h + STAR_DRAW_MARGIN).contains(&sy))
            .map(|(x, y)| Dot { x, y, r: self.config.radius })
            .collect()
    }
}
