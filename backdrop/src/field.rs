//! Behaviour shared by every backdrop.

use crate::FieldRng;
use crate::viewport::LayoutSize;

/// Error returned when a field's configuration cannot produce a sensible animation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{min} must not exceed {max}")]
    InvertedRange { min: &'static str, max: &'static str },
}

/// A filled circle to draw, in viewport (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// A particle field advanced once per animation frame.
///
/// `scroll_y` is the document's vertical scroll offset; fields anchored to the
/// viewport ignore it.
pub trait Field {
    /// Fill colour for every dot.
    fn fill(&self) -> &'static str;

    /// React to a new layout size.
    fn resize(&mut self, rng: &mut FieldRng, size: LayoutSize, scroll_y: f64);

    /// Advance one frame.
    fn step(&mut self, rng: &mut FieldRng, size: LayoutSize, scroll_y: f64);

    /// Dots to draw this frame.
    fn dots(&self, size: LayoutSize, scroll_y: f64) -> Vec<Dot>;
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<(), FieldError> {
    if value > 0.0 { Ok(()) } else { Err(FieldError::NonPositive { field, value }) }
}

pub(crate) fn ordered(min: (&'static str, f64), max: (&'static str, f64)) -> Result<(), FieldError> {
    if min.1 <= max.1 { Ok(()) } else { Err(FieldError::InvertedRange { min: min.0, max: max.0 }) }
}

/// Uniform sample in `[min, max)`; returns `min` for an empty range.
pub(crate) fn between(rng: &mut FieldRng, min: f64, max: f64) -> f64 {
    use rand::Rng;
    min + rng.random::<f64>() * (max - min)
}
