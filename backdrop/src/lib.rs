//! Decorative canvas backdrops: a drifting starfield and falling snow.
//!
//! Both effects are plain particle simulations advanced once per animation
//! frame. Simulation is pure and seeded, so it runs and tests natively;
//! only [`render`] touches the browser canvas.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | The [`field::Field`] trait shared by both effects, and [`field::Dot`] |
//! | [`starfield`] | Stars falling through the document, anchored to scroll position |
//! | [`snowfall`] | Wobbling snowflakes wrapping inside the viewport |
//! | [`viewport`] | Layout size and device-pixel-ratio backing store math |
//! | [`render`] | Canvas sizing and drawing |
//! | [`consts`] | Default particle counts, speeds and colours |

pub mod consts;
pub mod field;
pub mod render;
pub mod snowfall;
pub mod starfield;
pub mod viewport;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Random source used by every field.
pub type FieldRng = SmallRng;

/// Build a field RNG from a host-provided seed.
#[must_use]
pub fn seeded_rng(seed: u64) -> FieldRng {
    SmallRng::seed_from_u64(seed)
}
