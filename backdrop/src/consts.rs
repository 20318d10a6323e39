//! Default tuning for both backdrops.

// ── Starfield ───────────────────────────────────────────────────

pub const STAR_COUNT: usize = 320;
pub const STAR_RADIUS: f64 = 1.2;
pub const STAR_MIN_SPEED: f64 = 0.2;
pub const STAR_MAX_SPEED: f64 = 1.2;

/// Respawned stars appear up to this far above the viewport top.
pub const STAR_RESPAWN_BAND: f64 = 80.0;

/// Stars are drawn while within this margin of the viewport.
pub const STAR_DRAW_MARGIN: f64 = 5.0;

/// Stars this far below the viewport are recycled.
pub const STAR_RECYCLE_MARGIN: f64 = 10.0;

pub const STAR_FILL: &str = "white";

// ── Snowfall ────────────────────────────────────────────────────

pub const FLAKE_COUNT: usize = 240;
pub const FLAKE_MIN_RADIUS: f64 = 0.7;
pub const FLAKE_MAX_RADIUS: f64 = 2.9;
pub const FLAKE_MIN_FALL: f64 = 0.5;
pub const FLAKE_MAX_FALL: f64 = 1.9;

/// Half-width of the constant sideways drift range.
pub const FLAKE_DRIFT: f64 = 0.25;

pub const FLAKE_WOBBLE_STEP: f64 = 0.01;
pub const FLAKE_WOBBLE_AMPLITUDE: f64 = 0.35;

/// Flakes leaving the bottom re-enter this far above the top.
pub const FLAKE_WRAP_Y: f64 = 12.0;

/// Flakes wrap horizontally once this far outside either edge.
pub const FLAKE_WRAP_X: f64 = 20.0;

pub const FLAKE_FILL: &str = "rgba(255,255,255,0.9)";
