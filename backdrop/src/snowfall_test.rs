#![allow(clippy::float_cmp)]

use super::*;
use crate::seeded_rng;

fn size() -> LayoutSize {
    LayoutSize::new(400.0, 300.0)
}

fn one_flake(flake: Flake) -> Snowfall {
    Snowfall { flakes: vec![flake] }
}

fn still(x: f64, y: f64) -> Flake {
    // wobble of -step makes the first sway sin(0) = 0.
    Flake { x, y, r: 1.0, vx: 0.0, vy: 1.0, wobble: -FLAKE_WOBBLE_STEP }
}

#[test]
fn new_samples_within_configured_ranges() {
    let field = Snowfall::new(SnowfallConfig::default(), &mut seeded_rng(21), size());
    assert_eq!(field.flakes().len(), 240);
    for f in field.flakes() {
        assert!((0.0..400.0).contains(&f.x));
        assert!((0.0..300.0).contains(&f.y));
        assert!((0.7..2.9).contains(&f.r));
        assert!((0.5..1.9).contains(&f.vy));
        assert!((-0.25..0.25).contains(&f.vx));
        assert!((0.0..TAU).contains(&f.wobble));
    }
}

#[test]
fn step_falls_and_sways() {
    let mut field = one_flake(Flake { x: 100.0, y: 50.0, r: 1.0, vx: 0.1, vy: 0.8, wobble: 0.0 });
    field.step(&mut seeded_rng(0), size(), 0.0);
    let f = field.flakes()[0];
    assert!((f.wobble - 0.01).abs() < 1e-12);
    assert!((f.x - (100.0 + 0.1 + 0.01_f64.sin() * 0.35)).abs() < 1e-12);
    assert!((f.y - 50.8).abs() < 1e-12);
}

#[test]
fn flake_below_bottom_reenters_above_top() {
    let mut field = one_flake(still(100.0, 312.5));
    field.step(&mut seeded_rng(3), size(), 0.0);
    let f = field.flakes()[0];
    assert_eq!(f.y, -12.0);
    assert!((0.0..400.0).contains(&f.x));
}

#[test]
fn flake_past_left_margin_wraps_right() {
    let mut field = one_flake(still(-20.5, 10.0));
    field.step(&mut seeded_rng(3), size(), 0.0);
    assert_eq!(field.flakes()[0].x, 420.0);
}

#[test]
fn flake_past_right_margin_wraps_left() {
    let mut field = one_flake(still(420.5, 10.0));
    field.step(&mut seeded_rng(3), size(), 0.0);
    assert_eq!(field.flakes()[0].x, -20.0);
}

#[test]
fn flakes_stay_in_band_over_many_frames() {
    let mut rng = seeded_rng(99);
    let mut field = Snowfall::new(SnowfallConfig { count: 60, ..SnowfallConfig::default() }, &mut rng, size());
    for _ in 0..2_000 {
        field.step(&mut rng, size(), 0.0);
    }
    for f in field.flakes() {
        assert!(f.y >= -12.0 && f.y <= 300.0 + 12.0 + 1.9);
        assert!(f.x >= -20.0 - 1.0 && f.x <= 420.0 + 1.0);
    }
}

#[test]
fn resize_keeps_flakes_in_place() {
    let mut rng = seeded_rng(8);
    let mut field = Snowfall::new(SnowfallConfig { count: 5, ..SnowfallConfig::default() }, &mut rng, size());
    let before = field.flakes().to_vec();
    field.resize(&mut rng, LayoutSize::new(10.0, 10.0), 0.0);
    assert_eq!(field.flakes(), &before[..]);
}

#[test]
fn dots_ignore_scroll() {
    let field = one_flake(Flake { x: 5.0, y: 6.0, r: 2.0, vx: 0.0, vy: 1.0, wobble: 0.0 });
    assert_eq!(field.dots(size(), 900.0), vec![Dot { x: 5.0, y: 6.0, r: 2.0 }]);
}

#[test]
fn config_validation() {
    assert!(SnowfallConfig::default().validate().is_ok());
    let inverted = SnowfallConfig { min_radius: 3.0, max_radius: 1.0, ..SnowfallConfig::default() };
    assert_eq!(
        inverted.validate(),
        Err(FieldError::InvertedRange { min: "snowfall.min_radius", max: "snowfall.max_radius" })
    );
    let still = SnowfallConfig { min_fall: 0.0, ..SnowfallConfig::default() };
    assert!(matches!(still.validate(), Err(FieldError::NonPositive { field: "snowfall.min_fall", .. })));
}
