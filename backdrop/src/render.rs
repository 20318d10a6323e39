//! Rendering: sizes the backdrop canvas and draws a field's dots.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads a field and a layout size and produces pixels; it never mutates
//! simulation state.
//!
//! All fallible `Canvas2D` and style calls propagate errors via
//! `Result<(), JsValue>`; the host's animation loop decides what to do with them.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::{Dot, Field};
use crate::viewport::LayoutSize;

/// Match the canvas backing store and CSS size to `size`, and scale the
/// context so drawing happens in CSS pixels.
///
/// # Errors
///
/// Returns `Err` if the style update or transform call fails.
pub fn fit_canvas(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    size: LayoutSize,
    dpr: f64,
) -> Result<(), JsValue> {
    let (backing_w, backing_h) = size.backing(dpr);
    canvas.set_width(backing_w);
    canvas.set_height(backing_h);

    let style = canvas.style();
    style.set_property("width", &format!("{}px", size.w))?;
    style.set_property("height", &format!("{}px", size.h))?;

    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
}

/// Clear the canvas and draw one frame of `field`.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &impl Field, size: LayoutSize, scroll_y: f64) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, size.w, size.h);
    ctx.set_fill_style_str(field.fill());
    for dot in field.dots(size, scroll_y) {
        draw_dot(ctx, dot)?;
    }
    Ok(())
}

fn draw_dot(ctx: &CanvasRenderingContext2d, dot: Dot) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(dot.x, dot.y, dot.r, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}
