//! Canvas sizing.
//!
//! The backdrop canvas covers the whole layout, which on phones showing the
//! desktop layout is wider than the visual viewport. The backing store is
//! scaled by the device pixel ratio so dots stay crisp.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Raw measurements read from the document and window.
#[derive(Debug, Clone, Copy, Default)]
pub struct Metrics {
    pub client_width: f64,
    pub client_height: f64,
    pub scroll_width: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

/// Size of the area the backdrop covers, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutSize {
    pub w: f64,
    pub h: f64,
}

impl LayoutSize {
    #[must_use]
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// Widest of the document and window widths; tallest of the window and
    /// document client heights.
    #[must_use]
    pub fn from_metrics(m: Metrics) -> Self {
        Self {
            w: m.client_width.max(m.scroll_width).max(m.inner_width),
            h: m.inner_height.max(m.client_height),
        }
    }

    /// Backing store dimensions in device pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing(self, dpr: f64) -> (u32, u32) {
        ((self.w * dpr).floor().max(0.0) as u32, (self.h * dpr).floor().max(0.0) as u32)
    }
}

/// Device pixel ratio as used for the backing store: never below 1.
#[must_use]
pub fn effective_dpr(raw: f64) -> f64 {
    if raw.is_finite() { raw.max(1.0) } else { 1.0 }
}
