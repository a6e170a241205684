//! Pure range arithmetic used by the viewport model and the gesture controller.
//!
//! Everything here is stateless: intervals in, intervals out. Clamping policy
//! (which edge wins, whether width is preserved) lives with the callers.

use serde::{Deserialize, Serialize};

/// Closed numeric interval with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub lo: f64,
    pub hi: f64,
}

impl Span {
    /// Create a span, swapping the bounds if they arrive inverted.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn mid(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }

    /// Clamp a single value into the span.
    pub fn clamp_value(&self, value: f64) -> f64 {
        value.max(self.lo).min(self.hi)
    }

    /// Intersect with `bounds`, clamping both ends independently.
    ///
    /// Clamping is monotone, so a sorted span stays sorted; a span entirely
    /// outside `bounds` collapses to zero width at the nearer edge.
    pub fn intersect(&self, bounds: Span) -> Span {
        Span {
            lo: bounds.clamp_value(self.lo),
            hi: bounds.clamp_value(self.hi),
        }
    }

    /// Translate by `dx` times the current width.
    pub fn shift_by_fraction(&self, dx: f64) -> Span {
        let delta = dx * self.width();
        Span {
            lo: self.lo + delta,
            hi: self.hi + delta,
        }
    }

    /// Symmetric scale about the midpoint, expressed as an endpoint lerp:
    /// each end moves `k` of the width toward the other. `k > 0` contracts,
    /// `k < 0` expands, the midpoint never moves. Callers keep `k < 0.5`.
    pub fn scale_around(&self, k: f64) -> Span {
        Span {
            lo: self.lo * (1.0 - k) + self.hi * k,
            hi: self.hi * (1.0 - k) + self.lo * k,
        }
    }

    /// Pull both ends toward `pivot` by weight `k` (negative pushes away).
    ///
    /// The end nearer the pivot moves less, which is what makes wheel zoom
    /// feel anchored under the pointer.
    pub fn lerp_toward(&self, pivot: f64, k: f64) -> Span {
        Span {
            lo: self.lo * (1.0 - k) + pivot * k,
            hi: self.hi * (1.0 - k) + pivot * k,
        }
    }

    /// Slide the whole span until it fits inside `bounds`, preserving width.
    ///
    /// A span wider than `bounds` snaps to `bounds` instead.
    pub fn shift_into(&self, bounds: Span) -> Span {
        let width = self.width();
        if width > bounds.width() {
            return bounds;
        }
        if self.lo < bounds.lo {
            Span {
                lo: bounds.lo,
                hi: bounds.lo + width,
            }
        } else if self.hi > bounds.hi {
            Span {
                lo: bounds.hi - width,
                hi: bounds.hi,
            }
        } else {
            *self
        }
    }
}

/// Map a pixel offset within a chart frame to a value in `span`.
///
/// `invert` flips the direction for Y axes, where screen coordinates grow
/// downward but data values grow upward. Degenerate frames map to `span.lo`.
pub fn map_pixels_to_value(pixels: f32, total_pixels: f32, span: Span, invert: bool) -> f64 {
    if total_pixels <= 0.0 {
        return span.lo;
    }
    let pct = (pixels / total_pixels).clamp(0.0, 1.0) as f64;
    let effective_pct = if invert { 1.0 - pct } else { pct };
    span.lo + span.width() * effective_pct
}
