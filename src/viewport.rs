//! Viewport model: single source of truth for the shared X window and the
//! per-pair Y windows.
//!
//! Every public operation clamps its result against the fixed data bounds and
//! returns the confirmed state, so callers can rely on the invariants holding
//! the moment a call returns: the X window is always a sub-interval of the X
//! bounds, and each pair's Y window a sub-interval of its overview bounds.

use eyre::{bail, Result};

use crate::data_types::{ChartRef, DataPoint, ViewportSnapshot};
use crate::geometry::Span;

/// Smallest window width a zoom contraction may produce.
const MIN_SPAN: f64 = 1e-9;

/// Viewport state of one overview/zoom chart pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairState {
    overview_bounds: Span,
    zoom_y: Span,
}

impl PairState {
    fn new(bounds: Span) -> Self {
        Self {
            overview_bounds: bounds,
            zoom_y: bounds,
        }
    }

    /// Permanent Y display range of the overview chart.
    pub fn overview_bounds(&self) -> Span {
        self.overview_bounds
    }

    /// Current Y window shown on the zoom chart.
    pub fn zoom_y(&self) -> Span {
        self.zoom_y
    }
}

/// Owns the shared X-zoom window and all per-pair state.
///
/// The pair count is fixed at construction; chart identity is the pair index
/// (see [`ChartRef`]), never a handle to a chart object.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportModel {
    x_bounds: Span,
    x_zoom: Span,
    pairs: Vec<PairState>,
}

impl ViewportModel {
    /// Create a model for `pair_count` chart pairs with a placeholder domain.
    /// Call [`set_limits`](Self::set_limits) once the data bounds are known.
    pub fn new(pair_count: usize) -> Self {
        let domain = Span::new(0.0, 100.0);
        Self {
            x_bounds: domain,
            x_zoom: domain,
            pairs: vec![PairState::new(domain); pair_count],
        }
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn x_bounds(&self) -> Span {
        self.x_bounds
    }

    pub fn x_zoom(&self) -> Span {
        self.x_zoom
    }

    pub fn overview_bounds(&self, pair: usize) -> Option<Span> {
        self.pairs.get(pair).map(PairState::overview_bounds)
    }

    pub fn zoom_y(&self, pair: usize) -> Option<Span> {
        self.pairs.get(pair).map(PairState::zoom_y)
    }

    /// The X and Y data ranges a chart surface currently displays: fixed
    /// bounds on an overview chart, the live windows on a zoom chart.
    pub fn display_ranges(&self, chart: ChartRef) -> Option<(Span, Span)> {
        match chart {
            ChartRef::Overview(pair) => self
                .overview_bounds(pair)
                .map(|y| (self.x_bounds, y)),
            ChartRef::Zoom(pair) => self.zoom_y(pair).map(|y| (self.x_zoom, y)),
        }
    }

    /// Copy of the confirmed state for atomic publication to the host.
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            x_zoom: self.x_zoom,
            zoom_y: self.pairs.iter().map(PairState::zoom_y).collect(),
        }
    }

    /// Replace all fixed bounds and reset the zoom windows.
    ///
    /// Every pair's Y window snaps back to its overview bounds and the shared
    /// X window becomes `initial_x_zoom` clamped into `x_bounds`. Fails only
    /// when `per_pair_y_bounds` does not match the pair count; the model is
    /// left untouched in that case.
    pub fn set_limits(
        &mut self,
        x_bounds: Span,
        per_pair_y_bounds: &[Span],
        initial_x_zoom: Span,
    ) -> Result<ViewportSnapshot> {
        if per_pair_y_bounds.len() != self.pairs.len() {
            bail!(
                "limits carry {} Y ranges but {} chart pairs are registered",
                per_pair_y_bounds.len(),
                self.pairs.len()
            );
        }
        self.x_bounds = x_bounds;
        self.x_zoom = initial_x_zoom.intersect(x_bounds);
        for (pair, bounds) in self.pairs.iter_mut().zip(per_pair_y_bounds) {
            *pair = PairState::new(*bounds);
        }
        Ok(self.snapshot())
    }

    /// Shift the X window by `dx` times its width.
    ///
    /// At a domain edge the window stops instead of shrinking: the
    /// overshooting edge is clamped and the other edge re-derived from the
    /// width, so panning never narrows the view.
    pub fn pan(&mut self, dx: f64) -> Span {
        if !dx.is_finite() {
            return self.x_zoom;
        }
        let width = self.x_zoom.width();
        let shifted = self.x_zoom.shift_by_fraction(dx);
        self.x_zoom = if shifted.lo < self.x_bounds.lo {
            Span::new(self.x_bounds.lo, self.x_bounds.lo + width)
        } else if shifted.hi > self.x_bounds.hi {
            Span::new(self.x_bounds.hi - width, self.x_bounds.hi)
        } else {
            shifted
        };
        self.x_zoom
    }

    /// Scale the X window width by `factor` about its midpoint.
    ///
    /// `1.0` is a no-op, `2.0` doubles the width, `0.5` halves it. Each
    /// resulting endpoint is clamped independently against the domain, so
    /// zooming out next to an edge grows mostly toward the available side.
    pub fn zoom(&mut self, factor: f64) -> Span {
        if !factor.is_finite() || factor <= 0.0 {
            return self.x_zoom;
        }
        self.zoom_weighted((1.0 - factor) / 2.0)
    }

    /// Symmetric zoom by endpoint lerp weight `k` (each edge moves `k` of the
    /// width inward; negative moves outward). Shared by [`zoom`](Self::zoom)
    /// and the overview wheel path.
    fn zoom_weighted(&mut self, k: f64) -> Span {
        let width = self.x_zoom.width();
        // Cap contractions so the window never collapses below MIN_SPAN.
        let k = if k > 0.0 && width * (1.0 - 2.0 * k) < MIN_SPAN {
            ((1.0 - MIN_SPAN / width) / 2.0).max(0.0)
        } else {
            k
        };
        self.x_zoom = self.x_zoom.scale_around(k).intersect(self.x_bounds);
        self.x_zoom
    }

    /// Set the shared X window and one pair's Y window from a drag box.
    ///
    /// The X range applies to every pair (X is globally shared); the Y range
    /// only to `pair`. An out-of-range pair index leaves Y untouched and
    /// returns `None` for it. A box with a non-finite corner is ignored
    /// whole: intersecting a NaN endpoint would commit an inverted window.
    pub fn zoom_to_range(
        &mut self,
        pair: usize,
        x_range: Span,
        y_range: Span,
    ) -> (Span, Option<Span>) {
        if !(x_range.is_finite() && y_range.is_finite()) {
            return (self.x_zoom, self.zoom_y(pair));
        }
        self.x_zoom = x_range.intersect(self.x_bounds);
        let zoom_y = self.pairs.get_mut(pair).map(|state| {
            state.zoom_y = y_range.intersect(state.overview_bounds);
            state.zoom_y
        });
        (self.x_zoom, zoom_y)
    }

    /// Clamp and set only one pair's Y window. Non-finite input is ignored.
    pub fn set_y_zoom(&mut self, pair: usize, y_range: Span) -> Option<Span> {
        if !y_range.is_finite() {
            return self.zoom_y(pair);
        }
        self.pairs.get_mut(pair).map(|state| {
            state.zoom_y = y_range.intersect(state.overview_bounds);
            state.zoom_y
        })
    }

    /// Move the X window's midpoint to `center`, preserving width, then slide
    /// it back inside the domain if it overhangs an edge.
    pub fn recenter_x(&mut self, center: f64) -> Span {
        if !center.is_finite() {
            return self.x_zoom;
        }
        let half = self.x_zoom.width() / 2.0;
        self.x_zoom = Span::new(center - half, center + half).shift_into(self.x_bounds);
        self.x_zoom
    }

    /// Wheel zoom resolved against a chart surface.
    ///
    /// On an overview chart the weight is halved and applied about the X
    /// midpoint, ignoring the pointer. On a zoom chart both axes are pulled
    /// toward the pointer: X against the shared domain, Y against that pair's
    /// overview bounds. Positive `k` zooms in. A non-finite weight, or a
    /// non-finite pointer on a zoom chart, leaves the state untouched.
    pub fn wheel_zoom_at(&mut self, target: ChartRef, pointer: DataPoint, k: f64) -> ViewportSnapshot {
        if !k.is_finite() {
            return self.snapshot();
        }
        match target {
            ChartRef::Overview(_) => {
                self.zoom_weighted(k / 2.0);
            }
            ChartRef::Zoom(pair) => {
                if !(pointer.x.is_finite() && pointer.y.is_finite()) {
                    return self.snapshot();
                }
                let kx = contraction_cap(self.x_zoom, k);
                self.x_zoom = self
                    .x_zoom
                    .lerp_toward(pointer.x, kx)
                    .intersect(self.x_bounds);
                if let Some(state) = self.pairs.get_mut(pair) {
                    let ky = contraction_cap(state.zoom_y, k);
                    state.zoom_y = state
                        .zoom_y
                        .lerp_toward(pointer.y, ky)
                        .intersect(state.overview_bounds);
                }
            }
        }
        self.snapshot()
    }
}

/// Reduce a pointer-weighted contraction so `span` keeps at least MIN_SPAN.
fn contraction_cap(span: Span, k: f64) -> f64 {
    if k > 0.0 && span.width() * (1.0 - k) < MIN_SPAN {
        (1.0 - MIN_SPAN / span.width()).max(0.0)
    } else {
        k
    }
}
