//! Gesture interpretation: wheel, click, and drag-box, resolved against chart
//! frames and turned into viewport mutations.
//!
//! The controller owns the [`ViewportModel`] and coordinates it with the host:
//! every accepted gesture ends with an overlay sync, so client-visible state
//! is consistent when the handler returns. Gestures are transient; nothing is
//! remembered between them.

use std::sync::Arc;

use eyre::Result;
use parking_lot::RwLock;
use tracing::{debug, info, trace, warn};

use crate::data_types::{
    ChartRef, ControllerConfig, DataPoint, ScreenPoint, ScreenRect, ViewportSnapshot, WheelDirection,
    WheelEvent,
};
use crate::geometry::{map_pixels_to_value, Span};
use crate::host::ChartHost;
use crate::overlay;
use crate::viewport::ViewportModel;

pub struct GestureController {
    model: ViewportModel,
    config: ControllerConfig,
}

impl GestureController {
    /// Controller for `pair_count` chart pairs with default gesture tuning.
    pub fn new(pair_count: usize) -> Self {
        Self::with_config(pair_count, ControllerConfig::default())
    }

    pub fn with_config(pair_count: usize, config: ControllerConfig) -> Self {
        Self {
            model: ViewportModel::new(pair_count),
            config,
        }
    }

    pub fn model(&self) -> &ViewportModel {
        &self.model
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Opt in to click and drag-box gestures on zoom charts. Off by default;
    /// overview charts always accept them.
    pub fn enable_zoom_chart_gestures(&mut self) {
        self.config.zoom_chart_gestures = true;
        debug!("zoom chart gestures enabled");
    }

    /// Forward new data limits to the model and push everything back out:
    /// overview fixed ranges, zoom ranges, and overlay rectangles.
    pub fn set_limits(
        &mut self,
        host: &mut impl ChartHost,
        x_bounds: Span,
        per_pair_y_bounds: &[Span],
        initial_x_zoom: Span,
    ) -> Result<ViewportSnapshot> {
        let snapshot = self
            .model
            .set_limits(x_bounds, per_pair_y_bounds, initial_x_zoom)?;
        info!("viewport limits reset for {} pairs", per_pair_y_bounds.len());
        overlay::apply_limits(host, &self.model);
        Ok(snapshot)
    }

    /// Which chart is under `position`, if any.
    ///
    /// Linear scan over overview charts then zoom charts; the first frame
    /// containing the point wins, so overview charts take priority where
    /// geometries overlap.
    pub fn hit_test(&self, host: &impl ChartHost, position: ScreenPoint) -> Option<ChartRef> {
        self.locate(host, position).map(|(target, _)| target)
    }

    fn locate(
        &self,
        host: &impl ChartHost,
        position: ScreenPoint,
    ) -> Option<(ChartRef, ScreenRect)> {
        let pairs = self.model.pair_count();
        let overviews = (0..pairs).map(ChartRef::Overview);
        let zooms = (0..pairs).map(ChartRef::Zoom);
        for chart in overviews.chain(zooms) {
            if let Some(frame) = host.frame(chart) {
                if frame.contains(position) {
                    return Some((chart, frame));
                }
            }
        }
        None
    }

    /// Wheel gesture. Hit-tests the canvas position, maps it into the target
    /// chart's data space, and zooms: gently about the center on overview
    /// charts, toward the pointer on zoom charts. No hit target means no-op.
    pub fn on_wheel(&mut self, host: &mut impl ChartHost, event: WheelEvent) {
        if event.delta == 0.0 || !event.delta.is_finite() {
            return;
        }
        let Some((target, frame)) = self.locate(host, event.position) else {
            trace!("wheel ignored: no chart under pointer");
            return;
        };
        let Some((x_range, y_range)) = self.model.display_ranges(target) else {
            return;
        };
        let pointer = DataPoint::new(
            map_pixels_to_value(event.position.x - frame.x, frame.width, x_range, false),
            map_pixels_to_value(event.position.y - frame.y, frame.height, y_range, true),
        );
        let k = self.wheel_weight(event.delta);
        debug!("wheel zoom on {:?}, weight {:.3}", target, k);
        let snapshot = self.model.wheel_zoom_at(target, pointer, k);
        overlay::sync(host, &snapshot);
    }

    /// Click gesture: press and release at the same point, delivered in the
    /// origin chart's data coordinates. Recenters the shared X window on the
    /// clicked coordinate, width preserved; Y windows are untouched.
    pub fn on_press(&mut self, host: &mut impl ChartHost, chart: ChartRef, point: DataPoint) {
        if !self.accepts_gesture(chart) {
            return;
        }
        debug!("click recenter on {:?} at x {:.3}", chart, point.x);
        self.model.recenter_x(point.x);
        overlay::sync(host, &self.model.snapshot());
    }

    /// Drag-box gesture with host-captured corners in the origin chart's data
    /// coordinates, order-independent. The X extent becomes the shared window
    /// for every pair; the Y extent applies to the origin pair only. A box
    /// collapsed to a point is a click.
    pub fn on_drag(
        &mut self,
        host: &mut impl ChartHost,
        chart: ChartRef,
        p1: DataPoint,
        p2: DataPoint,
    ) {
        if !self.accepts_gesture(chart) {
            return;
        }
        if p1 == p2 {
            self.on_press(host, chart, p1);
            return;
        }
        debug!(
            "drag box on {:?}: ({:.3}, {:.3}) to ({:.3}, {:.3})",
            chart, p1.x, p1.y, p2.x, p2.y
        );
        self.model
            .zoom_to_range(chart.pair(), Span::new(p1.x, p2.x), Span::new(p1.y, p2.y));
        overlay::sync(host, &self.model.snapshot());
    }

    fn accepts_gesture(&self, chart: ChartRef) -> bool {
        if chart.pair() >= self.model.pair_count() {
            warn!("gesture on unknown pair: {:?}", chart);
            false
        } else if chart.is_overview() || self.config.zoom_chart_gestures {
            true
        } else {
            trace!("gesture on {:?} ignored, zoom chart gestures disabled", chart);
            false
        }
    }

    /// Signed zoom weight for a wheel delta under the configured direction
    /// convention. Positive zooms in.
    fn wheel_weight(&self, delta: f64) -> f64 {
        let zoom_in = match self.config.wheel_direction {
            WheelDirection::ScrollUpZoomsIn => delta > 0.0,
            WheelDirection::ScrollDownZoomsIn => delta < 0.0,
        };
        if zoom_in {
            self.config.wheel_ratio
        } else {
            -self.config.wheel_ratio
        }
    }
}

/// Clonable handle sharing one controller between host event closures.
///
/// A host typically installs one wheel handler on the canvas and one press or
/// drag handler per chart; each closure clones this handle. All mutations
/// serialize through the inner lock, and snapshots are taken inside it, so a
/// multi-threaded host can never observe a torn viewport.
#[derive(Clone)]
pub struct SharedController {
    inner: Arc<RwLock<GestureController>>,
}

impl SharedController {
    pub fn new(controller: GestureController) -> Self {
        Self {
            inner: Arc::new(RwLock::new(controller)),
        }
    }

    pub fn on_wheel(&self, host: &mut impl ChartHost, event: WheelEvent) {
        self.inner.write().on_wheel(host, event);
    }

    pub fn on_press(&self, host: &mut impl ChartHost, chart: ChartRef, point: DataPoint) {
        self.inner.write().on_press(host, chart, point);
    }

    pub fn on_drag(&self, host: &mut impl ChartHost, chart: ChartRef, p1: DataPoint, p2: DataPoint) {
        self.inner.write().on_drag(host, chart, p1, p2);
    }

    pub fn set_limits(
        &self,
        host: &mut impl ChartHost,
        x_bounds: Span,
        per_pair_y_bounds: &[Span],
        initial_x_zoom: Span,
    ) -> Result<ViewportSnapshot> {
        self.inner
            .write()
            .set_limits(host, x_bounds, per_pair_y_bounds, initial_x_zoom)
    }

    pub fn enable_zoom_chart_gestures(&self) {
        self.inner.write().enable_zoom_chart_gestures();
    }

    pub fn snapshot(&self) -> ViewportSnapshot {
        self.inner.read().model().snapshot()
    }

    /// Read access to the model under the lock.
    pub fn with_model<R>(&self, f: impl FnOnce(&ViewportModel) -> R) -> R {
        f(self.inner.read().model())
    }
}
