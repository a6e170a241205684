// Data structures shared by the viewport model, controller, and host boundary.

use serde::{Deserialize, Serialize};

use crate::geometry::Span;

/// Identity of one chart surface within the linked group.
///
/// The core owns no chart objects; it refers to them by pair index and hands
/// these references back to the host on every query and render push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRef {
    /// Overview chart of pair `i`: fixed full-extent view.
    Overview(usize),
    /// Zoom chart of pair `i`: shares the global X window.
    Zoom(usize),
}

impl ChartRef {
    pub fn pair(&self) -> usize {
        match self {
            Self::Overview(pair) | Self::Zoom(pair) => *pair,
        }
    }

    pub fn is_overview(&self) -> bool {
        matches!(self, Self::Overview(_))
    }
}

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in canvas space (pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Screen-space bounding box of a chart, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Axis-aligned box in data space; the shape pushed to overlay rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRect {
    pub x: Span,
    pub y: Span,
}

impl DataRect {
    pub fn new(x: Span, y: Span) -> Self {
        Self { x, y }
    }

    /// Corner coordinates, counter-clockwise from `(x.lo, y.lo)`.
    pub fn corners(&self) -> [DataPoint; 4] {
        [
            DataPoint::new(self.x.lo, self.y.lo),
            DataPoint::new(self.x.hi, self.y.lo),
            DataPoint::new(self.x.hi, self.y.hi),
            DataPoint::new(self.x.lo, self.y.hi),
        ]
    }
}

/// Wheel event as delivered by the host, position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub position: ScreenPoint,
    /// Signed scroll delta; only the sign selects the zoom direction.
    pub delta: f64,
}

impl WheelEvent {
    pub fn new(position: ScreenPoint, delta: f64) -> Self {
        Self { position, delta }
    }
}

/// Which scroll direction zooms in. Host conventions differ per platform, so
/// this stays a configuration knob rather than a hardcoded sign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDirection {
    /// Positive delta (scroll up / away) zooms in.
    #[default]
    ScrollUpZoomsIn,
    /// Negative delta (scroll down / toward the user) zooms in.
    ScrollDownZoomsIn,
}

/// Gesture tuning for a controller instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Zoom weight applied per wheel notch. Overview charts use half of it.
    pub wheel_ratio: f64,
    pub wheel_direction: WheelDirection,
    /// Accept click and drag-box gestures on zoom charts as well.
    pub zoom_chart_gestures: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            wheel_ratio: 0.2,
            wheel_direction: WheelDirection::default(),
            zoom_chart_gestures: false,
        }
    }
}

/// Immutable copy of the confirmed viewport state.
///
/// Taken after every mutation and handed to the overlay sync as one value, so
/// render pushes never observe a half-updated viewport.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    /// The shared X window displayed by every zoom chart.
    pub x_zoom: Span,
    /// Per-pair Y windows, indexed like the pairs themselves.
    pub zoom_y: Vec<Span>,
}

impl ViewportSnapshot {
    /// Overlay rectangle for one pair, or `None` past the pair count.
    pub fn overlay_rect(&self, pair: usize) -> Option<DataRect> {
        self.zoom_y
            .get(pair)
            .map(|zoom_y| DataRect::new(self.x_zoom, *zoom_y))
    }
}
