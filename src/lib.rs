//! Linked overview/zoom chart viewport synchronization.
//!
//! A workspace shows N chart pairs: an overview chart with fixed ranges and a
//! zoom chart showing the current window. All zoom charts share one X window;
//! each pair has its own Y window. This crate owns that state, interprets
//! wheel, click, and drag-box gestures against it, and mirrors every change
//! back to the rendering host, including the viewport rectangle drawn on each
//! overview.
//!
//! The rendering side stays behind the [`ChartHost`] trait; the crate never
//! touches a toolkit directly.

pub mod controller;
pub mod data_types;
pub mod geometry;
pub mod host;
pub mod overlay;
pub mod viewport;

pub use controller::{GestureController, SharedController};
pub use data_types::{
    ChartRef, ControllerConfig, DataPoint, DataRect, ScreenPoint, ScreenRect, ViewportSnapshot,
    WheelDirection, WheelEvent,
};
pub use geometry::Span;
pub use host::ChartHost;
pub use viewport::ViewportModel;
