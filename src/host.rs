//! Adapter boundary to the owning application's chart widgets.

use crate::data_types::{ChartRef, DataRect, ScreenRect};
use crate::geometry::Span;

/// The owning application's chart surfaces.
///
/// The core reads screen-space geometry through this trait and writes
/// displayed ranges and overlay shapes back through it; it never creates,
/// renders, or destroys charts itself. Implementations map [`ChartRef`]
/// values onto their own widget handles.
pub trait ChartHost {
    /// Screen-space bounding box of a chart in canvas coordinates, or `None`
    /// while the chart has not been laid out yet (wheel events then miss).
    fn frame(&self, chart: ChartRef) -> Option<ScreenRect>;

    /// Set a chart's displayed X range.
    fn set_x_range(&mut self, chart: ChartRef, range: Span);

    /// Set a chart's displayed Y range.
    fn set_y_range(&mut self, chart: ChartRef, range: Span);

    /// Set the corner coordinates of a pair's overlay rectangle, in the
    /// overview chart's data space.
    fn set_overlay_rect(&mut self, pair: usize, rect: DataRect);
}
