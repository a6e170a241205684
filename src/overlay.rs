//! Pushes confirmed viewport state out to the host.
//!
//! Pure state-to-render projection: it consumes a [`ViewportSnapshot`] and
//! never reads pointer or gesture state. Runs after every model mutation.

use crate::data_types::{ChartRef, DataRect, ViewportSnapshot};
use crate::host::ChartHost;
use crate::viewport::ViewportModel;

/// Push the snapshot to every zoom chart and overlay rectangle.
///
/// After this returns, each zoom chart displays exactly `snapshot.x_zoom` by
/// its pair's Y window, and each overlay rectangle spans the same box.
pub fn sync(host: &mut impl ChartHost, snapshot: &ViewportSnapshot) {
    for (pair, zoom_y) in snapshot.zoom_y.iter().enumerate() {
        host.set_x_range(ChartRef::Zoom(pair), snapshot.x_zoom);
        host.set_y_range(ChartRef::Zoom(pair), *zoom_y);
        host.set_overlay_rect(pair, DataRect::new(snapshot.x_zoom, *zoom_y));
    }
}

/// Push the fixed overview display ranges after a limits reset, then run a
/// full [`sync`]. Overview ranges only change here, so this is the one place
/// that writes them.
pub fn apply_limits(host: &mut impl ChartHost, model: &ViewportModel) {
    for pair in 0..model.pair_count() {
        host.set_x_range(ChartRef::Overview(pair), model.x_bounds());
        if let Some(bounds) = model.overview_bounds(pair) {
            host.set_y_range(ChartRef::Overview(pair), bounds);
        }
    }
    sync(host, &model.snapshot());
}
