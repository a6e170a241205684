mod common;

use common::RecordingHost;
use zoomsync::data_types::{ChartRef, DataPoint, DataRect};
use zoomsync::geometry::Span;
use zoomsync::viewport::ViewportModel;
use zoomsync::overlay;

fn three_pair_model() -> ViewportModel {
    let mut model = ViewportModel::new(3);
    model
        .set_limits(
            Span::new(0.0, 100.0),
            &[Span::new(0.0, 10.0), Span::new(0.0, 20.0), Span::new(0.0, 30.0)],
            Span::new(25.0, 75.0),
        )
        .unwrap();
    model
}

#[test]
fn test_sync_pushes_every_pair() {
    let model = three_pair_model();
    let mut host = RecordingHost::new();
    overlay::sync(&mut host, &model.snapshot());

    for pair in 0..3 {
        assert_eq!(host.x_ranges[&ChartRef::Zoom(pair)], Span::new(25.0, 75.0));
    }
    assert_eq!(host.y_ranges[&ChartRef::Zoom(0)], Span::new(0.0, 10.0));
    assert_eq!(host.y_ranges[&ChartRef::Zoom(1)], Span::new(0.0, 20.0));
    assert_eq!(host.y_ranges[&ChartRef::Zoom(2)], Span::new(0.0, 30.0));
    // Overlay rectangles mirror the zoom windows exactly
    assert_eq!(
        host.overlays[&2],
        DataRect::new(Span::new(25.0, 75.0), Span::new(0.0, 30.0))
    );
    // sync never writes overview ranges
    assert_eq!(host.x_ranges.len(), 3);
    assert_eq!(host.y_ranges.len(), 3);
}

#[test]
fn test_sync_reflects_single_pair_y_change() {
    let mut model = three_pair_model();
    model.set_y_zoom(1, Span::new(5.0, 15.0));
    let mut host = RecordingHost::new();
    overlay::sync(&mut host, &model.snapshot());

    assert_eq!(
        host.overlays[&1],
        DataRect::new(Span::new(25.0, 75.0), Span::new(5.0, 15.0))
    );
    assert_eq!(
        host.overlays[&0],
        DataRect::new(Span::new(25.0, 75.0), Span::new(0.0, 10.0))
    );
}

#[test]
fn test_apply_limits_pushes_overview_ranges_too() {
    let model = three_pair_model();
    let mut host = RecordingHost::new();
    overlay::apply_limits(&mut host, &model);

    for pair in 0..3 {
        assert_eq!(host.x_ranges[&ChartRef::Overview(pair)], Span::new(0.0, 100.0));
        assert_eq!(host.x_ranges[&ChartRef::Zoom(pair)], Span::new(25.0, 75.0));
    }
    assert_eq!(host.y_ranges[&ChartRef::Overview(2)], Span::new(0.0, 30.0));
    assert_eq!(host.y_ranges[&ChartRef::Zoom(2)], Span::new(0.0, 30.0));
    assert_eq!(host.x_ranges.len(), 6);
}

#[test]
fn test_overlay_rect_corners_counter_clockwise() {
    let rect = DataRect::new(Span::new(20.0, 50.0), Span::new(-2.0, 3.0));
    assert_eq!(
        rect.corners(),
        [
            DataPoint::new(20.0, -2.0),
            DataPoint::new(50.0, -2.0),
            DataPoint::new(50.0, 3.0),
            DataPoint::new(20.0, 3.0),
        ]
    );
}
