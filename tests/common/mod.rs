#![allow(dead_code)]

use std::collections::HashMap;

use zoomsync::{ChartHost, ChartRef, DataRect, ScreenRect, Span};

/// Host double that records every range and overlay push.
pub struct RecordingHost {
    frames: HashMap<ChartRef, ScreenRect>,
    pub x_ranges: HashMap<ChartRef, Span>,
    pub y_ranges: HashMap<ChartRef, Span>,
    pub overlays: HashMap<usize, DataRect>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            frames: HashMap::new(),
            x_ranges: HashMap::new(),
            y_ranges: HashMap::new(),
            overlays: HashMap::new(),
        }
    }

    /// Host with a row layout: per pair, a 100x100 overview at x = pair * 220
    /// and a 100x100 zoom chart 10 px to its right.
    pub fn with_layout(pairs: usize) -> Self {
        let mut host = Self::new();
        for pair in 0..pairs {
            let left = pair as f32 * 220.0;
            host.set_frame(
                ChartRef::Overview(pair),
                ScreenRect::new(left, 0.0, 100.0, 100.0),
            );
            host.set_frame(
                ChartRef::Zoom(pair),
                ScreenRect::new(left + 110.0, 0.0, 100.0, 100.0),
            );
        }
        host
    }

    pub fn set_frame(&mut self, chart: ChartRef, frame: ScreenRect) {
        self.frames.insert(chart, frame);
    }
}

impl ChartHost for RecordingHost {
    fn frame(&self, chart: ChartRef) -> Option<ScreenRect> {
        self.frames.get(&chart).copied()
    }

    fn set_x_range(&mut self, chart: ChartRef, range: Span) {
        self.x_ranges.insert(chart, range);
    }

    fn set_y_range(&mut self, chart: ChartRef, range: Span) {
        self.y_ranges.insert(chart, range);
    }

    fn set_overlay_rect(&mut self, pair: usize, rect: DataRect) {
        self.overlays.insert(pair, rect);
    }
}
