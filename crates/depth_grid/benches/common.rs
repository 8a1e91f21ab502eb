#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use depth_grid::prelude::*;

pub const SAMPLE_SIZE: usize = 30;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Frame where every pixel hits a tilted plane: distance grows with `y`.
#[derive(Clone, Copy)]
pub struct PlaneFrame {
    pub height: u32,
}

impl HitTestFrame for PlaneFrame {
    type Hit = f32;

    fn hit_test(&self, _x: i32, y: i32) -> Vec<f32> {
        let t = 1.0 - y as f32 / self.height as f32;
        vec![0.5 + 4.0 * t]
    }
}

/// Session that is ready from the first tick.
pub struct PlaneSession {
    pub dims: FrameDimensions,
}

impl ArSession for PlaneSession {
    type Frame = PlaneFrame;

    fn frame_dimensions(&self) -> Option<FrameDimensions> {
        Some(self.dims)
    }

    fn current_frame(&self) -> Option<PlaneFrame> {
        Some(PlaneFrame {
            height: self.dims.height,
        })
    }
}
