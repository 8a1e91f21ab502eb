//! Depth probing through engine hit-tests.
//!
//! [`probe_point`] reads a single pixel; [`probe_neighborhood`] scans a
//! [`Neighborhood`] and keeps the nearest reading.
//!
//! A single point reports the distance of the *first* record the engine returns,
//! which is not necessarily the nearest one at that pixel. Area readings take the
//! minimum across many pixels instead.
use glam::IVec2;

use crate::engine::{HitRecord, HitTestFrame};
use crate::grid::Neighborhood;

/// Distance of the first surface behind pixel `(x, y)`, or `None` when nothing was hit.
#[inline]
pub fn probe_point<F: HitTestFrame + ?Sized>(frame: &F, x: i32, y: i32) -> Option<f32> {
    frame.hit_test(x, y).first().map(HitRecord::distance)
}

/// Result of scanning a neighborhood.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaReading {
    /// Running minimum over all hits, starting from the no-hit sentinel.
    pub min_distance: f32,
    /// Pixels whose hit-test returned at least one record.
    pub hits: u32,
    /// Pixels probed.
    pub probed: u32,
}

impl AreaReading {
    pub fn is_hit(&self) -> bool {
        self.hits > 0
    }
}

/// Probes every pixel of `area` and returns the smallest first-record distance.
///
/// With no hits at all the reading carries `sentinel` unchanged.
pub fn probe_neighborhood<F: HitTestFrame + ?Sized>(
    frame: &F,
    area: Neighborhood,
    sentinel: f32,
) -> AreaReading {
    let mut reading = AreaReading {
        min_distance: sentinel,
        hits: 0,
        probed: 0,
    };

    for IVec2 { x, y } in area.pixels() {
        reading.probed += 1;
        let Some(distance) = probe_point(frame, x, y) else {
            continue;
        };
        reading.hits += 1;
        if distance < reading.min_distance {
            reading.min_distance = distance;
        }
    }

    reading
}
