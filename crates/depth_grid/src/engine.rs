//! Interfaces to the AR engine that tracks the camera and answers hit-tests.
//!
//! The sampler never talks to a concrete engine. It needs a session that reports
//! [`FrameDimensions`] and hands out frames, and frames that can be hit-tested.
//! Both may be unavailable for any number of ticks while the engine starts up.
use crate::grid::FrameDimensions;

/// One surface intersection reported by a hit-test.
pub trait HitRecord {
    /// Distance from the camera to the hit, in engine units. Never negative.
    fn distance(&self) -> f32;
}

impl HitRecord for f32 {
    #[inline]
    fn distance(&self) -> f32 {
        *self
    }
}

/// A camera frame that can be hit-tested at pixel coordinates.
pub trait HitTestFrame {
    type Hit: HitRecord;

    /// Surfaces behind pixel `(x, y)`, in the order the engine reports them.
    fn hit_test(&self, x: i32, y: i32) -> Vec<Self::Hit>;
}

/// Session-level access to camera intrinsics and the latest frame.
pub trait ArSession {
    type Frame: HitTestFrame;

    /// Camera stream resolution, or `None` while the session is not ready.
    fn frame_dimensions(&self) -> Option<FrameDimensions>;

    /// Latest camera frame, or `None` while the session is not ready.
    fn current_frame(&self) -> Option<Self::Frame>;
}
