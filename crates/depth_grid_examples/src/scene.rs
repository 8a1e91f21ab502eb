use std::cell::{Cell, RefCell};

use depth_grid::prelude::*;
use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Static room geometry seen by a pinhole camera at the origin looking down +Z.
///
/// The floor lies at `y = -camera_height` and ends at the wall, a vertical plane at
/// `z = wall_distance` that is `wall_height` tall. Everything else is empty space.
#[derive(Clone, Copy, Debug)]
pub struct Room {
    pub dims: FrameDimensions,
    /// Focal length in pixels.
    pub focal_px: f32,
    pub camera_height: f32,
    /// Downward camera tilt in radians.
    pub pitch: f32,
    pub wall_distance: f32,
    pub wall_height: f32,
}

impl Room {
    pub fn new(dims: FrameDimensions) -> Self {
        Self {
            dims,
            focal_px: dims.width as f32 * 0.8,
            camera_height: 1.4,
            pitch: 20f32.to_radians(),
            wall_distance: 3.0,
            wall_height: 2.5,
        }
    }

    pub fn with_pitch_degrees(mut self, degrees: f32) -> Self {
        self.pitch = degrees.to_radians();
        self
    }

    pub fn with_wall_distance(mut self, wall_distance: f32) -> Self {
        self.wall_distance = wall_distance;
        self
    }

    /// World-space unit ray through pixel `(x, y)`.
    pub fn ray(&self, x: i32, y: i32) -> Vec3 {
        let cx = self.dims.width as f32 * 0.5;
        let cy = self.dims.height as f32 * 0.5;
        let camera_dir = Vec3::new(
            (x as f32 - cx) / self.focal_px,
            -(y as f32 - cy) / self.focal_px,
            1.0,
        )
        .normalize();
        Quat::from_rotation_x(self.pitch) * camera_dir
    }

    /// All surface intersections along the ray through `(x, y)`, nearest first.
    pub fn intersect(&self, x: i32, y: i32) -> Vec<SceneHit> {
        let dir = self.ray(x, y);
        let mut hits = Vec::with_capacity(2);

        if dir.y < 0.0 {
            let t = -self.camera_height / dir.y;
            let p = dir * t;
            if p.z <= self.wall_distance {
                hits.push(SceneHit::new(t, p));
            }
        }

        if dir.z > 0.0 {
            let t = self.wall_distance / dir.z;
            let p = dir * t;
            if p.y >= -self.camera_height && p.y <= self.wall_height - self.camera_height {
                hits.push(SceneHit::new(t, p));
            }
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

/// A hit on the floor or the wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneHit {
    pub distance: f32,
    pub point: Vec3,
}

impl SceneHit {
    pub fn new(distance: f32, point: Vec3) -> Self {
        Self { distance, point }
    }
}

impl HitRecord for SceneHit {
    fn distance(&self) -> f32 {
        self.distance
    }
}

/// Anchor fixed at a scene hit point.
#[derive(Clone, Copy, Debug)]
pub struct SceneAnchor {
    pose: Pose,
}

impl Anchor for SceneAnchor {
    fn pose(&self) -> Pose {
        self.pose
    }
}

impl AnchorHit for SceneHit {
    type Anchor = SceneAnchor;

    fn create_anchor(&self) -> SceneAnchor {
        SceneAnchor {
            pose: Pose::from_translation(self.point),
        }
    }
}

/// One camera frame of the room.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticFrame {
    pub room: Room,
    /// Depth offset applied to every hit of this frame.
    pub depth_offset: f32,
    /// Whether tracking was available; untracked frames hit nothing.
    pub tracking: bool,
}

impl HitTestFrame for SyntheticFrame {
    type Hit = SceneHit;

    fn hit_test(&self, x: i32, y: i32) -> Vec<SceneHit> {
        if !self.tracking {
            return Vec::new();
        }
        let mut hits = self.room.intersect(x, y);
        for h in &mut hits {
            h.distance = (h.distance + self.depth_offset).max(0.0);
        }
        hits
    }
}

/// Simulated AR session: reports nothing for `warmup` queries, then produces frames
/// with random depth jitter and occasional tracking loss.
pub struct SyntheticSession {
    room: Room,
    warmup: u32,
    queries: Cell<u32>,
    ready: Cell<bool>,
    tracking_loss: f32,
    depth_noise: f32,
    rng: RefCell<StdRng>,
}

impl SyntheticSession {
    pub fn new(room: Room, seed: u64) -> Self {
        Self {
            room,
            warmup: 0,
            queries: Cell::new(0),
            ready: Cell::new(false),
            tracking_loss: 0.0,
            depth_noise: 0.0,
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Number of dimension queries answered with `None` before the session is ready.
    pub fn with_warmup(mut self, warmup: u32) -> Self {
        self.warmup = warmup;
        self
    }

    /// Probability in [0, 1] that a frame has no tracking.
    pub fn with_tracking_loss(mut self, tracking_loss: f32) -> Self {
        self.tracking_loss = tracking_loss.clamp(0.0, 1.0);
        self
    }

    /// Maximum absolute per-frame depth offset.
    pub fn with_depth_noise(mut self, depth_noise: f32) -> Self {
        self.depth_noise = depth_noise.max(0.0);
        self
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Noise-free, always-tracked frame for taps and rendering.
    pub fn clean_frame(&self) -> SyntheticFrame {
        SyntheticFrame {
            room: self.room,
            depth_offset: 0.0,
            tracking: true,
        }
    }
}

impl ArSession for SyntheticSession {
    type Frame = SyntheticFrame;

    fn frame_dimensions(&self) -> Option<FrameDimensions> {
        let n = self.queries.get();
        self.queries.set(n.saturating_add(1));
        if n < self.warmup {
            return None;
        }
        self.ready.set(true);
        Some(self.room.dims)
    }

    fn current_frame(&self) -> Option<SyntheticFrame> {
        if !self.ready.get() {
            return None;
        }
        let mut rng = self.rng.borrow_mut();
        let tracking = rand01(&mut *rng) >= self.tracking_loss;
        let depth_offset = (rand01(&mut *rng) * 2.0 - 1.0) * self.depth_noise;
        Some(SyntheticFrame {
            room: self.room,
            depth_offset,
            tracking,
        })
    }
}

/// Random float in [0, 1).
fn rand01(rng: &mut dyn Rng) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}
