//! Tap-to-place: anchor creation and pose diagnostics.
use std::fmt;

use glam::{Quat, Vec3};
use mint::{Quaternion, Vector3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World-space pose of an anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn new(translation: impl Into<Vector3<f32>>, rotation: impl Into<Quaternion<f32>>) -> Self {
        Self {
            translation: Vec3::from(translation.into()),
            rotation: Quat::from(rotation.into()),
        }
    }

    pub fn from_translation(translation: impl Into<Vector3<f32>>) -> Self {
        Self {
            translation: Vec3::from(translation.into()),
            rotation: Quat::IDENTITY,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// A fixed pose in tracked world space that content can be attached to.
pub trait Anchor {
    fn pose(&self) -> Pose;
}

/// A hit on a tracked surface that can be turned into an [`Anchor`].
pub trait AnchorHit {
    type Anchor: Anchor;

    fn create_anchor(&self) -> Self::Anchor;
}

/// Diagnostic summary of a placed anchor: its world coordinates and distance from the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnchorReport {
    pub translation: Vec3,
    /// Euclidean norm of `translation`.
    pub distance: f32,
}

impl AnchorReport {
    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            translation: pose.translation,
            distance: pose.translation.length(),
        }
    }
}

impl fmt::Display for AnchorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Vec3 { x, y, z } = self.translation;
        write!(f, "X = {x}\nY = {y}\nZ = {z}\nDist = {}", self.distance)
    }
}

/// An anchor created from a tap, handed back to the caller for attaching content.
#[derive(Debug)]
pub struct Placement<A> {
    pub anchor: A,
    pub report: AnchorReport,
}

/// Creates an anchor for `hit` and summarizes its pose.
pub fn place_anchor<H: AnchorHit + ?Sized>(hit: &H) -> Placement<H::Anchor> {
    let anchor = hit.create_anchor();
    let report = AnchorReport::from_pose(&anchor.pose());
    Placement { anchor, report }
}
