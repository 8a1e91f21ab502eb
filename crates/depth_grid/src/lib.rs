#![forbid(unsafe_code)]
//! depth_grid: grid-sampled distance measurement over AR engine hit-tests.
//!
//! Modules:
//! - grid: region centers and probe neighborhoods over a camera frame
//! - engine: traits the AR engine implements (session, frame hit-tests)
//! - probe: single-pixel and neighborhood depth probing
//! - sampler: tick-driven sampling, state, tick sources, events
//! - display: toolkit-independent region texts and debug text
//! - anchor: tap-to-place anchors and pose diagnostics
//! - config: sampler configuration
pub mod anchor;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod grid;
pub mod probe;
pub mod sampler;

/// Convenient re-exports for common types. Import with `use depth_grid::prelude::*;`.
pub mod prelude {
    pub use crate::anchor::{place_anchor, Anchor, AnchorHit, AnchorReport, Placement, Pose};
    pub use crate::config::{SamplerConfig, DEFAULT_NO_HIT_SENTINEL, DEFAULT_STALE_THRESHOLD};
    pub use crate::display::{format_distance, DisplayState, RegionLabel};
    pub use crate::engine::{ArSession, HitRecord, HitTestFrame};
    pub use crate::error::{Error, Result};
    pub use crate::grid::{
        compute_grid, FrameDimensions, GridConfig, GridSpec, Neighborhood, MAX_FRAME_EXTENT,
    };
    pub use crate::probe::{probe_neighborhood, probe_point, AreaReading};
    pub use crate::sampler::events::{EventSink, FnSink, SamplerEvent, VecSink};
    pub use crate::sampler::tick::{EveryFrame, FixedInterval, TickSource};
    pub use crate::sampler::{AreaSampler, DistanceSample, SamplingState, TickReport, TickStatus};
}
