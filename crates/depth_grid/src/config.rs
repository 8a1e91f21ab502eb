//! Sampler configuration.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::grid::GridConfig;

/// Readings at or above this distance are not shown.
pub const DEFAULT_STALE_THRESHOLD: f32 = 100.0;
/// Running-minimum start value; what a region with no hits reports.
pub const DEFAULT_NO_HIT_SENTINEL: f32 = 999.0;

/// Configuration for an [`crate::sampler::AreaSampler`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Grid shape and neighborhood coverage.
    pub grid: GridConfig,
    /// Distance above which the center reading drops the tick, and at or above which
    /// region readings are withheld from the display.
    pub stale_threshold: f32,
    /// Value reported by a region whose neighborhood produced no usable hit.
    pub no_hit_sentinel: f32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            stale_threshold: DEFAULT_STALE_THRESHOLD,
            no_hit_sentinel: DEFAULT_NO_HIT_SENTINEL,
        }
    }
}

impl SamplerConfig {
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            ..Default::default()
        }
    }

    /// Sets the grid size.
    pub fn with_grid_size(mut self, rows: u32, cols: u32) -> Self {
        self.grid.rows = rows;
        self.grid.cols = cols;
        self
    }

    /// Sets the neighborhood coverage fraction.
    pub fn with_percent_of_view(mut self, percent_of_view: f64) -> Self {
        self.grid.percent_of_view = percent_of_view;
        self
    }

    /// Sets the staleness threshold.
    pub fn with_stale_threshold(mut self, stale_threshold: f32) -> Self {
        self.stale_threshold = stale_threshold;
        self
    }

    /// Sets the no-hit sentinel.
    pub fn with_no_hit_sentinel(mut self, no_hit_sentinel: f32) -> Self {
        self.no_hit_sentinel = no_hit_sentinel;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        if !(self.stale_threshold.is_finite() && self.stale_threshold > 0.0) {
            return Err(Error::InvalidConfig(
                "stale_threshold must be finite and > 0".into(),
            ));
        }
        if !self.no_hit_sentinel.is_finite() {
            return Err(Error::InvalidConfig("no_hit_sentinel must be finite".into()));
        }
        if self.no_hit_sentinel < self.stale_threshold {
            warn!(
                "no_hit_sentinel {} is below stale_threshold {}; regions without hits will be displayed.",
                self.no_hit_sentinel, self.stale_threshold
            );
        }

        Ok(())
    }
}
