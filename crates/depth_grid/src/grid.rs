//! Grid planning over a camera frame.
//!
//! This module defines [`FrameDimensions`], [`GridConfig`] and the derived [`GridSpec`]:
//! evenly spaced region centers plus the half-extents of the small pixel neighborhood
//! that is probed around each center. Use [`compute_grid`] to derive a [`GridSpec`].
use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_GRID_ROWS: u32 = 3;
pub const DEFAULT_GRID_COLS: u32 = 3;
pub const DEFAULT_PERCENT_OF_VIEW: f64 = 0.05;
/// Largest frame width or height a grid can be planned on. Pixel coordinates are `i32`.
pub const MAX_FRAME_EXTENT: u32 = i32::MAX as u32;

/// Pixel resolution of the active camera stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameDimensions {
    pub width: u32,
    pub height: u32,
}

impl FrameDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel at the middle of the frame, using integer division.
    pub fn center(&self) -> IVec2 {
        IVec2::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// Shape of the sampling grid and the share of the view covered by probe neighborhoods.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Number of region rows.
    pub rows: u32,
    /// Number of region columns.
    pub cols: u32,
    /// Fraction of each frame axis, in (0, 1], split across all neighborhoods on that axis.
    pub percent_of_view: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            percent_of_view: DEFAULT_PERCENT_OF_VIEW,
        }
    }
}

impl GridConfig {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ..Default::default()
        }
    }

    /// Sets the coverage fraction.
    pub fn with_percent_of_view(mut self, percent_of_view: f64) -> Self {
        self.percent_of_view = percent_of_view;
        self
    }

    /// Number of regions in the grid.
    pub fn region_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 {
            return Err(Error::InvalidConfig("rows must be >= 1".into()));
        }
        if self.cols < 1 {
            return Err(Error::InvalidConfig("cols must be >= 1".into()));
        }
        if !(self.percent_of_view.is_finite()
            && self.percent_of_view > 0.0
            && self.percent_of_view <= 1.0)
        {
            return Err(Error::InvalidConfig(format!(
                "percent_of_view must be in (0, 1], got {}",
                self.percent_of_view
            )));
        }
        Ok(())
    }
}

/// Half-open pixel rectangle `[min.x, max.x) × [min.y, max.y)` probed around a region center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    pub min: IVec2,
    pub max: IVec2,
}

impl Neighborhood {
    /// Neighborhood of size `2·half_width × 2·half_height` centered on `center`.
    pub fn around(center: IVec2, half_width: i32, half_height: i32) -> Self {
        let half = IVec2::new(half_width, half_height);
        Self {
            min: center.saturating_sub(half),
            max: center.saturating_add(half),
        }
    }

    pub fn width(&self) -> usize {
        (self.max.x - self.min.x).max(0) as usize
    }

    pub fn height(&self) -> usize {
        (self.max.y - self.min.y).max(0) as usize
    }

    /// Number of pixels covered.
    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Iterates covered pixels column by column (x outer, y inner).
    pub fn pixels(&self) -> impl Iterator<Item = IVec2> {
        let Self { min, max } = *self;
        (min.x..max.x).flat_map(move |x| (min.y..max.y).map(move |y| IVec2::new(x, y)))
    }
}

/// Region centers and probe radii derived from [`FrameDimensions`] and a [`GridConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSpec {
    /// Frame the grid was planned for.
    pub dimensions: FrameDimensions,
    pub rows: u32,
    pub cols: u32,
    /// Region centers in row-major order, top-left first.
    pub centers: Vec<IVec2>,
    /// Horizontal neighborhood radius in pixels.
    pub half_width: i32,
    /// Vertical neighborhood radius in pixels.
    pub half_height: i32,
}

impl GridSpec {
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// `(row, col)` of a region index.
    pub fn row_col(&self, index: usize) -> (u32, u32) {
        let cols = self.cols as usize;
        ((index / cols) as u32, (index % cols) as u32)
    }

    pub fn center(&self, index: usize) -> Option<IVec2> {
        self.centers.get(index).copied()
    }

    /// Probe neighborhood of a region.
    pub fn neighborhood(&self, index: usize) -> Option<Neighborhood> {
        self.center(index)
            .map(|c| Neighborhood::around(c, self.half_width, self.half_height))
    }

    /// Multi-line listing of every center followed by the neighborhood radii.
    pub fn describe(&self) -> String {
        let mut out = String::from("Coordinates:");
        for c in &self.centers {
            out.push_str(&format!("\nX:{} Y:{}", c.x, c.y));
        }
        out.push_str(&format!(
            "\nX-Delta:{} Y-Delta:{}",
            self.half_width, self.half_height
        ));
        out
    }
}

/// Evenly spaced 1-indexed positions: `(i + 1) * extent / (count + 1)`.
fn axis_centers(extent: u32, count: u32) -> Vec<i32> {
    (0..count as u64)
        .map(|i| ((i + 1) * extent as u64 / (count as u64 + 1)) as i32)
        .collect()
}

fn half_extent(extent: u32, count: u32, percent_of_view: f64) -> i32 {
    (extent as f64 * percent_of_view / (2.0 * count as f64)).floor() as i32
}

/// Plans the sampling grid for a frame.
///
/// Fails with [`Error::InvalidConfig`] when the config is out of range, and with
/// [`Error::InvalidDimensions`] when the frame is empty or wider or taller than
/// [`MAX_FRAME_EXTENT`]. The config is checked first.
pub fn compute_grid(dimensions: FrameDimensions, config: &GridConfig) -> Result<GridSpec> {
    config.validate()?;
    let FrameDimensions { width, height } = dimensions;
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions {
            width,
            height,
            reason: "must be > 0",
        });
    }
    if width > MAX_FRAME_EXTENT || height > MAX_FRAME_EXTENT {
        return Err(Error::InvalidDimensions {
            width,
            height,
            reason: "exceeds the i32 pixel range",
        });
    }

    let xs = axis_centers(dimensions.width, config.cols);
    let ys = axis_centers(dimensions.height, config.rows);

    let mut centers = Vec::with_capacity(config.region_count());
    for &y in &ys {
        for &x in &xs {
            centers.push(IVec2::new(x, y));
        }
    }

    Ok(GridSpec {
        dimensions,
        rows: config.rows,
        cols: config.cols,
        centers,
        half_width: half_extent(dimensions.width, config.cols, config.percent_of_view),
        half_height: half_extent(dimensions.height, config.rows, config.percent_of_view),
    })
}
