//! Tick-driven distance sampling over the region grid.
//!
//! [`AreaSampler`] owns the [`SamplingState`] and the [`DisplayState`]. Each call to
//! [`AreaSampler::on_tick`]:
//!
//! 1. plans the grid if it is not planned yet, or returns
//!    [`TickStatus::SessionUnavailable`] while the session cannot report usable frame
//!    dimensions;
//! 2. scans every region neighborhood in row-major order;
//! 3. probes the frame center and drops the tick if that reading is missing or stale;
//! 4. otherwise shows the center reading and publishes every region reading below the
//!    stale threshold.
//!
//! Ticks never block. A host may keep ticking indefinitely while the session warms up,
//! but a grid config that can never be planned is reported as
//! [`TickStatus::InvalidConfig`] without consulting the session.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::anchor::{place_anchor, AnchorHit, Placement};
use crate::config::SamplerConfig;
use crate::display::DisplayState;
use crate::engine::ArSession;
use crate::error::{Error, Result};
use crate::grid::{compute_grid, GridSpec, Neighborhood};
use crate::probe::{probe_neighborhood, probe_point};

pub mod events;
pub mod state;
pub mod tick;

use events::{EventSink, SamplerEvent};
pub use state::SamplingState;
use tick::TickSource;

/// Minimum distance found in one region during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceSample {
    /// Row-major region index.
    pub region_index: usize,
    /// Nearest distance in the neighborhood, or the no-hit sentinel.
    pub distance: f32,
    /// Pixels in the neighborhood that hit a surface.
    pub hits: u32,
}

impl DistanceSample {
    /// No surface was detected in the neighborhood.
    pub fn is_absent(&self) -> bool {
        self.hits == 0
    }
}

/// Outcome of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TickStatus {
    /// Frame dimensions were missing or unusable, or there was no current frame.
    /// Nothing changed.
    SessionUnavailable,
    /// The center reading was missing or above the stale threshold. The display was left untouched.
    Dropped,
    /// Region readings below the stale threshold were published.
    Rendered,
    /// The grid config is out of range. Retrying will not help.
    InvalidConfig,
}

/// What a tick measured and did.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub status: TickStatus,
    /// One sample per region, in row-major order. Empty when the session was unavailable.
    pub samples: Vec<DistanceSample>,
    /// First-record distance at the frame center.
    pub center_distance: Option<f32>,
    /// Regions whose display text was updated.
    pub published: usize,
}

impl TickReport {
    fn empty(status: TickStatus) -> Self {
        Self {
            status,
            samples: Vec::new(),
            center_distance: None,
            published: 0,
        }
    }
}

/// Grid distance sampler for one AR session.
#[derive(Debug, Clone)]
pub struct AreaSampler {
    config: SamplerConfig,
    state: SamplingState,
    display: DisplayState,
    model_ready: bool,
}

impl Default for AreaSampler {
    fn default() -> Self {
        Self::new(SamplerConfig::default())
    }
}

impl AreaSampler {
    pub fn try_new(config: SamplerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn new(config: SamplerConfig) -> Self {
        debug_assert!(config.grid.rows >= 1, "rows must be >= 1");
        debug_assert!(config.grid.cols >= 1, "cols must be >= 1");
        debug_assert!(
            config.grid.validate().is_ok(),
            "percent_of_view must be in (0, 1]"
        );
        debug_assert!(
            config.stale_threshold > 0.0,
            "stale_threshold must be > 0"
        );

        Self {
            display: DisplayState::new(config.grid.region_count()),
            config,
            state: SamplingState::default(),
            model_ready: false,
        }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn state(&self) -> &SamplingState {
        &self.state
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn grid(&self) -> Option<&GridSpec> {
        self.state.grid.as_ref()
    }

    /// Forgets the session: grid, counters, timing and display texts.
    pub fn reset(&mut self) {
        self.state = SamplingState::default();
        self.display.clear();
    }

    /// Whether the placeable model has finished loading. Taps are ignored until it has.
    pub fn set_model_ready(&mut self, ready: bool) {
        self.model_ready = ready;
    }

    pub fn is_model_ready(&self) -> bool {
        self.model_ready
    }

    /// Runs one tick against `session` at time `now` (seconds).
    pub fn on_tick<S: ArSession>(&mut self, session: &S, now: f64) -> TickReport {
        self.on_tick_with_events(session, now, &mut ())
    }

    /// Runs one tick if `source` says one is due.
    pub fn drive<T, S>(&mut self, source: &mut T, session: &S, now: f64) -> Option<TickReport>
    where
        T: TickSource + ?Sized,
        S: ArSession,
    {
        source.poll(now).then(|| self.on_tick(session, now))
    }

    /// Runs one tick, reporting progress to `sink`.
    pub fn on_tick_with_events<S: ArSession>(
        &mut self,
        session: &S,
        now: f64,
        sink: &mut dyn EventSink,
    ) -> TickReport {
        if self.state.grid.is_none() {
            if let Err(status) = self.try_init_grid(session, now, sink) {
                return TickReport::empty(status);
            }
        }

        let Some(frame) = session.current_frame() else {
            debug!("Session has no current frame; retrying next tick.");
            sink.send(SamplerEvent::SessionUnavailable { now });
            return TickReport::empty(TickStatus::SessionUnavailable);
        };

        self.state.record_tick_time(now);

        let Some(grid) = self.state.grid.as_ref() else {
            return TickReport::empty(TickStatus::SessionUnavailable);
        };
        let sentinel = self.config.no_hit_sentinel;
        let threshold = self.config.stale_threshold;

        let mut samples = Vec::with_capacity(grid.len());
        for (region_index, &center) in grid.centers.iter().enumerate() {
            let area = Neighborhood::around(center, grid.half_width, grid.half_height);
            let reading = probe_neighborhood(&frame, area, sentinel);
            let sample = DistanceSample {
                region_index,
                distance: reading.min_distance,
                hits: reading.hits,
            };
            sink.send(SamplerEvent::RegionSampled { sample });
            samples.push(sample);
        }

        let center = grid.dimensions.center();
        let center_distance = probe_point(&frame, center.x, center.y);
        sink.send(SamplerEvent::CenterProbed {
            position: center,
            distance: center_distance,
        });

        let Some(center_reading) = center_distance.filter(|&d| d <= threshold) else {
            self.state.dropped_ticks += 1;
            debug!(
                "Dropped tick at {now:.3}s: center distance {center_distance:?} (dropped: {}).",
                self.state.dropped_ticks
            );
            sink.send(SamplerEvent::TickDropped {
                now,
                center_distance,
                dropped_ticks: self.state.dropped_ticks,
            });
            return TickReport {
                status: TickStatus::Dropped,
                samples,
                center_distance,
                published: 0,
            };
        };

        self.state.rendered_ticks += 1;
        self.display.set_center_distance(center_reading);
        let mut published = 0;
        for sample in samples.iter().filter(|s| s.distance < threshold) {
            if self.display.publish(sample.region_index, sample.distance) {
                published += 1;
            }
        }

        sink.send(SamplerEvent::TickRendered {
            now,
            published,
            rendered_ticks: self.state.rendered_ticks,
        });

        TickReport {
            status: TickStatus::Rendered,
            samples,
            center_distance,
            published,
        }
    }

    /// Plans the grid, or returns the status the tick ends with.
    fn try_init_grid<S: ArSession>(
        &mut self,
        session: &S,
        now: f64,
        sink: &mut dyn EventSink,
    ) -> std::result::Result<(), TickStatus> {
        if let Err(err) = self.config.grid.validate() {
            return Err(self.reject_config(&err, sink));
        }

        let Some(dimensions) = session.frame_dimensions() else {
            debug!("Session has no frame dimensions yet; retrying next tick.");
            sink.send(SamplerEvent::SessionUnavailable { now });
            return Err(TickStatus::SessionUnavailable);
        };

        match compute_grid(dimensions, &self.config.grid) {
            Ok(grid) => {
                info!(
                    "Planned {}x{} grid for {}x{} frame | half size: {}x{}.",
                    grid.rows,
                    grid.cols,
                    dimensions.width,
                    dimensions.height,
                    grid.half_width,
                    grid.half_height,
                );
                if grid.half_width == 0 || grid.half_height == 0 {
                    warn!("Probe neighborhoods are empty; every region will report no hit.");
                    sink.send(SamplerEvent::Warning {
                        context: "grid".into(),
                        message: "probe neighborhoods are empty".into(),
                    });
                }
                self.display.set_debug(grid.describe());
                sink.send(SamplerEvent::GridInitialized { grid: grid.clone() });
                self.state.grid = Some(grid);
                Ok(())
            }
            Err(err) if err.is_frame_related() => {
                warn!("Cannot plan grid: {err}; retrying next tick.");
                sink.send(SamplerEvent::Warning {
                    context: "grid".into(),
                    message: err.to_string(),
                });
                sink.send(SamplerEvent::SessionUnavailable { now });
                Err(TickStatus::SessionUnavailable)
            }
            Err(err) => Err(self.reject_config(&err, sink)),
        }
    }

    fn reject_config(&self, err: &Error, sink: &mut dyn EventSink) -> TickStatus {
        error!("Cannot plan grid: {err}.");
        sink.send(SamplerEvent::Warning {
            context: "config".into(),
            message: err.to_string(),
        });
        TickStatus::InvalidConfig
    }

    /// Places an anchor at a tapped surface and writes its pose to the debug text.
    ///
    /// Returns `None` while the model is not ready.
    pub fn on_tap<H: AnchorHit + ?Sized>(&mut self, hit: &H) -> Option<Placement<H::Anchor>> {
        self.on_tap_with_events(hit, &mut ())
    }

    pub fn on_tap_with_events<H: AnchorHit + ?Sized>(
        &mut self,
        hit: &H,
        sink: &mut dyn EventSink,
    ) -> Option<Placement<H::Anchor>> {
        if !self.model_ready {
            debug!("Ignoring tap: model not ready.");
            return None;
        }

        let placement = place_anchor(hit);
        self.display.set_debug(placement.report.to_string());
        sink.send(SamplerEvent::AnchorPlaced {
            report: placement.report,
        });
        Some(placement)
    }
}
