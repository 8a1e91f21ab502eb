//! Event types and sinks for observing sampler activity.
//!
//! This module defines [`SamplerEvent`] and sinks that ignore, collect or forward events
//! while ticking an [`crate::sampler::AreaSampler`] via
//! [`crate::sampler::AreaSampler::on_tick_with_events`] or placing anchors via
//! [`crate::sampler::AreaSampler::on_tap_with_events`].
use glam::IVec2;

use crate::anchor::AnchorReport;
use crate::grid::GridSpec;
use crate::sampler::DistanceSample;

/// Describes events emitted by the sampler.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SamplerEvent {
    /// Emitted once per session, when frame dimensions first become available.
    GridInitialized {
        /// The planned grid.
        grid: GridSpec,
    },

    /// Emitted when a tick found no frame dimensions or no current frame.
    SessionUnavailable {
        /// Tick timestamp in seconds.
        now: f64,
    },

    /// Emitted after a region neighborhood was scanned.
    RegionSampled {
        /// The region reading.
        sample: DistanceSample,
    },

    /// Emitted after the frame center was probed.
    CenterProbed {
        /// Probed pixel.
        position: IVec2,
        /// First-record distance, if anything was hit.
        distance: Option<f32>,
    },

    /// Emitted when the center reading was missing or stale and the display was left untouched.
    TickDropped {
        /// Tick timestamp in seconds.
        now: f64,
        /// Center distance that caused the drop.
        center_distance: Option<f32>,
        /// Dropped ticks so far, including this one.
        dropped_ticks: u64,
    },

    /// Emitted when a tick published to the display.
    TickRendered {
        /// Tick timestamp in seconds.
        now: f64,
        /// Regions whose display text was updated.
        published: usize,
        /// Rendered ticks so far, including this one.
        rendered_ticks: u64,
    },

    /// Emitted when a tap created an anchor.
    AnchorPlaced {
        /// Pose summary of the new anchor.
        report: AnchorReport,
    },

    /// Non-fatal warning generated while sampling.
    Warning {
        /// Context string (e.g. "grid", "tap").
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// A generic event sink that accepts [`SamplerEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SamplerEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SamplerEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SamplerEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SamplerEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SamplerEvent),
{
    #[inline]
    fn send(&mut self, event: SamplerEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SamplerEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn as_slice(&self) -> &[SamplerEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SamplerEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(context: &str) -> SamplerEvent {
        SamplerEvent::Warning {
            context: context.into(),
            message: "m".into(),
        }
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::new();
        assert!(sink.is_empty());
        sink.send(warning("a"));
        sink.send(SamplerEvent::SessionUnavailable { now: 0.5 });
        assert_eq!(sink.len(), 2);
        assert!(matches!(
            sink.as_slice()[1],
            SamplerEvent::SessionUnavailable { now } if now == 0.5
        ));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(warning("ctx"));
        sink.send(warning("ctx"));
        drop(sink);
        assert_eq!(count, 2);
    }
}
