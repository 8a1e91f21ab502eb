//! Tick sources that decide when the sampler runs.
//!
//! A host calls [`TickSource::poll`] from whatever loop it has (a scene-update callback,
//! a render loop, a timer thread) and runs [`crate::sampler::AreaSampler::on_tick`]
//! whenever it returns `true`. [`crate::sampler::AreaSampler::drive`] does both.
use crate::error::{Error, Result};

/// Default period of [`FixedInterval`], in seconds.
pub const DEFAULT_TICK_PERIOD: f64 = 0.5;

/// Decides whether a tick is due at time `now` (seconds).
pub trait TickSource {
    fn poll(&mut self, now: f64) -> bool;
}

/// Ticks on every poll, i.e. on every scene update.
#[derive(Debug, Clone, Copy, Default)]
pub struct EveryFrame;

impl TickSource for EveryFrame {
    #[inline]
    fn poll(&mut self, _now: f64) -> bool {
        true
    }
}

/// Ticks once per `period`, first one `period` after the first poll.
///
/// The next deadline is scheduled relative to the poll that fired, so a late poll
/// shifts the cadence instead of producing a burst of catch-up ticks.
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval {
    period: f64,
    next_due: Option<f64>,
}

impl Default for FixedInterval {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}

impl FixedInterval {
    pub fn new(period: f64) -> Self {
        debug_assert!(period.is_finite() && period > 0.0, "period must be > 0");
        Self {
            period,
            next_due: None,
        }
    }

    pub fn try_new(period: f64) -> Result<Self> {
        if !(period.is_finite() && period > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "tick period must be finite and > 0, got {period}"
            )));
        }
        Ok(Self::new(period))
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Forgets the schedule; the next poll starts a new one.
    pub fn reset(&mut self) {
        self.next_due = None;
    }
}

impl TickSource for FixedInterval {
    fn poll(&mut self, now: f64) -> bool {
        match self.next_due {
            None => {
                self.next_due = Some(now + self.period);
                false
            }
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_frame_always_ticks() {
        let mut source = EveryFrame;
        assert!((0..5).all(|i| source.poll(i as f64 * 0.016)));
    }

    #[test]
    fn fixed_interval_waits_one_period_then_repeats() {
        let mut source = FixedInterval::new(0.5);
        assert!(!source.poll(0.0));
        assert!(!source.poll(0.25));
        assert!(source.poll(0.5));
        assert!(!source.poll(0.75));
        assert!(source.poll(1.0));
    }

    #[test]
    fn fixed_interval_reschedules_from_late_poll() {
        let mut source = FixedInterval::new(0.5);
        source.poll(0.0);
        assert!(source.poll(2.0));
        assert!(!source.poll(2.25));
        assert!(source.poll(2.5));
    }

    #[test]
    fn fixed_interval_reset_restarts_schedule() {
        let mut source = FixedInterval::default();
        assert_eq!(source.period(), DEFAULT_TICK_PERIOD);
        source.poll(0.0);
        source.reset();
        assert!(!source.poll(10.0));
        assert!(source.poll(10.5));
    }

    #[test]
    fn try_new_rejects_non_positive_period() {
        assert!(FixedInterval::try_new(0.0).is_err());
        assert!(FixedInterval::try_new(f64::NAN).is_err());
        assert!(FixedInterval::try_new(0.1).is_ok());
    }
}
