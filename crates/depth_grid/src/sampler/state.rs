//! Per-session sampling state.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::GridSpec;

/// Everything the sampler remembers between ticks.
///
/// Lives as long as one AR session; replace it with [`SamplingState::default`] when the
/// session is torn down.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplingState {
    /// Grid planned once frame dimensions became known.
    pub grid: Option<GridSpec>,
    /// Timestamp of the last tick that reached a frame, in seconds.
    pub last_tick_time: Option<f64>,
    /// Time between the last two such ticks.
    pub last_tick_interval: Option<f64>,
    /// Longest interval seen between consecutive ticks.
    pub max_tick_interval: f64,
    /// Ticks whose center reading was missing or stale.
    pub dropped_ticks: u64,
    /// Ticks that published to the display.
    pub rendered_ticks: u64,
}

impl SamplingState {
    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    /// Total ticks that probed a frame.
    pub fn sampled_ticks(&self) -> u64 {
        self.dropped_ticks + self.rendered_ticks
    }

    pub(crate) fn record_tick_time(&mut self, now: f64) {
        if let Some(last) = self.last_tick_time {
            let interval = now - last;
            self.last_tick_interval = Some(interval);
            if interval > self.max_tick_interval {
                self.max_tick_interval = interval;
            }
        }
        self.last_tick_time = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_time_tracks_last_and_max_interval() {
        let mut state = SamplingState::default();
        state.record_tick_time(1.0);
        assert_eq!(state.last_tick_interval, None);

        state.record_tick_time(1.5);
        state.record_tick_time(1.75);
        assert_eq!(state.last_tick_time, Some(1.75));
        assert_eq!(state.last_tick_interval, Some(0.25));
        assert_eq!(state.max_tick_interval, 0.5);
    }

    #[test]
    fn sampled_ticks_sums_counters() {
        let state = SamplingState {
            dropped_ticks: 2,
            rendered_ticks: 3,
            ..Default::default()
        };
        assert_eq!(state.sampled_ticks(), 5);
        assert!(!state.is_initialized());
    }
}
