// TailView - core/poll.rs
//
// The recurring refresh loop: cadence state plus a user callback and the
// state value threaded through every invocation. Single-threaded by design:
// the GUI frame loop calls `pump` and the callback runs right there on the
// UI thread, so a callback that blocks freezes the whole interface.
//
// There is no stop or pause operation; the loop ends when the window is torn
// down and the value is dropped.

use crate::core::surface::TextSurface;
use std::time::{Duration, Instant};

/// Timer-driven poll loop invoking `callback(surface, state)` at `rate`
/// ticks per second.
///
/// A positive rate schedules the first tick one period (`1000/rate` ms)
/// after start and reschedules after each callback *returns*, so the
/// effective period includes callback execution time and the cadence is not
/// wall-clock-exact. A rate of zero (or below) runs the callback exactly
/// once and never reschedules.
pub struct PollLoop<S> {
    rate: f64,
    callback: Box<dyn FnMut(&mut TextSurface, &mut S)>,
    state: S,
    next_due: Option<Instant>,
}

impl<S> PollLoop<S> {
    /// Build a loop and schedule its first tick.
    pub fn start(
        rate: f64,
        callback: impl FnMut(&mut TextSurface, &mut S) + 'static,
        state: S,
    ) -> Self {
        let mut this = Self {
            rate,
            callback: Box::new(callback),
            state,
            next_due: None,
        };
        this.next_due = Some(match this.period() {
            Some(p) => Instant::now() + p,
            // Zero rate: due immediately, once.
            None => Instant::now(),
        });
        this
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Tick period, or `None` when the rate is zero/falsy (single-shot).
    pub fn period(&self) -> Option<Duration> {
        (self.rate > 0.0).then(|| Duration::from_secs_f64(1.0 / self.rate))
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Run the callback if a tick is due at `now`, then return the next due
    /// instant (`None` once a single-shot loop has fired). The caller uses
    /// the return value to schedule its next wake-up.
    pub fn pump(&mut self, now: Instant, surface: &mut TextSurface) -> Option<Instant> {
        if let Some(due) = self.next_due {
            if now >= due {
                self.tick(surface);
                // Reschedule from completion, not from the due instant.
                self.next_due = self.period().map(|p| Instant::now() + p);
            }
        }
        self.next_due
    }

    /// Run one invocation unconditionally, ignoring the schedule. `pump`
    /// calls this when a tick is due; tests drive the loop manually with it.
    pub fn tick(&mut self, surface: &mut TextSurface) {
        (self.callback)(surface, &mut self.state);
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for PollLoop<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollLoop")
            .field("rate", &self.rate)
            .field("state", &self.state)
            .field("next_due", &self.next_due)
            .finish_non_exhaustive()
    }
}
