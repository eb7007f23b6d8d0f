//! Owned handle for the repeating tick timer.
//!
//! A [`Mount`] is built from the timer handle at the moment the timer starts
//! and releases it exactly once: on [`Mount::unmount`] or, failing that, on
//! drop. Hosts never clear timers by hand.

use std::time::Duration;

use crate::simulator::TICK_PERIOD_MS;

/// Period between two ticks of a mounted widget.
pub const TICK_PERIOD: Duration = Duration::from_millis(TICK_PERIOD_MS);

/// A running repeating timer that can be stopped.
pub trait TimerHandle {
    /// Stop the timer. After this returns no further tick may run.
    fn cancel(self);
}

#[derive(Debug)]
#[must_use = "dropping a Mount stops its timer immediately"]
pub struct Mount<H: TimerHandle> {
    timer: Option<H>,
}

impl<H: TimerHandle> Mount<H> {
    pub fn new(timer: H) -> Self {
        tracing::debug!("Neural widget mounted");
        Self { timer: Some(timer) }
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            tracing::debug!("Neural widget unmounted; tick timer cancelled");
        }
    }
}

impl<H: TimerHandle> Drop for Mount<H> {
    fn drop(&mut self) {
        self.release();
    }
}
