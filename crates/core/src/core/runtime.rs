//! Tokio tick driver for native hosts.
//!
//! The simulator is shared behind a mutex; the tick task and parameter
//! writers take the same lock, so a tick always sees a whole parameter pair.
//! Callers only reach the simulator through [`SharedSimulator::with`] and
//! [`SharedSimulator::update`], so no guard outlives a single call.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::mount::{Mount, TimerHandle, TICK_PERIOD};
use crate::simulator::ActivationSimulator;

#[derive(Clone, Debug)]
pub struct SharedSimulator {
    inner: Arc<Mutex<ActivationSimulator>>,
}

impl SharedSimulator {
    pub fn new(sim: ActivationSimulator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sim)),
        }
    }

    /// A tick panicking mid-update leaves the previous grid in place, so a
    /// poisoned lock is still safe to read.
    fn lock(&self) -> MutexGuard<'_, ActivationSimulator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read the simulator under the lock.
    ///
    /// Do not unmount the driving [`Mount`] from inside `f`: cancellation
    /// waits for the same lock.
    pub fn with<R>(&self, f: impl FnOnce(&ActivationSimulator) -> R) -> R {
        f(&self.lock())
    }

    /// Mutate the simulator under the lock. Same caveat as [`Self::with`].
    pub fn update<R>(&self, f: impl FnOnce(&mut ActivationSimulator) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn set_gain(&self, gain: f32) {
        self.update(|s| s.set_gain(gain));
    }

    pub fn set_threshold(&self, threshold: f32) {
        self.update(|s| s.set_threshold(threshold));
    }

    pub fn tick_count(&self) -> u64 {
        self.with(|s| s.tick_count())
    }
}

/// Handle to a running tick task.
#[derive(Debug)]
pub struct TokioTicker {
    sim: SharedSimulator,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl TimerHandle for TokioTicker {
    fn cancel(self) {
        {
            // Cancel under the simulator lock: a tick already holding the lock
            // finishes first, and every later tick sees the token.
            let _guard = self.sim.lock();
            self.token.cancel();
        }
        self.task.abort();
    }
}

/// Start ticking `sim` every [`TICK_PERIOD`]. Must be called inside a tokio runtime.
pub fn mount_tokio(sim: SharedSimulator) -> Mount<TokioTicker> {
    let token = CancellationToken::new();
    let task = tokio::spawn(tick_loop(sim.clone(), token.clone(), TICK_PERIOD));
    Mount::new(TokioTicker { sim, token, task })
}

async fn tick_loop(sim: SharedSimulator, cancel: CancellationToken, period: Duration) {
    // First tick one full period after mount.
    let mut interval = time::interval_at(time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                if !tick_unless_cancelled(&sim, &cancel) {
                    break;
                }
            }
        }
    }
    tracing::debug!("Tick loop stopped");
}

/// The cancellation check and the tick happen under one lock acquisition.
fn tick_unless_cancelled(sim: &SharedSimulator, cancel: &CancellationToken) -> bool {
    let mut guard = sim.lock();
    if cancel.is_cancelled() {
        return false;
    }
    guard.tick();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;

    fn shared() -> SharedSimulator {
        SharedSimulator::new(ActivationSimulator::new(
            &WidgetConfig::with_neurons(12).with_seed(5),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_every_period_while_mounted() {
        let sim = shared();
        let mount = mount_tokio(sim.clone());

        time::sleep(Duration::from_millis(100)).await;
        assert_eq!(sim.tick_count(), 0);

        time::sleep(Duration::from_millis(1_000)).await;
        let n = sim.tick_count();
        assert!((5..=6).contains(&n), "ticks after 1.1s: {n}");

        mount.unmount();
    }

    #[tokio::test(start_paused = true)]
    async fn no_ticks_after_unmount() {
        let sim = shared();
        let mount = mount_tokio(sim.clone());

        time::sleep(Duration::from_millis(650)).await;
        mount.unmount();
        let frozen = sim.tick_count();
        assert!(frozen >= 3);

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(sim.tick_count(), frozen);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_mount_stops_ticking() {
        let sim = shared();
        {
            let _mount = mount_tokio(sim.clone());
            time::sleep(Duration::from_millis(450)).await;
        }
        let frozen = sim.tick_count();
        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(sim.tick_count(), frozen);
    }

    #[tokio::test(start_paused = true)]
    async fn parameter_writes_do_not_restart_cadence() {
        let sim = shared();
        let mount = mount_tokio(sim.clone());

        time::sleep(Duration::from_millis(300)).await;
        assert_eq!(sim.tick_count(), 1);

        // Re-setting the same gain repeatedly must not push the next tick back.
        let g = sim.with(|s| s.params().gain);
        for _ in 0..12 {
            sim.set_gain(g);
            time::sleep(Duration::from_millis(10)).await;
        }
        // t = 420ms: the second tick (due at 400ms) must have landed.
        assert_eq!(sim.tick_count(), 2);

        mount.unmount();
    }

    #[tokio::test(start_paused = true)]
    async fn next_tick_sees_latest_parameters() {
        let sim = shared();
        let mount = mount_tokio(sim.clone());

        sim.set_gain(0.1);
        sim.set_threshold(100.0);
        time::sleep(Duration::from_millis(250)).await;
        sim.with(|s| {
            assert_eq!(s.tick_count(), 1);
            assert!(s.grid().intensities().iter().all(|&v| v == 0.0));
        });

        mount.unmount();
    }

    #[test]
    fn unmount_returns_while_readers_are_busy() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::mpsc;
        use std::thread;

        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .build()
            .expect("runtime");
        let sim = shared();
        let mount = rt.block_on(async { mount_tokio(sim.clone()) });
        thread::sleep(Duration::from_millis(250));

        // Readers hammer the lock from another thread the whole time.
        let stop = Arc::new(AtomicBool::new(false));
        let reader = {
            let sim = sim.clone();
            let stop = stop.clone();
            thread::spawn(move || {
                let mut reads = 0u64;
                while !stop.load(Ordering::Relaxed) {
                    sim.with(|s| s.snapshot());
                    reads += 1;
                }
                reads
            })
        };

        let (done_tx, done_rx) = mpsc::channel();
        thread::spawn(move || {
            drop(mount);
            let _ = done_tx.send(());
        });
        done_rx
            .recv_timeout(Duration::from_secs(3))
            .expect("unmount never returned");

        let frozen = sim.tick_count();
        thread::sleep(Duration::from_millis(500));
        assert_eq!(sim.tick_count(), frozen);

        stop.store(true, Ordering::Relaxed);
        assert!(reader.join().expect("reader thread") > 0);
    }
}
