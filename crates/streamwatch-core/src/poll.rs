// ── Poller primitive ──
//
// Drives a supplied fetch operation on a fixed period. One poller, one
// resource: the loop awaits each tick's work inline, so a second fetch
// can never start while one is outstanding. Ticks that become due while
// a fetch is still running are skipped, not queued.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Cadence for a [`Poller`], passed explicitly at construction so test
/// suites can run with millisecond intervals.
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Period between fetches.
    pub interval: Duration,
    /// Fire the first fetch immediately instead of waiting one period.
    pub immediate: bool,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            immediate: true,
        }
    }
}

/// Whether a refresh is the first load of a store or a background tick.
///
/// Stores translate this into the mutually exclusive `loading` /
/// `refreshing` snapshot flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    /// First fetch after mount, or an explicit full reload.
    Initial,
    /// Any subsequent scheduled tick or reconciliation refresh.
    Background,
}

/// Handle to a running poll loop.
///
/// Stopping (explicitly or by drop) cancels the schedule and drops any
/// in-flight tick future, so a fetch racing `stop()` can never publish
/// its result afterwards.
pub struct Poller {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn a poll loop invoking `tick` per period.
    ///
    /// The first invocation is passed [`RefreshPhase::Initial`], every
    /// later one [`RefreshPhase::Background`].
    pub fn start<F, Fut>(config: PollerConfig, tick: F) -> Self
    where
        F: FnMut(RefreshPhase) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(poll_loop(config, tick, cancel.clone()));
        Self { cancel, handle }
    }

    /// Cancel the schedule. Returns immediately; no further fetch is
    /// initiated after this call, and an in-flight fetch's result is
    /// discarded.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Stop and wait for the loop task to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        let _ = (&mut self.handle).await;
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn poll_loop<F, Fut>(config: PollerConfig, mut tick: F, cancel: CancellationToken)
where
    F: FnMut(RefreshPhase) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    // tokio's interval panics on a zero period
    let period = config.interval.max(Duration::from_millis(1));
    let mut interval = tokio::time::interval(period);
    // A fetch that overruns its period must not cause a burst of
    // catch-up ticks afterwards: overlapping ticks are skipped.
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    if !config.immediate {
        // Consume the interval's instant first tick so the first fetch
        // waits a full period.
        tokio::select! {
            biased;
            () = cancel.cancelled() => return,
            _ = interval.tick() => {}
        }
    }

    let mut phase = RefreshPhase::Initial;
    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                tokio::select! {
                    biased;
                    // Dropping the tick future here is what makes stop()
                    // discard an in-flight fetch's result.
                    () = cancel.cancelled() => break,
                    () = tick(phase) => {}
                }
                phase = RefreshPhase::Background;
            }
        }
    }
    debug!("poller stopped");
}
