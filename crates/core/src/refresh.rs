//! Market-hours-gated refresh timer for the dashboard. The timer is the only
//! long-lived scheduled resource in the app and must be released on teardown.

use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Auto-refresh cadence during market hours.
pub const MARKET_REFRESH_PERIOD: Duration = Duration::from_secs(5 * 60);

/// Recurring timer that evaluates `gate` on every tick and, when it passes,
/// awaits `tick`. The gate is recomputed from wall-clock time each tick;
/// nothing is persisted between checks.
pub struct RefreshScheduler {
    shutdown: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    pub fn spawn<G, F, Fut>(period: Duration, gate: G, mut tick: F) -> Self
    where
        G: Fn() -> bool + Send + 'static,
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let (shutdown, mut rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first interval tick completes immediately; consume it so the
            // owning screen's initial load is not doubled.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if gate() {
                            tick().await;
                        }
                    }
                    _ = rx.changed() => break,
                }
            }
        });

        Self {
            shutdown,
            handle: Some(handle),
        }
    }

    /// Stops the timer and waits for any in-progress tick to finish. No tick
    /// runs after this returns.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        // Teardown without an explicit shutdown still cancels the timer and
        // drops any in-flight request future.
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_tick(count: Arc<AtomicUsize>) -> impl FnMut() -> std::future::Ready<()> + Send {
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_fire_on_period_while_gate_open() {
        let count = Arc::new(AtomicUsize::new(0));
        let scheduler = RefreshScheduler::spawn(
            Duration::from_secs(300),
            || true,
            counting_tick(count.clone()),
        );

        tokio::time::sleep(Duration::from_secs(301)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        scheduler.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn closed_gate_suppresses_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let open = Arc::new(AtomicBool::new(false));
        let gate_flag = open.clone();
        let scheduler = RefreshScheduler::spawn(
            Duration::from_secs(300),
            move || gate_flag.load(Ordering::SeqCst),
            counting_tick(count.clone()),
        );

        tokio::time::sleep(Duration::from_secs(601)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        open.store(true, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        scheduler.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_after_shutdown() {
        let count = Arc::new(AtomicUsize::new(0));
        let scheduler = RefreshScheduler::spawn(
            Duration::from_secs(300),
            || true,
            counting_tick(count.clone()),
        );

        tokio::time::sleep(Duration::from_secs(301)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        scheduler.shutdown().await;

        tokio::time::sleep(Duration::from_secs(1200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_timer() {
        let count = Arc::new(AtomicUsize::new(0));
        let scheduler = RefreshScheduler::spawn(
            Duration::from_secs(300),
            || true,
            counting_tick(count.clone()),
        );

        drop(scheduler);

        tokio::time::sleep(Duration::from_secs(1200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
