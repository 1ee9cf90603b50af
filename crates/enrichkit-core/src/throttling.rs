//! Strict call-rate limiting shared by every enrichment operation.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::{Mutex, Notify};
use tokio::time::Instant;
use tracing::debug;

use crate::error::{EnrichmentError, Result};

/// Call budget: `capacity` starts per `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateWindow {
    pub capacity: u32,
    pub window: Duration,
}

impl RateWindow {
    pub const fn new(capacity: u32, window: Duration) -> Self {
        Self { capacity, window }
    }
}

impl Default for RateWindow {
    fn default() -> Self {
        Self::new(20, Duration::from_secs(60))
    }
}

/// FIFO rate limiter that never lets more than `capacity` calls start inside
/// any `window`-long interval.
///
/// Excess callers are queued, not rejected. The queue is a fair async mutex, so
/// callers are admitted in the order they called [`RateLimiter::acquire`].
/// Share one instance across clients with `Arc<RateLimiter>`.
#[derive(Debug)]
pub struct RateLimiter {
    window: RateWindow,
    started: Mutex<VecDeque<Instant>>,
    closed: AtomicBool,
    shutdown: Notify,
    admitted: AtomicU64,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateWindow::default())
    }
}

impl RateLimiter {
    pub fn new(window: RateWindow) -> Self {
        let capacity = window.capacity.max(1);
        Self {
            window: RateWindow::new(capacity, window.window),
            started: Mutex::new(VecDeque::with_capacity(capacity as usize)),
            closed: AtomicBool::new(false),
            shutdown: Notify::new(),
            admitted: AtomicU64::new(0),
        }
    }

    pub const fn window(&self) -> RateWindow {
        self.window
    }

    /// Resolves once the caller may start its call.
    ///
    /// Only fails with [`EnrichmentError::Shutdown`] after [`RateLimiter::close`].
    pub async fn acquire(&self) -> Result<()> {
        let mut started = self.started.lock().await;

        loop {
            // Register for the shutdown signal before checking the flag so a
            // concurrent `close` cannot slip between the two.
            let shutdown = self.shutdown.notified();
            if self.is_closed() {
                return Err(EnrichmentError::Shutdown);
            }

            let now = Instant::now();
            while let Some(&oldest) = started.front() {
                if now.duration_since(oldest) >= self.window.window {
                    started.pop_front();
                } else {
                    break;
                }
            }

            if started.len() < self.window.capacity as usize {
                started.push_back(now);
                self.admitted.fetch_add(1, Ordering::Relaxed);
                return Ok(());
            }

            let Some(&oldest) = started.front() else {
                continue;
            };
            let Some(release_at) = oldest.checked_add(self.window.window) else {
                debug!(
                    capacity = self.window.capacity,
                    "rate window never reopens, waiting for shutdown"
                );
                shutdown.await;
                return Err(EnrichmentError::Shutdown);
            };
            debug!(
                wait_ms = release_at.saturating_duration_since(now).as_millis() as u64,
                capacity = self.window.capacity,
                "rate window full, waiting"
            );

            tokio::select! {
                _ = tokio::time::sleep_until(release_at) => {}
                _ = shutdown => return Err(EnrichmentError::Shutdown),
            }
        }
    }

    /// Waits for a slot, then runs `call`.
    pub async fn throttle<F, Fut, T>(&self, call: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.acquire().await?;
        Ok(call().await)
    }

    /// Cancels pending waits. Every queued and future `acquire` fails with
    /// [`EnrichmentError::Shutdown`].
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            debug!("rate limiter closed");
        }
        self.shutdown.notify_waiters();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Number of calls admitted so far.
    pub fn admitted(&self) -> u64 {
        self.admitted.load(Ordering::Relaxed)
    }
}
