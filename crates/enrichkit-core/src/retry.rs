//! Bounded fixed-delay polling for upstream calls that answer "queued".

use std::future::Future;
use std::time::Duration;

use tracing::info;

use crate::config::DEFAULT_POLL_DELAY;
use crate::http_client::HttpResponse;

/// How many times to re-issue a queued call and how long to wait in between.
///
/// The delay is constant; there is no growth between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Re-issues after the initial call. Total calls = `max_retries + 1` at most.
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}

impl RetryPolicy {
    pub const fn fixed(delay: Duration, max_retries: u32) -> Self {
        Self { max_retries, delay }
    }

    /// No polling: a queued response is returned as-is.
    pub const fn none() -> Self {
        Self::fixed(DEFAULT_POLL_DELAY, 0)
    }

    pub const fn is_enabled(&self) -> bool {
        self.max_retries > 0
    }
}

/// A response the poll loop can classify.
pub trait PollResponse {
    fn status(&self) -> u16;

    /// `true` while the upstream is still processing.
    fn is_pending(&self) -> bool;
}

impl PollResponse for HttpResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn is_pending(&self) -> bool {
        self.is_queued()
    }
}

/// Progress of one logical polled call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollState {
    pub attempts_made: u32,
    pub last_status: Option<u16>,
    pub terminal: bool,
}

impl PollState {
    fn record(&mut self, status: u16) {
        self.attempts_made = self.attempts_made.saturating_add(1);
        self.last_status = Some(status);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollTerminal {
    /// The upstream produced a final answer.
    Ready,
    /// The retry budget ran out while the upstream was still pending.
    Exhausted,
}

/// Last response plus the state the loop ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOutcome<T> {
    pub value: T,
    pub state: PollState,
    pub terminal: PollTerminal,
}

impl<T> PollOutcome<T> {
    pub const fn is_ready(&self) -> bool {
        matches!(self.terminal, PollTerminal::Ready)
    }
}

/// Calls `call` until its response is no longer pending or the policy's retry
/// budget is spent, sleeping `policy.delay` between calls.
///
/// Errors from `call` end the loop immediately. Running out of retries is not
/// an error: the last pending response comes back with
/// [`PollTerminal::Exhausted`].
pub async fn poll_until_terminal<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut call: F,
) -> Result<PollOutcome<T>, E>
where
    T: PollResponse,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut state = PollState::default();
    let mut value = call().await?;
    state.record(value.status());

    let mut retries = 0;
    while value.is_pending() && retries < policy.max_retries {
        retries += 1;
        info!(
            retry = retries,
            max_retries = policy.max_retries,
            delay_ms = policy.delay.as_millis() as u64,
            "upstream response queued, polling again"
        );
        tokio::time::sleep(policy.delay).await;

        value = call().await?;
        state.record(value.status());
    }

    state.terminal = true;
    let terminal = if value.is_pending() {
        PollTerminal::Exhausted
    } else {
        PollTerminal::Ready
    };

    Ok(PollOutcome {
        value,
        state,
        terminal,
    })
}
