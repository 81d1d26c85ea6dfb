//! Domain deletion with polling
//!
//! A domain delete is refused while a create or another delete on the same
//! domain is still being processed. [`DeleteRetry`] re-issues the delete on a
//! fixed interval until it goes through, a different error comes back, the
//! deadline passes, or the caller cancels.
//!
//! Time is read through the [`Clock`] trait so tests can drive the loop
//! without sleeping.

use std::future::Future;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::{DmeError, Result};

/// Error text the API returns while a domain still has a pending action.
pub const PENDING_DELETE_MESSAGE: &str =
    "Cannot delete a domain that is pending a create or delete action.";

/// Interval between delete attempts.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Whether `err` is the API refusing a delete because of a pending action.
pub fn is_pending_delete(err: &DmeError) -> bool {
    err.api_message().as_deref() == Some(PENDING_DELETE_MESSAGE)
}

/// Source of time for the retry loop.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current monotonic time.
    fn now(&self) -> Instant;

    /// Suspend the current task for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Real clock backed by `tokio::time`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Retry policy for deleting a domain.
///
/// With `N` pending replies before the delete succeeds, a poll interval `P`
/// and a timeout `T`, [`run`](Self::run) succeeds iff `N * P < T` and makes
/// at most `ceil(T / P)` attempts (exactly one when `T` is zero).
#[derive(Debug, Clone)]
pub struct DeleteRetry<C = SystemClock> {
    clock: C,
    poll_interval: Duration,
    cancel: Option<CancellationToken>,
}

impl DeleteRetry<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DeleteRetry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DeleteRetry<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            poll_interval: DEFAULT_POLL_INTERVAL,
            cancel: None,
        }
    }

    /// Override the interval between attempts.
    #[must_use]
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Stop retrying once `token` is cancelled.
    #[must_use]
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run `attempt` until it succeeds or the loop gives up.
    ///
    /// Errors other than the pending-action refusal are returned as-is after
    /// the attempt that produced them.
    pub async fn run<F, Fut>(&self, domain_id: u64, timeout: Duration, mut attempt: F) -> Result<()>
    where
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<()>> + Send,
    {
        let started = self.clock.now();
        // An unrepresentable deadline is treated as no deadline.
        let deadline = started.checked_add(timeout);
        let mut attempts: u32 = 0;

        loop {
            if self.is_cancelled() {
                log::warn!("Deletion of domain {domain_id} cancelled after {attempts} attempt(s)");
                return Err(DmeError::Cancelled { domain_id });
            }

            attempts += 1;
            let err = match attempt().await {
                Ok(()) => {
                    log::debug!("Domain {domain_id} deleted after {attempts} attempt(s)");
                    return Ok(());
                }
                Err(e) => e,
            };

            if !is_pending_delete(&err) {
                return Err(err);
            }

            let now = self.clock.now();
            let next_attempt = now.checked_add(self.poll_interval);
            let can_retry = match (next_attempt, deadline) {
                (Some(next), Some(deadline)) => next < deadline,
                (_, None) => true,
                (None, Some(_)) => false,
            };

            if !can_retry {
                return Err(DmeError::DeleteTimedOut {
                    domain_id,
                    elapsed_secs: now.saturating_duration_since(started).as_secs(),
                    last_message: err.api_message().unwrap_or_default(),
                });
            }

            log::warn!(
                "Domain {domain_id} has a pending action (attempt {attempts}), retrying in {}s",
                self.poll_interval.as_secs()
            );

            match &self.cancel {
                Some(token) => {
                    tokio::select! {
                        () = token.cancelled() => {
                            log::warn!("Deletion of domain {domain_id} cancelled while waiting");
                            return Err(DmeError::Cancelled { domain_id });
                        }
                        () = self.clock.sleep(self.poll_interval) => {}
                    }
                }
                None => self.clock.sleep(self.poll_interval).await,
            }
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }
}
