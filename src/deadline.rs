//! Deadline-bounded execution of single-shot operations.
//!
//! # Responsibilities
//! - Start a unit of work on its own task without blocking the caller
//! - Race the work's single delivery against a fixed deadline
//! - Resolve to exactly one outcome per invocation
//!
//! # Design Decisions
//! - Delivery goes through a oneshot channel: a send never blocks, so a
//!   worker whose waiter already gave up drops the late value and exits
//! - Deadline expiry aborts the worker at its next await point; the caller
//!   never waits for the abort to finish
//! - No retries; each stage gets its own fixed budget

use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;

use crate::error::{Result, ServiceError};

/// Result of one bounded operation.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The work delivered a value before the deadline.
    Ready(T),

    /// The work reported an error before the deadline.
    Failed(ServiceError),

    /// The deadline elapsed while the work was still running.
    Expired,
}

impl<T> Outcome<T> {
    /// True when the operation produced a value.
    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }
}

/// Run `work` with an upper bound on wall-clock latency.
///
/// The work is spawned immediately and makes exactly one delivery attempt.
/// The caller suspends until the delivery or the deadline, whichever comes
/// first. Work that keeps running inside a blocking pool thread after an
/// abort finishes in the background; it owns its value and cannot touch
/// caller state.
pub async fn run_with_deadline<T, F>(limit: Duration, work: F) -> Outcome<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    let worker = tokio::spawn(async move {
        // A closed channel means the waiter already left; the late result
        // is dropped here without blocking this task.
        let _ = tx.send(work.await);
    });

    match tokio::time::timeout(limit, rx).await {
        Ok(Ok(Ok(value))) => Outcome::Ready(value),
        Ok(Ok(Err(err))) => Outcome::Failed(err),
        // Sender dropped without a send: the worker panicked.
        Ok(Err(_)) => Outcome::Failed(ServiceError::WorkerGone),
        Err(_) => {
            worker.abort();
            Outcome::Expired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Instant;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_fast_work_is_ready() {
        let outcome = run_with_deadline(Duration::from_millis(200), async { Ok(42) }).await;
        assert!(matches!(outcome, Outcome::Ready(42)));
    }

    #[tokio::test]
    async fn test_slow_work_expires() {
        let started = Instant::now();
        let outcome = run_with_deadline(Duration::from_millis(50), async {
            sleep(Duration::from_millis(500)).await;
            Ok(42)
        })
        .await;

        assert!(matches!(outcome, Outcome::Expired));
        assert!(
            started.elapsed() < Duration::from_millis(400),
            "the wait must end at the deadline, not with the work"
        );
    }

    #[tokio::test]
    async fn test_failing_work_keeps_error_detail() {
        let outcome: Outcome<u32> = run_with_deadline(Duration::from_millis(200), async {
            Err(ServiceError::WorkerGone)
        })
        .await;

        assert!(matches!(outcome, Outcome::Failed(ServiceError::WorkerGone)));
    }

    #[tokio::test]
    async fn test_abandoned_worker_is_cancelled() {
        let delivered = Arc::new(AtomicU32::new(0));
        let counter = delivered.clone();

        let outcome = run_with_deadline(Duration::from_millis(20), async move {
            sleep(Duration::from_millis(100)).await;
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(1u32)
        })
        .await;
        assert!(matches!(outcome, Outcome::Expired));

        // Give the worker time to run off the end if the abort missed it.
        sleep(Duration::from_millis(200)).await;
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_panicking_work_does_not_hang() {
        let outcome: Outcome<u32> =
            run_with_deadline(Duration::from_millis(200), async { panic!("worker died") }).await;

        assert!(matches!(outcome, Outcome::Failed(ServiceError::WorkerGone)));
    }

    #[tokio::test]
    async fn test_each_call_gets_its_own_budget() {
        // Two sequential operations, each inside its own 50ms budget; the
        // second must not be charged for time the first consumed.
        let first = run_with_deadline(Duration::from_millis(50), async {
            sleep(Duration::from_millis(30)).await;
            Ok(1)
        })
        .await;
        let second = run_with_deadline(Duration::from_millis(50), async {
            sleep(Duration::from_millis(30)).await;
            Ok(2)
        })
        .await;

        assert!(first.is_ready());
        assert!(second.is_ready());
    }
}
