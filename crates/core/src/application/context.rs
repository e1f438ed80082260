// Per-call execution context: deadline + cancellation

use crate::error::{AppError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Cancellation signal shared by every in-flight call
#[derive(Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// A token that never fires
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for the cancellation signal.
    ///
    /// Pends forever if the sender is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Cancellation sender
pub struct CancelSender {
    tx: watch::Sender<bool>,
}

impl CancelSender {
    /// Signal cancellation to all calls holding a token
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Create a cancellation channel
pub fn cancel_channel() -> (CancelSender, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelSender { tx }, CancelToken { rx })
}

/// Context of a single service call.
///
/// Built by the transport layer for every request and passed down by
/// reference; services never keep it.
#[derive(Clone)]
pub struct CallContext {
    call_id: String,
    deadline: Option<Instant>,
    cancel: CancelToken,
}

impl CallContext {
    /// Context with no deadline that is never cancelled
    pub fn new(call_id: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            deadline: None,
            cancel: CancelToken::never(),
        }
    }

    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn call_id(&self) -> &str {
        &self.call_id
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drive `fut` to completion unless the call is cancelled or its
    /// deadline passes first. In that case `fut` is dropped, releasing
    /// whatever it owned.
    pub async fn run<F: Future>(&self, fut: F) -> Result<F::Output> {
        if self.cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        if self.deadline.is_some_and(|d| d <= Instant::now()) {
            return Err(AppError::DeadlineExceeded);
        }

        let mut cancel = self.cancel.clone();
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AppError::Cancelled),
            _ = deadline => Err(AppError::DeadlineExceeded),
            output = fut => Ok(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready, task};

    #[tokio::test]
    async fn test_run_completes_without_limits() {
        let ctx = CallContext::new("call-1");
        let value = ctx.run(async { 7 }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_hits_deadline() {
        let ctx = CallContext::new("call-2").with_timeout(Duration::from_millis(50));
        let err = ctx
            .run(tokio::time::sleep(Duration::from_secs(10)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DeadlineExceeded));
    }

    #[tokio::test]
    async fn test_run_cancelled_while_waiting() {
        let (tx, token) = cancel_channel();
        let ctx = CallContext::new("call-3").with_cancel(token);

        let pending = tokio::spawn(async move { ctx.run(std::future::pending::<()>()).await });
        tx.cancel();

        let err = pending.await.unwrap().unwrap_err();
        assert!(matches!(err, AppError::Cancelled));
    }

    #[tokio::test]
    async fn test_run_rejects_already_cancelled() {
        let (tx, token) = cancel_channel();
        tx.cancel();
        let ctx = CallContext::new("call-4").with_cancel(token);
        assert!(matches!(
            ctx.run(async {}).await.unwrap_err(),
            AppError::Cancelled
        ));
    }

    #[tokio::test]
    async fn test_never_token_does_not_fire() {
        let token = CancelToken::never();
        assert!(!token.is_cancelled());
        let ctx = CallContext::new("call-5").with_cancel(token);
        assert!(ctx.run(async { "ok" }).await.is_ok());
    }

    #[test]
    fn test_cancelled_wakes_waiter() {
        let (tx, mut token) = cancel_channel();
        let mut waiter = task::spawn(async move { token.cancelled().await });

        assert_pending!(waiter.poll());
        tx.cancel();
        assert!(waiter.is_woken());
        assert_ready!(waiter.poll());
    }

    #[test]
    fn test_dropped_sender_never_fires() {
        let (tx, mut token) = cancel_channel();
        let mut waiter = task::spawn(async move { token.cancelled().await });

        drop(tx);
        assert_pending!(waiter.poll());
    }
}
