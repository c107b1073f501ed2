//! Deadline and cancellation scope shared by every external invocation
//! belonging to one logical operation.

use crate::error::{Result, RustLtouError};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Bounds a sequence of external invocations.
///
/// Clones share the same deadline and the same cancellation signal, so a
/// multi-step maneuver handed one scope is aborted as a whole.
#[derive(Debug, Clone, Default)]
pub struct ExecScope {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Cancels every clone of the scope it was created with.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        // Receivers may all be gone already; nothing to signal then.
        let _ = self.sender.send(true);
    }
}

impl ExecScope {
    /// No deadline, not cancellable.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn timeout(timeout: Duration) -> Self {
        Self::deadline(Instant::now() + timeout)
    }

    pub fn deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancel: None,
        }
    }

    pub fn timeout_opt(timeout: Option<Duration>) -> Self {
        match timeout {
            Some(timeout) => Self::timeout(timeout),
            None => Self::unbounded(),
        }
    }

    /// Attach a cancellation signal to this scope.
    pub fn with_cancel(mut self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        self.cancel = Some(receiver);
        (self, CancelHandle { sender })
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().map_or(false, |rx| *rx.borrow())
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.map_or(false, |d| Instant::now() >= d)
    }

    /// Drive `fut` to completion unless the scope is cancelled or its
    /// deadline passes first. The future is dropped in that case.
    pub async fn bound<F, T>(&self, program: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        let cancelled = async {
            match self.cancel.clone() {
                Some(mut rx) => loop {
                    let flagged = *rx.borrow_and_update();
                    if flagged {
                        break;
                    }
                    if rx.changed().await.is_err() {
                        // Handle dropped without cancelling.
                        std::future::pending::<()>().await;
                    }
                },
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancelled => Err(RustLtouError::Cancelled {
                program: program.to_string(),
            }),
            _ = deadline => Err(RustLtouError::TimedOut {
                program: program.to_string(),
            }),
            res = fut => res,
        }
    }
}
