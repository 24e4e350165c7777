//! Request-scoped cancellation and deadlines.
//!
//! Every repository and service call receives a [`RequestContext`]. Store work
//! is driven through [`RequestContext::run`], which drops the in-flight future
//! as soon as the context is cancelled or its deadline passes. Dropping an
//! open `sqlx::Transaction` rolls it back, so aborted work never commits.

use crate::errors::RepositoryError;
use std::{future::Future, time::Duration};
use tokio::{
    sync::watch,
    time::{Instant, sleep_until},
};

#[derive(Debug, Clone)]
pub struct RequestContext {
    cancel: watch::Receiver<bool>,
    deadline: Option<Instant>,
}

/// Owner side of a cancellable [`RequestContext`].
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl RequestContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self {
            cancel: rx,
            deadline: None,
        }
    }

    pub fn with_cancel() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        (
            Self {
                cancel: rx,
                deadline: None,
            },
            CancelHandle { tx },
        )
    }

    /// Derives a context whose deadline is at most `timeout` from now.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(existing) if existing < candidate => existing,
            _ => candidate,
        };

        Self {
            cancel: self.cancel.clone(),
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Resolves once the context is cancelled or its deadline passes.
    pub async fn cancelled(&self) {
        let mut rx = self.cancel.clone();

        let signal = async move {
            loop {
                if *rx.borrow_and_update() {
                    return;
                }
                // sender gone without cancelling: this context can no longer be cancelled
                if rx.changed().await.is_err() {
                    std::future::pending::<()>().await;
                }
            }
        };

        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = signal => {}
                    _ = sleep_until(deadline) => {}
                }
            }
            None => signal.await,
        }
    }

    /// Runs store work under this context.
    pub async fn run<T, F>(&self, operation: &'static str, work: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, RepositoryError>>,
    {
        if self.is_cancelled() {
            return Err(RepositoryError::Cancelled { operation });
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(RepositoryError::Cancelled { operation }),
            result = work => result,
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::background()
    }
}
