//! Per-call deadlines and cancellation
//!
//! A [`Context`] bounds one operation call, retries included. The default
//! context never expires and cannot be cancelled.

use crate::error::{Error, Result};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;

/// Deadline and cancellation scope for a single operation call
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancel: Option<Arc<CancelState>>,
}

impl Context {
    /// A context with no deadline and no cancellation
    pub fn background() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancel: None,
        }
    }

    /// Derive a cancellable context, keeping any existing deadline
    pub fn with_cancel(self) -> (Self, CancelHandle) {
        let state = Arc::new(CancelState::default());
        let handle = CancelHandle {
            state: Arc::clone(&state),
        };
        (
            Self {
                deadline: self.deadline,
                cancel: Some(state),
            },
            handle,
        )
    }

    /// The deadline, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the deadline passed or the handle fired
    pub fn is_done(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
            || self.cancel.as_ref().is_some_and(|c| c.is_cancelled())
    }

    /// Drive `fut` to completion unless the context ends first
    pub(crate) async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };
        let cancelled = async {
            match &self.cancel {
                Some(state) => state.cancelled().await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = fut => result,
            () = expired => Err(Error::DeadlineExceeded),
            () = cancelled => Err(Error::Cancelled),
        }
    }
}

/// Cancels every call running under the paired [`Context`]
#[derive(Debug, Clone)]
pub struct CancelHandle {
    state: Arc<CancelState>,
}

impl CancelHandle {
    /// Cancel in-flight and future calls using the paired context
    pub fn cancel(&self) {
        self.state.cancelled.store(true, Ordering::Release);
        self.state.notify.notify_waiters();
    }
}

#[derive(Debug, Default)]
struct CancelState {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancelState {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    async fn cancelled(&self) {
        let notified = self.notify.notified();
        tokio::pin!(notified);
        // Register before checking the flag so a concurrent cancel is not missed.
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}
