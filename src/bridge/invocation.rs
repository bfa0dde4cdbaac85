//! One in-flight bridge call, from issuance to its single completion
//!
//! An invocation is a pair: the [`InvocationHandle`] held by the calling
//! side and the [`Completer`] moved into the native handler. The completer
//! consumes itself on `resolve`/`reject`, so a second completion is
//! unrepresentable, and its `Drop` impl converts an abandoned handler into a
//! rejection. Between the two, every invocation delivers exactly one outcome.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::AbortHandle;

use crate::shared::error::{BridgeError, ErrorDescriptor};
use crate::shared::types::InvocationId;

type Completion = Result<String, ErrorDescriptor>;

/// Create the handle/completer pair for one invocation.
pub fn channel(
    id: InvocationId,
    module: impl Into<String>,
    method: impl Into<String>,
) -> (InvocationHandle, Completer) {
    let (tx, rx) = oneshot::channel();
    let method = method.into();
    let handle = InvocationHandle {
        rx,
        id,
        module: module.into(),
        method: method.clone(),
        issued_at: Utc::now(),
        abort: None,
    };
    let completer = Completer {
        tx: Some(tx),
        id,
        method,
    };
    (handle, completer)
}

/// The native side of an invocation: fires the rejection or the resolution
/// channel, once.
pub struct Completer {
    tx: Option<oneshot::Sender<Completion>>,
    id: InvocationId,
    method: String,
}

impl Completer {
    pub fn resolve(mut self, result: String) {
        tracing::debug!(id = %self.id, method = %self.method, "invocation resolved");
        self.send(Ok(result));
    }

    pub fn reject(mut self, error: ErrorDescriptor) {
        tracing::debug!(id = %self.id, method = %self.method, code = %error.code, "invocation rejected");
        self.send(Err(error));
    }

    fn send(&mut self, completion: Completion) {
        if let Some(tx) = self.tx.take() {
            // The caller may have cancelled and dropped its handle; the
            // completion is still considered delivered.
            if tx.send(completion).is_err() {
                tracing::debug!(id = %self.id, "caller gone before completion delivery");
            }
        }
    }
}

impl Drop for Completer {
    fn drop(&mut self) {
        // A handler that returns or unwinds without completing must not
        // leave the caller suspended forever.
        if self.tx.is_some() {
            tracing::warn!(id = %self.id, method = %self.method, "handler dropped completer without completing");
            self.send(Err(BridgeError::HandlerDropped.into()));
        }
    }
}

/// The calling side of an invocation: a single-resolution asynchronous value.
#[must_use = "the invocation's outcome is only observable through this handle"]
pub struct InvocationHandle {
    rx: oneshot::Receiver<Completion>,
    id: InvocationId,
    module: String,
    method: String,
    issued_at: DateTime<Utc>,
    abort: Option<AbortHandle>,
}

impl InvocationHandle {
    pub fn id(&self) -> InvocationId {
        self.id
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub(crate) fn set_abort(&mut self, abort: AbortHandle) {
        self.abort = Some(abort);
    }

    /// Suspend until the invocation's single completion arrives.
    pub async fn outcome(self) -> Completion {
        match self.rx.await {
            Ok(completion) => completion,
            // Unreachable while the Completer drop guard holds, but the
            // contract forbids leaving the caller without a terminal outcome.
            Err(_) => Err(BridgeError::HandlerDropped.into()),
        }
    }

    /// Like [`outcome`](Self::outcome), with a caller-side deadline. On
    /// elapse the worker task is aborted and a `deadline_elapsed` rejection
    /// is returned.
    pub async fn outcome_within(self, deadline: Duration) -> Completion {
        let InvocationHandle { rx, id, abort, .. } = self;
        match tokio::time::timeout(deadline, rx).await {
            Ok(Ok(completion)) => completion,
            Ok(Err(_)) => Err(BridgeError::HandlerDropped.into()),
            Err(_) => {
                tracing::debug!(id = %id, "caller deadline elapsed, aborting worker");
                if let Some(abort) = abort {
                    abort.abort();
                }
                Err(BridgeError::DeadlineElapsed.into())
            }
        }
    }

    /// Cancel the invocation: abort the worker task and take the terminal
    /// outcome immediately. If the worker completed before the cancel won
    /// the race, that completion is returned; otherwise a `cancelled`
    /// rejection is.
    pub fn cancel(self) -> Completion {
        tracing::debug!(id = %self.id, method = %self.method, "invocation cancelled by caller");
        let InvocationHandle { mut rx, abort, .. } = self;
        if let Some(abort) = abort {
            abort.abort();
        }
        match rx.try_recv() {
            Ok(completion) => completion,
            Err(_) => Err(BridgeError::Cancelled.into()),
        }
    }
}
