// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Deferred results.
//!
//! Verification results are delivered through a single abstraction that covers
//! two completion strategies:
//! - [`Deferred::Ready`]: resolved at the point it is returned; callers may
//!   read the value without yielding.
//! - [`Deferred::Pending`]: resolved later by a host-provided engine on its
//!   own completion queue; callers must await it.
//!
//! Callers that cannot rule out the pending case must always program against
//! the `Future` interface. There is no cancellation: a pending result runs to
//! completion or failure.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A result available either immediately or after later asynchronous completion.
pub enum Deferred<T, E> {
    /// Already resolved. The slot is taken on first poll.
    Ready(Option<Result<T, E>>),
    /// Resolved by a host-provided completion queue.
    Pending(BoxFuture<'static, Result<T, E>>),
}

impl<T, E> Deferred<T, E> {
    /// An already-resolved deferred result.
    pub fn ready(result: Result<T, E>) -> Self {
        Self::Ready(Some(result))
    }

    /// A deferred result resolved by the given future.
    pub fn pending(future: impl Future<Output = Result<T, E>> + Send + 'static) -> Self {
        Self::Pending(Box::pin(future))
    }

    /// True when the result can be read without yielding.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Consume an already-resolved result, or `None` when still pending.
    pub fn now(self) -> Option<Result<T, E>> {
        match self {
            Self::Ready(slot) => slot,
            Self::Pending(_) => None,
        }
    }
}

impl<T: Unpin, E: Unpin> Future for Deferred<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.get_mut() {
            Deferred::Ready(slot) => {
                Poll::Ready(slot.take().expect("deferred polled after completion"))
            }
            Deferred::Pending(future) => future.as_mut().poll(cx),
        }
    }
}

impl<T: std::fmt::Debug, E: std::fmt::Debug> std::fmt::Debug for Deferred<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(slot) => f.debug_tuple("Ready").field(slot).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}
