// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Acknowledgement signal governing demand between producer and consumer.
//!
//! Every `on_next` call is answered with an [`Ack`]: either an immediate
//! [`Ack::Continue`] / [`Ack::Stop`], or a deferred value that resolves
//! asynchronously. The producer must not emit the next element until the
//! acknowledgement of the previous one has resolved; this is the whole of
//! the back-pressure protocol.

use crate::error::{PulseError, Result};
use futures::channel::oneshot;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt;
use std::future::Future;

/// The resolved value of an acknowledgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The consumer is ready for the next element.
    Continue,
    /// The consumer refuses further elements. Terminal from the consumer's
    /// point of view: the producer must emit no further events, including
    /// `on_complete` and `on_error`.
    Stop,
}

impl Decision {
    /// Returns `true` if this is a `Continue`.
    #[must_use]
    pub const fn is_continue(self) -> bool {
        matches!(self, Self::Continue)
    }

    /// Returns `true` if this is a `Stop`.
    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// Future resolving a deferred acknowledgement.
///
/// Resolving to `Err` means the consumer failed while processing the
/// element; the producer must route the error into the pipeline's
/// `on_error` if not already terminated, then cease.
pub type AckFuture = BoxFuture<'static, Result<Decision>>;

/// Reply from a consumer to a producer governing further demand.
///
/// The two synchronous variants are the fast path; producers may batch
/// synchronous `Continue`s without touching the scheduler. The deferred
/// variant suspends the producer until the consumer resolves it.
pub enum Ack {
    /// Downstream is ready for more elements immediately.
    Continue,
    /// Downstream refuses further elements.
    Stop,
    /// Downstream will decide asynchronously.
    Deferred(AckFuture),
}

impl Ack {
    /// Wraps a resolved [`Decision`] into the matching synchronous variant.
    #[must_use]
    pub const fn from_decision(decision: Decision) -> Self {
        match decision {
            Decision::Continue => Self::Continue,
            Decision::Stop => Self::Stop,
        }
    }

    /// Wraps a future into a deferred acknowledgement.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<Decision>> + Send + 'static,
    {
        Self::Deferred(future.boxed())
    }

    /// Returns `true` for the synchronous variants.
    #[must_use]
    pub const fn is_sync(&self) -> bool {
        !matches!(self, Self::Deferred(_))
    }

    /// Resolves the acknowledgement to its final [`Decision`].
    ///
    /// The synchronous variants resolve immediately without suspension.
    ///
    /// # Errors
    ///
    /// Returns the consumer's failure if a deferred acknowledgement
    /// resolved to an error.
    pub async fn resolve(self) -> Result<Decision> {
        match self {
            Self::Continue => Ok(Decision::Continue),
            Self::Stop => Ok(Decision::Stop),
            Self::Deferred(future) => future.await,
        }
    }

    /// Creates a deferred acknowledgement together with its completion handle.
    ///
    /// Dropping the [`AckPromise`] without completing it resolves the
    /// acknowledgement to `Stop`: a consumer that went away accepts nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pulse_core::{Ack, Decision};
    ///
    /// # async fn example() {
    /// let (promise, ack) = Ack::pending();
    /// promise.complete(Decision::Continue);
    /// assert_eq!(ack.resolve().await.unwrap(), Decision::Continue);
    /// # }
    /// ```
    #[must_use]
    pub fn pending() -> (AckPromise, Self) {
        let (sender, receiver) = oneshot::channel();
        let ack = Self::deferred(receiver.map(|received| match received {
            Ok(resolution) => resolution,
            Err(oneshot::Canceled) => Ok(Decision::Stop),
        }));
        (AckPromise { sender }, ack)
    }
}

impl From<Decision> for Ack {
    fn from(decision: Decision) -> Self {
        Self::from_decision(decision)
    }
}

impl fmt::Debug for Ack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => f.write_str("Ack::Continue"),
            Self::Stop => f.write_str("Ack::Stop"),
            Self::Deferred(_) => f.write_str("Ack::Deferred(..)"),
        }
    }
}

/// Completion handle for a deferred acknowledgement created by
/// [`Ack::pending`].
pub struct AckPromise {
    sender: oneshot::Sender<Result<Decision>>,
}

impl AckPromise {
    /// Resolves the acknowledgement with the given decision.
    pub fn complete(self, decision: Decision) {
        let _ = self.sender.send(Ok(decision));
    }

    /// Fails the acknowledgement, signalling that the consumer failed
    /// while processing the element.
    pub fn fail(self, error: PulseError) {
        let _ = self.sender.send(Err(error));
    }
}

impl fmt::Debug for AckPromise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AckPromise(..)")
    }
}
