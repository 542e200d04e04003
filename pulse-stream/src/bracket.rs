// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Iterator-backed observable with a bracketed resource.
//!
//! The source owns an acquisition that yields an iterator together with a
//! finalizer. The finalizer runs exactly once per subscription, whatever
//! the termination reason: completion, downstream `Stop`, a failed
//! acknowledgement, or external cancellation.

use crate::observable::Observable;
use parking_lot::Mutex;
use pulse_core::{
    Ack, Cancelable, Decision, Observer, PulseError, Result, Scheduler, Subscriber,
};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Why a bracketed subscription is being finalized.
#[derive(Debug, Clone)]
pub enum ExitCase {
    /// The iterator ran out of elements.
    Completed,
    /// The consumer failed while processing an element.
    Errored(PulseError),
    /// Downstream stopped accepting, or the subscription was canceled.
    Canceled,
}

type Acquire<I, F> = Box<dyn FnOnce() -> Result<(I, F)> + Send>;

/// A single-subscriber observable draining an iterator acquired together
/// with its finalizer.
///
/// Emission is batched: after `recommended_batch_size` synchronous
/// `Continue`s the producer yields back to the scheduler. A deferred
/// acknowledgement suspends both emission and finalization until it
/// resolves.
///
/// The acquisition is consumed by the first subscription; any further
/// subscription attempt fails with an
/// [`ApiContractViolation`](PulseError::ApiContractViolation).
pub struct BracketedIterable<I, F> {
    acquire: Mutex<Option<Acquire<I, F>>>,
}

impl<I, F> BracketedIterable<I, F>
where
    I: Iterator + Send + 'static,
    I::Item: Send + 'static,
    F: FnMut(ExitCase) -> Result<()> + Send + 'static,
{
    /// Creates the observable from a bracketed acquisition.
    ///
    /// The acquisition runs at subscribe time; if it fails, the
    /// subscription fails with `on_error` and nothing is finalized.
    pub fn new<Acq>(acquire: Acq) -> Self
    where
        Acq: FnOnce() -> Result<(I, F)> + Send + 'static,
    {
        Self {
            acquire: Mutex::new(Some(Box::new(acquire))),
        }
    }

    /// Creates the observable from an already acquired iterator and its
    /// finalizer.
    pub fn from_parts(iterator: I, finalizer: F) -> Self {
        Self::new(move || Ok((iterator, finalizer)))
    }
}

impl<I, F> Observable for BracketedIterable<I, F>
where
    I: Iterator + Send + 'static,
    I::Item: Send + 'static,
    F: FnMut(ExitCase) -> Result<()> + Send + 'static,
{
    type Item = I::Item;

    fn unsafe_subscribe(&self, mut subscriber: Subscriber<I::Item>) -> Cancelable {
        let acquire = self.acquire.lock().take();
        let Some(acquire) = acquire else {
            subscriber.on_error(PulseError::api_violation(
                "bracketed iterator sources support a single subscriber",
            ));
            return Cancelable::new();
        };
        let (iterator, finalizer) = match acquire() {
            Ok(parts) => parts,
            Err(error) => {
                subscriber.on_error(error);
                return Cancelable::new();
            }
        };
        let cancelable = Cancelable::new();
        let scheduler = subscriber.scheduler().clone();
        let batch_size = scheduler.execution_model().recommended_batch_size();
        scheduler.execute(Box::pin(drive(
            iterator,
            finalizer,
            subscriber,
            cancelable.clone(),
            batch_size,
        )));
        cancelable
    }
}

/// The emission loop, run as a single task on the subscriber's scheduler.
async fn drive<I, F>(
    mut iterator: I,
    finalizer: F,
    mut subscriber: Subscriber<I::Item>,
    cancelable: Cancelable,
    batch_size: usize,
) where
    I: Iterator + Send + 'static,
    I::Item: Send + 'static,
    F: FnMut(ExitCase) -> Result<()> + Send + 'static,
{
    let mut finalizer = Some(finalizer);
    let mut synced = 0usize;

    loop {
        if cancelable.is_canceled() {
            // Cancellation severs delivery: the finalizer runs but no
            // terminal event follows.
            if let Err(error) = finalize(&mut finalizer, ExitCase::Canceled) {
                subscriber.scheduler().report_failure(error);
            }
            return;
        }

        let Some(elem) = iterator.next() else {
            tracing::trace!("bracketed source exhausted, finalizing");
            match finalize(&mut finalizer, ExitCase::Completed) {
                Ok(()) => subscriber.on_complete(),
                // The terminal event is still pending, so the finalizer's
                // failure becomes the pipeline's error.
                Err(error) => subscriber.on_error(error),
            }
            return;
        };

        match subscriber.on_next(elem) {
            Ack::Continue => {
                synced += 1;
                if synced >= batch_size {
                    synced = 0;
                    yield_now().await;
                }
            }
            Ack::Stop => {
                if let Err(error) = finalize(&mut finalizer, ExitCase::Canceled) {
                    // Downstream already gave up; nobody is left to
                    // receive the error in-band.
                    subscriber.scheduler().report_failure(error);
                }
                return;
            }
            Ack::Deferred(future) => {
                // The finalizer must not race the outstanding on_next:
                // nothing is finalized until the acknowledgement resolves.
                match future.await {
                    Ok(Decision::Continue) => {
                        // The asynchronous boundary restarts the batch
                        // window.
                        synced = 0;
                    }
                    Ok(Decision::Stop) => {
                        if let Err(error) = finalize(&mut finalizer, ExitCase::Canceled) {
                            subscriber.scheduler().report_failure(error);
                        }
                        return;
                    }
                    Err(error) => {
                        let finalizer_error =
                            finalize(&mut finalizer, ExitCase::Errored(error.clone())).err();
                        subscriber.on_error(finalizer_error.unwrap_or(error));
                        return;
                    }
                }
            }
        }
    }
}

fn finalize<F>(finalizer: &mut Option<F>, case: ExitCase) -> Result<()>
where
    F: FnMut(ExitCase) -> Result<()>,
{
    match finalizer.take() {
        Some(mut run) => run(case),
        None => Ok(()),
    }
}

fn yield_now() -> YieldNow {
    YieldNow { yielded: false }
}

/// Cooperative reschedule at a batch boundary.
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
