// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The consumer side of the push protocol.

use crate::ack::Ack;
use crate::error::PulseError;

/// The downstream endpoint of a subscription, receiving pushed events.
///
/// # Contract
///
/// 1. **Grammar**: zero or more `on_next` calls, followed by at most one of
///    `on_complete` or `on_error`. No `on_next` is permitted after a
///    terminal call.
/// 2. **Serialisation**: calls on a single observer are never concurrent;
///    the producer must await the resolution of the previous `on_next`'s
///    acknowledgement before calling `on_next` again.
/// 3. **Back-pressure**: once an acknowledgement resolves to
///    [`Decision::Stop`](crate::Decision::Stop) the producer must emit no
///    further events of any kind.
/// 4. **Failure**: a consumer signals its own failure by returning an
///    acknowledgement that resolves to an error; the producer routes it
///    into the pipeline's `on_error`. `on_complete` and `on_error`
///    themselves are infallible and must stay that way.
pub trait Observer: Send {
    /// The element type this observer accepts.
    type Item;

    /// Pushes the next element, returning the demand for the following one.
    fn on_next(&mut self, elem: Self::Item) -> Ack;

    /// Signals that the producer finished successfully.
    fn on_complete(&mut self);

    /// Signals that the producer failed. Terminal, like `on_complete`.
    fn on_error(&mut self, error: PulseError);
}

/// Owned, type-erased observer.
pub type BoxObserver<A> = Box<dyn Observer<Item = A>>;

impl<O> Observer for Box<O>
where
    O: Observer + ?Sized,
{
    type Item = O::Item;

    fn on_next(&mut self, elem: Self::Item) -> Ack {
        (**self).on_next(elem)
    }

    fn on_complete(&mut self) {
        (**self).on_complete();
    }

    fn on_error(&mut self, error: PulseError) {
        (**self).on_error(error);
    }
}
