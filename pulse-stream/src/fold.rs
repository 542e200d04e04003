// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Left fold with an identity element.

use crate::observable::Observable;
use pulse_core::{Ack, Cancelable, Observer, PulseError, Result, Subscriber};
use std::sync::Arc;

/// Observable folding its source into a single final state.
///
/// The initial state is materialized per subscription; its producer is
/// protected: a failure there fails the subscription immediately without
/// ever subscribing upstream.
pub struct FoldObservable<S, R>
where
    S: Observable,
{
    source: S,
    initial: Arc<dyn Fn() -> Result<R> + Send + Sync>,
    folder: Arc<dyn Fn(R, S::Item) -> Result<R> + Send + Sync>,
}

impl<S, R> Observable for FoldObservable<S, R>
where
    S: Observable,
    R: Send + 'static,
{
    type Item = R;

    fn unsafe_subscribe(&self, mut subscriber: Subscriber<R>) -> Cancelable {
        let seed = match (self.initial)() {
            Ok(seed) => seed,
            Err(error) => {
                subscriber.on_error(error);
                return Cancelable::new();
            }
        };
        let scheduler = subscriber.scheduler().clone();
        self.source.unsafe_subscribe(Subscriber::new(
            FoldObserver {
                downstream: subscriber,
                folder: Arc::clone(&self.folder),
                state: Some(seed),
                terminated: false,
            },
            scheduler,
        ))
    }
}

struct FoldObserver<A, R> {
    downstream: Subscriber<R>,
    folder: Arc<dyn Fn(R, A) -> Result<R> + Send + Sync>,
    state: Option<R>,
    terminated: bool,
}

impl<A, R> Observer for FoldObserver<A, R>
where
    A: Send + 'static,
    R: Send + 'static,
{
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        if self.terminated {
            return Ack::Stop;
        }
        let Some(state) = self.state.take() else {
            return Ack::Stop;
        };
        match (self.folder)(state, elem) {
            Ok(next) => {
                self.state = Some(next);
                Ack::Continue
            }
            Err(error) => {
                self.terminated = true;
                self.downstream.on_error(error);
                Ack::Stop
            }
        }
    }

    fn on_complete(&mut self) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        // Unlike reduce, the identity makes an empty source meaningful:
        // it emits the untouched initial state.
        if let Some(state) = self.state.take() {
            let _ack = self.downstream.on_next(state);
        }
        self.downstream.on_complete();
    }

    fn on_error(&mut self, error: PulseError) {
        if self.terminated {
            return;
        }
        self.terminated = true;
        self.downstream.on_error(error);
    }
}

/// Extension trait providing the `fold` operator.
pub trait FoldExt: Observable + Sized {
    /// Folds all elements into a single state emitted on completion.
    ///
    /// `initial` produces the per-subscription starting state; an error
    /// there fails the subscription before anything is produced. An empty
    /// source emits the initial state as-is.
    fn fold<R, Init, F>(self, initial: Init, folder: F) -> impl Observable<Item = R>
    where
        R: Send + 'static,
        Init: Fn() -> Result<R> + Send + Sync + 'static,
        F: Fn(R, Self::Item) -> Result<R> + Send + Sync + 'static,
    {
        FoldObservable {
            source: self,
            initial: Arc::new(initial),
            folder: Arc::new(folder),
        }
    }
}

impl<O: Observable + Sized> FoldExt for O {}
