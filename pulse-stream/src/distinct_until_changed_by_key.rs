// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Key-based suppression of consecutive duplicates.

use crate::observable::{LiftedObservable, Observable};
use pulse_core::{Ack, Observer, PulseError, Result, Subscriber};
use std::sync::Arc;

struct DistinctByKeyObserver<A, K> {
    downstream: Subscriber<A>,
    key: Arc<dyn Fn(&A) -> Result<K> + Send + Sync>,
    equivalent: Arc<dyn Fn(&K, &K) -> bool + Send + Sync>,
    last_key: Option<K>,
    terminated: bool,
}

impl<A, K> Observer for DistinctByKeyObserver<A, K>
where
    A: Send + 'static,
    K: Send + 'static,
{
    type Item = A;

    fn on_next(&mut self, elem: A) -> Ack {
        if self.terminated {
            return Ack::Stop;
        }
        match (self.key)(&elem) {
            Ok(current) => {
                let changed = match self.last_key.as_ref() {
                    None => true, // First element, always emitted
                    Some(previous) => !(self.equivalent)(previous, &current),
                };
                if changed {
                    self.last_key = Some(current);
                    self.downstream.on_next(elem)
                } else {
                    Ack::Continue
                }
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

/// Extension trait providing the `distinct_until_changed_by_key` operator.
pub trait DistinctUntilChangedByKeyExt: Observable + Sized {
    /// Emits an element iff it is the first one, or its key is not
    /// equivalent to the key of the most recently kept element.
    ///
    /// The equivalence relation is caller-supplied; key types may
    /// legitimately compare via approximate or domain-specific
    /// equivalence rather than `PartialEq`. The relation is assumed
    /// total; only the key selector may fail.
    fn distinct_until_changed_by_key<K, KeyF, EqF>(
        self,
        key: KeyF,
        equivalent: EqF,
    ) -> impl Observable<Item = Self::Item>
    where
        K: Send + 'static,
        KeyF: Fn(&Self::Item) -> Result<K> + Send + Sync + 'static,
        EqF: Fn(&K, &K) -> bool + Send + Sync + 'static,
    {
        let key: Arc<dyn Fn(&Self::Item) -> Result<K> + Send + Sync> = Arc::new(key);
        let equivalent: Arc<dyn Fn(&K, &K) -> bool + Send + Sync> = Arc::new(equivalent);
        LiftedObservable::new(self, move |downstream: Subscriber<Self::Item>| {
            let scheduler = downstream.scheduler().clone();
            Subscriber::new(
                DistinctByKeyObserver {
                    downstream,
                    key: Arc::clone(&key),
                    equivalent: Arc::clone(&equivalent),
                    last_key: None,
                    terminated: false,
                },
                scheduler,
            )
        })
    }
}

impl<O: Observable + Sized> DistinctUntilChangedByKeyExt for O {}
