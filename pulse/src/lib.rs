// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Pulse
//!
//! A push-based reactive stream library with explicit back-pressure,
//! lawful completion/error termination and cancellable subscriptions.
//!
//! ## Overview
//!
//! Producers push elements into an [`Observer`]; each `on_next` is
//! answered with an [`Ack`] governing demand for the next element. An
//! [`Observable`] is a cold producer that, once attached to a
//! [`Subscriber`], returns a [`Cancelable`] severing further emission on
//! demand. Operators are `Subscriber -> Subscriber` transformations
//! composed over a source.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pulse::prelude::*;
//! use pulse::{BracketedIterable, TokioScheduler};
//!
//! #[tokio::main]
//! async fn main() {
//!     let scheduler = TokioScheduler::current().into_ref();
//!
//!     let source = BracketedIterable::from_parts(0..100, |_case| Ok(()));
//!     let pipeline = source
//!         .filter(|x| Ok(x % 2 == 0))
//!         .map(|x| Ok(x * 10))
//!         .reduce(|a, b| Ok(a + b));
//!
//!     // Attach an observer with `pipeline.subscribe_with(observer, scheduler)`
//! }
//! ```

// Re-export the protocol types
pub use pulse_core::{
    Ack, AckFuture, AckPromise, BoxObserver, Cancelable, Decision, ExecutionModel, Notification,
    Observer, PulseError, Result, SafeSubscriber, Scheduler, SchedulerRef, Subscriber,
};

// Re-export the observable layer
pub use pulse_stream::{BracketedIterable, ExitCase, LiftedObservable, Observable};

// Re-export the production scheduler
pub use pulse_runtime::TokioScheduler;

/// Prelude module for convenient imports
pub mod prelude {
    pub use pulse_core::{Ack, Decision, Observer, PulseError, Result};
    pub use pulse_stream::prelude::*;
}
