// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core protocol types for push-based reactive streams.
//!
//! This crate defines the contract between a producer and a consumer:
//! the [`Observer`] protocol, the [`Ack`] acknowledgement signal that
//! carries back-pressure, the [`Subscriber`] binding an observer to its
//! [`Scheduler`], and the [`Cancelable`] subscription handle.
//!
//! The observable abstraction and the operators built on top of these
//! types live in `pulse-stream`.

pub mod ack;
pub mod cancelable;
pub mod error;
pub mod notification;
pub mod observer;
pub mod safe_subscriber;
pub mod scheduler;
pub mod subscriber;

// Re-export commonly used types
pub use ack::{Ack, AckFuture, AckPromise, Decision};
pub use cancelable::Cancelable;
pub use error::{PulseError, Result};
pub use notification::Notification;
pub use observer::{BoxObserver, Observer};
pub use safe_subscriber::SafeSubscriber;
pub use scheduler::{ExecutionModel, Scheduler, SchedulerRef};
pub use subscriber::Subscriber;
