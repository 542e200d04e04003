// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concrete schedulers for pulse subscriptions.
//!
//! Production code uses [`TokioScheduler`]; deterministic tests use the
//! test scheduler from `pulse-test-utils` instead.

pub mod tokio_scheduler;

pub use tokio_scheduler::TokioScheduler;
