// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the pulse workspace.
//!
//! The [`TestScheduler`] drives subscriptions deterministically: tasks
//! run only when the test says so, failure reports are captured for
//! assertions, and quiescence can be asserted at teardown. The
//! [`RecordingObserver`] sits at the bottom of a pipeline and records
//! everything it receives while answering scripted acknowledgements.

pub mod recording_observer;
pub mod test_scheduler;

pub use recording_observer::{
    AckPlan, PendingAcks, RecordedEvent, RecordedEvents, RecordingObserver,
};
pub use test_scheduler::TestScheduler;
