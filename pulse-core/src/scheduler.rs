// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The execution context consumed by subscriptions.
//!
//! A [`Scheduler`] runs the asynchronous part of a subscription: producer
//! loops, deferred-acknowledgement continuations and batch-boundary
//! reschedules. It also carries the out-of-band failure sink for errors
//! that must not re-enter a terminated pipeline.

use crate::error::PulseError;
use futures::future::BoxFuture;
use std::sync::Arc;

/// Hint describing how eagerly a producer may emit before yielding back
/// to the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionModel {
    recommended_batch_size: usize,
}

impl ExecutionModel {
    /// Batch size used when nothing else was configured.
    pub const DEFAULT_BATCH_SIZE: usize = 128;

    /// An execution model that yields after `recommended_batch_size`
    /// synchronous emissions. The batch size is clamped to at least 1.
    #[must_use]
    pub const fn batched(recommended_batch_size: usize) -> Self {
        let recommended_batch_size = if recommended_batch_size == 0 {
            1
        } else {
            recommended_batch_size
        };
        Self {
            recommended_batch_size,
        }
    }

    /// The number of synchronous `Continue`s after which a producer should
    /// reschedule itself to let other tasks run.
    #[must_use]
    pub const fn recommended_batch_size(&self) -> usize {
        self.recommended_batch_size
    }
}

impl Default for ExecutionModel {
    fn default() -> Self {
        Self::batched(Self::DEFAULT_BATCH_SIZE)
    }
}

/// An executor capable of running subscription work and of reporting
/// failures that have nowhere else to go.
///
/// Implementations must be safe for concurrent submission; the scheduler
/// is the only entity shared across subscriptions.
pub trait Scheduler: Send + Sync {
    /// Submits a task for asynchronous execution.
    fn execute(&self, task: BoxFuture<'static, ()>);

    /// Out-of-band error sink.
    ///
    /// Receives errors that would otherwise violate the observer grammar:
    /// a failure surfacing after the pipeline already delivered its
    /// terminal event, or a finalizer error after downstream gave up.
    /// Implementations must not panic.
    fn report_failure(&self, error: PulseError);

    /// The emission-batching hint for producers driven by this scheduler.
    fn execution_model(&self) -> ExecutionModel {
        ExecutionModel::default()
    }
}

/// Shared handle to a [`Scheduler`].
pub type SchedulerRef = Arc<dyn Scheduler>;
