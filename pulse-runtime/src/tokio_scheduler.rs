// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scheduler implementation backed by a tokio runtime.

use futures::future::BoxFuture;
use pulse_core::{ExecutionModel, PulseError, Scheduler, SchedulerRef};
use std::sync::Arc;

/// A [`Scheduler`] that submits subscription work to a tokio runtime.
///
/// Uncaught pipeline failures are logged through `tracing` at error level;
/// they indicate either a contract violation by a producer or a finalizer
/// failing after downstream already gave up.
///
/// # Example
///
/// ```no_run
/// use pulse_runtime::TokioScheduler;
///
/// #[tokio::main]
/// async fn main() {
///     let scheduler = TokioScheduler::current().into_ref();
///     // pass `scheduler` to `subscribe_with`
/// }
/// ```
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
    execution_model: ExecutionModel,
}

impl TokioScheduler {
    /// Binds to the runtime of the current context.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, like
    /// `tokio::runtime::Handle::current`.
    #[must_use]
    pub fn current() -> Self {
        Self::from_handle(tokio::runtime::Handle::current())
    }

    /// Binds to an explicit runtime handle.
    #[must_use]
    pub fn from_handle(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle,
            execution_model: ExecutionModel::default(),
        }
    }

    /// Overrides the emission-batching hint handed to producers.
    #[must_use]
    pub fn with_execution_model(mut self, execution_model: ExecutionModel) -> Self {
        self.execution_model = execution_model;
        self
    }

    /// Wraps this scheduler into the shared handle form subscriptions use.
    #[must_use]
    pub fn into_ref(self) -> SchedulerRef {
        Arc::new(self)
    }
}

impl Scheduler for TokioScheduler {
    fn execute(&self, task: BoxFuture<'static, ()>) {
        self.handle.spawn(task);
    }

    fn report_failure(&self, error: PulseError) {
        tracing::error!(error = %error, "uncaught reactive stream failure");
    }

    fn execution_model(&self) -> ExecutionModel {
        self.execution_model
    }
}
