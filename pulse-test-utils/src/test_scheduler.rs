// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic scheduler for driving subscriptions step by step.
//!
//! Tasks submitted through [`Scheduler::execute`] are queued, not run;
//! the test advances the world explicitly with [`TestScheduler::run`] or
//! [`TestScheduler::run_one`]. Wake-ups re-queue their task, so deferred
//! acknowledgements resolved between runs are picked up by the next run.
//! At teardown, [`TestScheduler::assert_quiescent`] verifies that no task
//! is still pending.

use futures::future::BoxFuture;
use futures::task::{waker, ArcWake};
use parking_lot::Mutex;
use pulse_core::{ExecutionModel, PulseError, Scheduler, SchedulerRef};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};
use std::task::{Context, Poll};

// Backstop against a pipeline that never becomes idle.
const MAX_STEPS_PER_RUN: usize = 100_000;

/// A single-threaded, manually driven [`Scheduler`].
///
/// Failure reports are captured instead of logged so tests can assert on
/// them; the emission batch size is parameterisable so batching behaviour
/// is testable rather than hard-coded.
#[derive(Clone)]
pub struct TestScheduler {
    state: Arc<State>,
}

struct State {
    ready: Mutex<VecDeque<Arc<Task>>>,
    alive: AtomicUsize,
    failures: Mutex<Vec<PulseError>>,
    execution_model: ExecutionModel,
}

struct Task {
    future: Mutex<Option<BoxFuture<'static, ()>>>,
    state: Weak<State>,
}

impl ArcWake for Task {
    fn wake_by_ref(arc_self: &Arc<Self>) {
        if let Some(state) = arc_self.state.upgrade() {
            state.ready.lock().push_back(Arc::clone(arc_self));
        }
    }
}

impl TestScheduler {
    /// A scheduler with the default execution model.
    #[must_use]
    pub fn new() -> Self {
        Self::with_batch_size(ExecutionModel::DEFAULT_BATCH_SIZE)
    }

    /// A scheduler whose producers yield after `batch_size` synchronous
    /// emissions.
    #[must_use]
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            state: Arc::new(State {
                ready: Mutex::new(VecDeque::new()),
                alive: AtomicUsize::new(0),
                failures: Mutex::new(Vec::new()),
                execution_model: ExecutionModel::batched(batch_size),
            }),
        }
    }

    /// The shared handle form subscriptions consume.
    #[must_use]
    pub fn to_ref(&self) -> SchedulerRef {
        Arc::new(self.clone())
    }

    /// Polls one ready task. Returns `false` when nothing was ready.
    pub fn run_one(&self) -> bool {
        let task = self.state.ready.lock().pop_front();
        let Some(task) = task else {
            return false;
        };
        let future = task.future.lock().take();
        let Some(mut future) = future else {
            // Already completed, or a spurious duplicate wake-up.
            return true;
        };
        let task_waker = waker(Arc::clone(&task));
        let mut cx = Context::from_waker(&task_waker);
        match future.as_mut().poll(&mut cx) {
            Poll::Ready(()) => {
                self.state.alive.fetch_sub(1, Ordering::SeqCst);
            }
            Poll::Pending => {
                *task.future.lock() = Some(future);
            }
        }
        true
    }

    /// Runs ready tasks until none is left, returning the number of polls.
    ///
    /// # Panics
    ///
    /// Panics if the queue does not drain within a large step budget,
    /// which indicates a livelocked pipeline.
    pub fn run(&self) -> usize {
        let mut steps = 0;
        while self.run_one() {
            steps += 1;
            assert!(
                steps <= MAX_STEPS_PER_RUN,
                "test scheduler did not become idle after {MAX_STEPS_PER_RUN} polls"
            );
        }
        steps
    }

    /// Number of submitted tasks that have not yet run to completion.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.state.alive.load(Ordering::SeqCst)
    }

    /// The failures reported out-of-band so far.
    #[must_use]
    pub fn failures(&self) -> Vec<PulseError> {
        self.state.failures.lock().clone()
    }

    /// Asserts that no task is pending and nothing is queued.
    ///
    /// # Panics
    ///
    /// Panics when a task is still alive, e.g. a producer parked on an
    /// acknowledgement that was never resolved.
    pub fn assert_quiescent(&self) {
        let queued = self.state.ready.lock().len();
        let alive = self.pending_tasks();
        assert!(
            queued == 0 && alive == 0,
            "test scheduler not quiescent: {alive} task(s) alive, {queued} queued"
        );
    }
}

impl Default for TestScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TestScheduler {
    fn execute(&self, task: BoxFuture<'static, ()>) {
        let task = Arc::new(Task {
            future: Mutex::new(Some(task)),
            state: Arc::downgrade(&self.state),
        });
        self.state.alive.fetch_add(1, Ordering::SeqCst);
        self.state.ready.lock().push_back(task);
    }

    fn report_failure(&self, error: PulseError) {
        self.state.failures.lock().push(error);
    }

    fn execution_model(&self) -> ExecutionModel {
        self.state.execution_model
    }
}
