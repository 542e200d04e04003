// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared fixtures for the operator test suites.

use pulse_core::Result;
use pulse_stream::{BracketedIterable, ExitCase};

fn noop_finalizer(_case: ExitCase) -> Result<()> {
    Ok(())
}

/// A single-subscriber source draining the given elements, with a
/// finalizer that does nothing.
pub fn source_of<A: Send + 'static>(
    items: Vec<A>,
) -> BracketedIterable<std::vec::IntoIter<A>, fn(ExitCase) -> Result<()>> {
    BracketedIterable::from_parts(items.into_iter(), noop_finalizer)
}
