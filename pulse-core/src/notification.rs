// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reified stream events, used by the materialize/dematerialize round-trip.

use crate::error::PulseError;

/// A stream event as a value.
///
/// Materializing a stream turns its `on_next` / `on_error` / `on_complete`
/// calls into `OnNext` / `OnError` / `OnComplete` elements; dematerializing
/// replays them as protocol calls.
#[derive(Debug, Clone)]
pub enum Notification<A> {
    /// A successfully produced element
    OnNext(A),
    /// The terminal failure of the stream
    OnError(PulseError),
    /// The terminal completion of the stream
    OnComplete,
}

impl<A: PartialEq> PartialEq for Notification<A> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Notification::OnNext(a), Notification::OnNext(b)) => a == b,
            (Notification::OnComplete, Notification::OnComplete) => true,
            _ => false, // Errors are never equal
        }
    }
}

impl<A> Notification<A> {
    /// Returns `true` if this is an `OnNext`.
    #[must_use]
    pub const fn is_next(&self) -> bool {
        matches!(self, Notification::OnNext(_))
    }

    /// Returns `true` if this is an `OnError`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Notification::OnError(_))
    }

    /// Returns `true` if this is an `OnComplete`.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Notification::OnComplete)
    }

    /// Converts into `Option<A>`, discarding terminal events.
    pub fn into_next(self) -> Option<A> {
        match self {
            Notification::OnNext(a) => Some(a),
            _ => None,
        }
    }

    /// Converts into `Option<PulseError>`, discarding everything else.
    pub fn into_error(self) -> Option<PulseError> {
        match self {
            Notification::OnError(e) => Some(e),
            _ => None,
        }
    }

    /// Maps the carried element, leaving terminal events unchanged.
    pub fn map<B, F>(self, f: F) -> Notification<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Notification::OnNext(a) => Notification::OnNext(f(a)),
            Notification::OnError(e) => Notification::OnError(e),
            Notification::OnComplete => Notification::OnComplete,
        }
    }
}
