// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observable abstraction and back-pressured operators.
//!
//! An [`Observable`] is a cold, subscribe-on-demand producer. Operators
//! are `Subscriber -> Subscriber` transformations lifted over a source;
//! each subscription instantiates its own operator state, so observables
//! compose freely and can be subscribed from multiple places (except for
//! inherently single-shot sources such as [`bracket::BracketedIterable`]).

pub mod bracket;
pub mod dematerialize;
pub mod distinct_until_changed_by_key;
pub mod filter;
pub mod fold;
pub mod map;
pub mod materialize;
pub mod observable;
pub mod prelude;
pub mod reduce;
pub mod skip;
pub mod take;
pub mod take_while;

pub use bracket::{BracketedIterable, ExitCase};
pub use observable::{LiftedObservable, Observable};
