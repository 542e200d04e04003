// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all operator extension traits.
//!
//! Import this module for convenient access to the whole operator set:
//!
//! ```ignore
//! use pulse_stream::prelude::*;
//!
//! let pipeline = source
//!     .filter(|x| Ok(x % 2 == 0))
//!     .map(|x| Ok(x * 10))
//!     .reduce(|a, b| Ok(a + b));
//! ```
//!
//! # Contents
//!
//! - [`DematerializeExt`] - Replay reified notifications as events
//! - [`DistinctUntilChangedByKeyExt`] - Suppress consecutive duplicates by key
//! - [`FilterExt`] - Keep elements a predicate accepts
//! - [`FoldExt`] - Left fold with an identity element
//! - [`MapExt`] - Element-wise transformation
//! - [`MaterializeExt`] - Reify events into notifications
//! - [`ReduceExt`] - Left reduction without identity
//! - [`SkipExt`] - Drop the first n elements
//! - [`TakeExt`] - Emit the first n elements
//! - [`TakeWhileExt`] - Predicate-bounded prefix

pub use crate::dematerialize::DematerializeExt;
pub use crate::distinct_until_changed_by_key::DistinctUntilChangedByKeyExt;
pub use crate::filter::FilterExt;
pub use crate::fold::FoldExt;
pub use crate::map::MapExt;
pub use crate::materialize::MaterializeExt;
pub use crate::observable::Observable;
pub use crate::reduce::ReduceExt;
pub use crate::skip::SkipExt;
pub use crate::take::TakeExt;
pub use crate::take_while::TakeWhileExt;
