// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Pulse reactive streaming library.
//!
//! This module defines the root [`PulseError`] type carried by `on_error`
//! signals and by failed acknowledgements, with specific variants for the
//! failure modes a pipeline can encounter.
//!
//! # Examples
//!
//! ```
//! use pulse_core::{PulseError, Result};
//!
//! fn process_data() -> Result<()> {
//!     // Operation that might fail
//!     Err(PulseError::stream_error("source not ready"))
//! }
//! ```

/// Root error type for all Pulse operations.
///
/// This enum encompasses every error condition that can travel through a
/// pipeline: producer failures, errors returned by caller-supplied functions,
/// and violations of the subscription contract.
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    /// Stream processing encountered an error.
    ///
    /// This is a general error for stream operations that don't fit
    /// other specific categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code.
    ///
    /// This wraps errors returned by caller-supplied functions (predicates,
    /// selectors, reducers, finalizers), allowing them to be propagated
    /// through the pipeline as a terminal `on_error` event.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The subscription contract was violated by the caller.
    ///
    /// Emitted for instance when a single-subscriber source is subscribed
    /// a second time.
    #[error("API contract violation: {context}")]
    ApiContractViolation {
        /// Description of the violated contract
        context: String,
    },
}

impl PulseError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Create an API contract violation error with the given context
    pub fn api_violation(context: impl Into<String>) -> Self {
        Self::ApiContractViolation {
            context: context.into(),
        }
    }

    /// Check if this error indicates a violated subscription contract
    #[must_use]
    pub const fn is_api_violation(&self) -> bool {
        matches!(self, Self::ApiContractViolation { .. })
    }
}

/// Specialized Result type for Pulse operations
///
/// This is a type alias for `std::result::Result<T, PulseError>`, providing
/// a convenient shorthand for functions that return Pulse errors.
pub type Result<T> = std::result::Result<T, PulseError>;

impl Clone for PulseError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // For UserError, we can't clone the boxed error, so convert to string
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {}", e),
            },
            Self::ApiContractViolation { context } => Self::ApiContractViolation {
                context: context.clone(),
            },
        }
    }
}
