// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the reflow reactive stream protocol.
//!
//! Every recoverable failure reaches a subscriber as exactly one terminal
//! [`Subscriber::on_error`](crate::Subscriber::on_error) carrying a [`ReflowError`].
//!
//! # Examples
//!
//! ```
//! use reflow_core::{ReflowError, Result};
//!
//! fn fetch() -> Result<Option<i32>> {
//!     Err(ReflowError::production_error("sensor offline"))
//! }
//!
//! assert!(fetch().is_err());
//! ```

/// Root error type for all reflow operations.
#[derive(Debug, thiserror::Error)]
pub enum ReflowError {
    /// The source failed while producing an item.
    ///
    /// No partial item is delivered for a failed production attempt.
    #[error("Production error: {context}")]
    ProductionError {
        /// Description of what went wrong in the source
        context: String,
    },

    /// `request` was called with a non-positive amount.
    ///
    /// This is a protocol violation and terminates the subscription.
    #[error("Invalid demand: requested {requested} items, demand must be positive")]
    InvalidDemand {
        /// The rejected amount
        requested: u64,
    },

    /// A fallible processor transform rejected an item.
    #[error("Transform error: {context}")]
    TransformError {
        /// Description of the rejected transform
        context: String,
    },

    /// Custom error from user code
    ///
    /// This wraps errors produced by user-provided sources and transforms,
    /// allowing them to travel through the protocol unchanged.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ReflowError {
    /// Create a production error with the given context
    pub fn production_error(context: impl Into<String>) -> Self {
        Self::ProductionError {
            context: context.into(),
        }
    }

    /// Create a transform error with the given context
    pub fn transform_error(context: impl Into<String>) -> Self {
        Self::TransformError {
            context: context.into(),
        }
    }

    /// Create the protocol violation raised by `request(requested)`
    pub const fn invalid_demand(requested: u64) -> Self {
        Self::InvalidDemand { requested }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if the subscriber broke the demand protocol.
    #[must_use]
    pub const fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::InvalidDemand { .. })
    }
}

/// Specialized Result type for reflow operations
pub type Result<T> = std::result::Result<T, ReflowError>;

/// Extension trait for converting errors into `ReflowError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoReflowError {
    /// Convert this error into a production error carrying `context`
    fn into_reflow_error(self, context: &str) -> ReflowError;

    /// Convert this error into a `ReflowError` without additional context
    fn into_reflow(self) -> ReflowError
    where
        Self: Sized;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoReflowError for E {
    fn into_reflow_error(self, context: &str) -> ReflowError {
        ReflowError::production_error(format!("{context}: {self}"))
    }

    fn into_reflow(self) -> ReflowError {
        ReflowError::user_error(self)
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(ReflowError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(ReflowError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ReflowError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            ReflowError::UserError(inner) => ReflowError::ProductionError {
                context: format!("{}: {inner}", f()),
            },
            other => other,
        })
    }
}

impl Clone for ReflowError {
    fn clone(&self) -> Self {
        match self {
            Self::ProductionError { context } => Self::ProductionError {
                context: context.clone(),
            },
            Self::InvalidDemand { requested } => Self::InvalidDemand {
                requested: *requested,
            },
            Self::TransformError { context } => Self::TransformError {
                context: context.clone(),
            },
            // The boxed source cannot be cloned, keep its message
            Self::UserError(e) => Self::ProductionError {
                context: format!("User error: {e}"),
            },
        }
    }
}
