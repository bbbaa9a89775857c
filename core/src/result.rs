//! The two-variant outcome handed to presentation code.
//!
//! # Design
//! There is no loading variant: a consumer that has not yet received a
//! `NetworkResult` is loading. `Error` carries only a human-readable message.

use std::fmt;

/// Message used when a failure has no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Outcome of one request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResult<T> {
    Success(T),
    Error(String),
}

impl<T> NetworkResult<T> {
    /// Build an `Error` from a failure message, substituting
    /// [`FALLBACK_ERROR_MESSAGE`] for an empty one.
    pub fn from_failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            NetworkResult::Error(FALLBACK_ERROR_MESSAGE.to_string())
        } else {
            NetworkResult::Error(message)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, NetworkResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, NetworkResult::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            NetworkResult::Success(data) => Some(data),
            NetworkResult::Error(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            NetworkResult::Success(_) => None,
            NetworkResult::Error(message) => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> NetworkResult<U> {
        match self {
            NetworkResult::Success(data) => NetworkResult::Success(f(data)),
            NetworkResult::Error(message) => NetworkResult::Error(message),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for NetworkResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => NetworkResult::Success(data),
            Err(err) => NetworkResult::from_failure(err.to_string()),
        }
    }
}
