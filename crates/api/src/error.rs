// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use nonassoc_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
/// A permission denial is reported as `ResourceNotFound` so that callers
/// cannot tell a forbidden record from a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found, or may not be seen.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message = err.to_string();
    match err {
        DomainError::InvalidSortBy(_) => ApiError::InvalidInput {
            field: String::from("sort"),
            message,
        },
        DomainError::InvalidSortDirection(_) => ApiError::InvalidInput {
            field: String::from("order"),
            message,
        },
        DomainError::InvalidComment(_) => ApiError::InvalidInput {
            field: String::from("comment"),
            message,
        },
        DomainError::ClosureFieldsInconsistent { .. } => ApiError::DomainRuleViolation {
            rule: String::from("closure_fields"),
            message,
        },
        DomainError::AlreadyClosed(_) => ApiError::DomainRuleViolation {
            rule: String::from("already_closed"),
            message,
        },
        DomainError::SamePrisoner(_) => ApiError::DomainRuleViolation {
            rule: String::from("distinct_prisoners"),
            message,
        },
        DomainError::PrisonerNotParty { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Non-association"),
            message,
        },
        DomainError::InvalidConfig(_) => ApiError::Internal { message },
    }
}
