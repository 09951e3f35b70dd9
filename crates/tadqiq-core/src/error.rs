//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types shared across the Tadqiq stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - State machine errors include the current state, attempted transition,
//!   and rejection reason.
//! - Permission errors name the role and the operation it attempted.
//! - Lookup errors carry the reference code that failed to resolve.

use thiserror::Error;

/// Top-level error type for the Tadqiq stack.
#[derive(Error, Debug)]
pub enum TadqiqError {
    /// Input failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// State machine transition rejected.
    #[error("invalid state transition: {0}")]
    InvalidTransition(String),

    /// A reference code did not resolve to a record.
    #[error("unknown reference: {0}")]
    UnknownReference(String),

    /// The acting role is not permitted to perform the operation.
    #[error("role {role} is not permitted to {operation}")]
    RoleNotPermitted {
        /// The acting role name.
        role: String,
        /// The operation that was attempted.
        operation: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
