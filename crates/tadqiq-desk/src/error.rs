//! # Desk Errors
//!
//! The error surface of desk operations: role rejections, unresolved
//! reference codes, precondition failures, and the underlying lifecycle
//! errors passed through from `tadqiq-state`.

use thiserror::Error;

use tadqiq_core::UserRole;
use tadqiq_state::{DocRequestError, PlanError, RegulatoryError, TaskError, VoiceError};

/// Errors returned by desk operations.
#[derive(Error, Debug)]
pub enum DeskError {
    /// The acting role may not perform this operation.
    #[error("role {role} is not permitted to {operation}")]
    RoleNotPermitted {
        /// The acting role.
        role: UserRole,
        /// The operation that was refused.
        operation: &'static str,
    },

    /// The acting role may not open this section.
    #[error("section {section} is not available to role {role}")]
    SectionNotAccessible {
        /// The section id.
        section: String,
        /// The acting role.
        role: UserRole,
    },

    /// A task reference did not resolve.
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// A plan reference did not resolve.
    #[error("unknown plan: {0}")]
    UnknownPlan(String),

    /// A program reference did not resolve within the plan.
    #[error("unknown program {program} in plan {plan}")]
    UnknownProgram {
        /// The program reference.
        program: String,
        /// The plan reference.
        plan: String,
    },

    /// A document-request reference did not resolve.
    #[error("unknown document request: {0}")]
    UnknownDocRequest(String),

    /// A regulatory reference did not resolve.
    #[error("unknown regulatory request: {0}")]
    UnknownRegulatory(String),

    /// An employee-voice report reference did not resolve.
    #[error("unknown voice report: {0}")]
    UnknownReport(String),

    /// An awareness-message reference did not resolve.
    #[error("unknown awareness message: {0}")]
    UnknownMessage(String),

    /// Document requests require a liaison officer on the task.
    #[error("task {task_id} has no liaison officer; assign one before requesting documents")]
    LiaisonRequired {
        /// The task reference.
        task_id: String,
    },

    /// Task lifecycle rejection.
    #[error(transparent)]
    Task(#[from] TaskError),

    /// Plan lifecycle rejection.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Document-request lifecycle rejection.
    #[error(transparent)]
    DocRequest(#[from] DocRequestError),

    /// Regulatory lifecycle rejection.
    #[error(transparent)]
    Regulatory(#[from] RegulatoryError),

    /// Voice-report lifecycle rejection.
    #[error(transparent)]
    Voice(#[from] VoiceError),
}
