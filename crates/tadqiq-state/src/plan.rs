//! # Annual Plan Lifecycle State Machine
//!
//! Models the yearly audit scope document of a department and the
//! program roster it carries.
//!
//! ## States
//!
//! ```text
//! Draft ──submit_for_review()──▶ UnderReview ──approve()──▶ Approved
//!                                      │
//!                                      └──reject()──▶ Rejected (terminal)
//! ```
//!
//! ## Program Roster Invariant
//!
//! The plan's tasks count mirrors its program roster: adding a program
//! increments it, removing one decrements it with a floor of zero.
//! Programs can only be added or removed while the plan is a Draft.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tadqiq_core::{Department, PlanDate, PlanId, PlanYear, ProgramId, Timestamp};

// ─── Plan Status ─────────────────────────────────────────────────────

/// The lifecycle status of an annual plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    /// Under construction by data entry.
    Draft,
    /// Submitted for the general director's review.
    UnderReview,
    /// Approved and in force.
    Approved,
    /// Rejected (terminal).
    Rejected,
}

impl PlanStatus {
    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// The Arabic status label shown in the records.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::Draft => "مسودة",
            Self::UnderReview => "قيد المراجعة",
            Self::Approved => "معتمدة",
            Self::Rejected => "مرفوضة",
        }
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "DRAFT",
            Self::UnderReview => "UNDER_REVIEW",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        };
        f.write_str(s)
    }
}

// ─── Program Vocabulary ──────────────────────────────────────────────

/// Priority of an audit program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgramPriority {
    /// High priority.
    High,
    /// Medium priority.
    Medium,
    /// Low priority.
    Low,
}

impl ProgramPriority {
    /// The Arabic label shown in the records.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::High => "عالية",
            Self::Medium => "متوسطة",
            Self::Low => "منخفضة",
        }
    }
}

/// Execution quarter of an audit program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    /// First quarter.
    Q1,
    /// Second quarter.
    Q2,
    /// Third quarter.
    Q3,
    /// Fourth quarter.
    Q4,
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        };
        f.write_str(s)
    }
}

/// An audit program: one engagement line inside a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditProgram {
    /// Program reference code.
    pub id: ProgramId,
    /// The plan this program belongs to.
    pub plan_id: PlanId,
    /// Short title.
    pub title: String,
    /// What the program sets out to verify.
    pub objective: String,
    /// Expected duration, free text (`4 أسابيع`).
    pub duration: String,
    /// Priority band.
    pub priority: ProgramPriority,
    /// Scheduled quarter.
    pub quarter: Quarter,
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors that can occur during plan lifecycle transitions.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Attempted transition is not valid from the current status.
    #[error("invalid plan transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: String,
        /// Attempted target status.
        to: String,
    },

    /// Program roster changes require a Draft plan.
    #[error("plan {plan_id} is {status}; programs can only change on a draft")]
    NotDraft {
        /// The plan reference code.
        plan_id: String,
        /// The current status.
        status: String,
    },
}

// ─── Transition Evidence ─────────────────────────────────────────────

/// Evidence for a plan lifecycle transition.
#[derive(Debug, Clone)]
pub struct PlanEvidence {
    /// Reason for the transition.
    pub reason: String,
    /// Who performed the action.
    pub actor: String,
}

impl PlanEvidence {
    /// Build evidence from a reason and an actor.
    pub fn new(reason: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            actor: actor.into(),
        }
    }
}

/// Record of a plan status transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanTransitionRecord {
    /// Status before the transition.
    pub from_status: PlanStatus,
    /// Status after the transition.
    pub to_status: PlanStatus,
    /// When the transition occurred.
    pub timestamp: Timestamp,
    /// Reason for the transition.
    pub reason: String,
    /// Who performed the action.
    pub actor: String,
}

// ─── Annual Plan ─────────────────────────────────────────────────────

/// An annual plan with its lifecycle status and transition history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualPlan {
    /// Plan reference code.
    pub id: PlanId,
    /// Planning-cycle year.
    pub year: PlanYear,
    /// Current lifecycle status.
    pub status: PlanStatus,
    /// Number of programs/tasks the plan carries.
    pub tasks_count: u32,
    /// The department the plan covers.
    pub department: Department,
    /// Coverage scope, free text (`نطاق كامل`, `85%`).
    pub coverage: String,
    /// Date the plan record was created.
    pub date: PlanDate,
    /// Optional display title.
    pub title: Option<String>,
    /// Optional URL of the uploaded plan document.
    pub document_url: Option<String>,
    /// Ordered log of all status transitions.
    pub transitions: Vec<PlanTransitionRecord>,
}

impl AnnualPlan {
    /// Create a new plan in the Draft status with an empty roster.
    pub fn new(
        id: PlanId,
        year: PlanYear,
        department: Department,
        coverage: impl Into<String>,
        date: PlanDate,
    ) -> Self {
        Self {
            id,
            year,
            status: PlanStatus::Draft,
            tasks_count: 0,
            department,
            coverage: coverage.into(),
            date,
            title: None,
            document_url: None,
            transitions: Vec::new(),
        }
    }

    /// Attach a display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach the uploaded plan document URL.
    pub fn with_document_url(mut self, url: impl Into<String>) -> Self {
        self.document_url = Some(url.into());
        self
    }

    /// Submit the plan for review (DRAFT → UNDER_REVIEW).
    pub fn submit_for_review(&mut self, evidence: PlanEvidence) -> Result<(), PlanError> {
        self.require_status(PlanStatus::Draft, "UNDER_REVIEW")?;
        self.do_transition(PlanStatus::UnderReview, evidence);
        Ok(())
    }

    /// Approve the plan (UNDER_REVIEW → APPROVED).
    pub fn approve(&mut self, evidence: PlanEvidence) -> Result<(), PlanError> {
        self.require_status(PlanStatus::UnderReview, "APPROVED")?;
        self.do_transition(PlanStatus::Approved, evidence);
        Ok(())
    }

    /// Reject the plan (UNDER_REVIEW → REJECTED, terminal).
    pub fn reject(&mut self, evidence: PlanEvidence) -> Result<(), PlanError> {
        self.require_status(PlanStatus::UnderReview, "REJECTED")?;
        self.do_transition(PlanStatus::Rejected, evidence);
        Ok(())
    }

    /// Record a program added to the roster. Draft plans only.
    pub fn record_program_added(&mut self) -> Result<(), PlanError> {
        self.require_draft()?;
        self.tasks_count += 1;
        Ok(())
    }

    /// Record a program removed from the roster, floored at zero.
    /// Draft plans only.
    pub fn record_program_removed(&mut self) -> Result<(), PlanError> {
        self.require_draft()?;
        self.tasks_count = self.tasks_count.saturating_sub(1);
        Ok(())
    }

    /// Validate that the plan is in the expected status.
    fn require_status(&self, expected: PlanStatus, target: &str) -> Result<(), PlanError> {
        if self.status != expected {
            return Err(PlanError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }

    /// Validate that the roster is still editable.
    fn require_draft(&self) -> Result<(), PlanError> {
        if self.status != PlanStatus::Draft {
            return Err(PlanError::NotDraft {
                plan_id: self.id.to_string(),
                status: self.status.to_string(),
            });
        }
        Ok(())
    }

    /// Record a status transition.
    fn do_transition(&mut self, to: PlanStatus, evidence: PlanEvidence) {
        self.transitions.push(PlanTransitionRecord {
            from_status: self.status,
            to_status: to,
            timestamp: Timestamp::now(),
            reason: evidence.reason,
            actor: evidence.actor,
        });
        self.status = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
