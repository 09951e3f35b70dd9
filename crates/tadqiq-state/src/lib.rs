//! # tadqiq-state — Record Lifecycles
//!
//! Implements the lifecycle state machines of the audit desk. Each record
//! type carries an enum status, methods that validate transitions at
//! runtime, and an ordered log of every transition taken.
//!
//! ## State Machines
//!
//! - **Task** (`task.rs`): `Pending → InProgress → Completed` with
//!   `Paused`, `Delayed`, and `Rejected` branches; execution progress
//!   0–100 moves with the status.
//!
//! - **Plan** (`plan.rs`): `Draft → UnderReview → Approved / Rejected`,
//!   plus the program roster that drives the plan's tasks count.
//!
//! - **Document request** (`docreq.rs`):
//!   `Sent → InProgress → Received` (terminal).
//!
//! - **Regulatory request** (`regulatory.rs`):
//!   `New → Processing → Closed`, with the director's action log.
//!
//! - **Employee voice** (`voice.rs`): `New → Analyzing`.
//!
//! - **Awareness message** (`awareness.rs`): draft → sent.
//!
//! ## Design
//!
//! Statuses are enums with validated transitions rather than typestate
//! types: every status arrives from seed records and filter parameters
//! as data, so the runtime-checked form fits. Invalid transitions are
//! rejected with structured errors naming the current state and the
//! attempted target. Role permissions are NOT enforced here — the desk
//! crate decides who may call what; this crate decides what is possible
//! at all.

pub mod awareness;
pub mod docreq;
pub mod plan;
pub mod regulatory;
pub mod task;
pub mod voice;

// ─── Task re-exports ─────────────────────────────────────────────────

pub use task::{
    AuditTask, FinalReport, TaskError, TaskEvidence, TaskStatus, TaskTransitionRecord, TaskType,
};

// ─── Plan re-exports ─────────────────────────────────────────────────

pub use plan::{
    AnnualPlan, AuditProgram, PlanError, PlanEvidence, PlanStatus, PlanTransitionRecord,
    ProgramPriority, Quarter,
};

// ─── Document request re-exports ─────────────────────────────────────

pub use docreq::{DocRequestError, DocRequestStatus, DocumentRequest};

// ─── Regulatory re-exports ───────────────────────────────────────────

pub use regulatory::{
    DirectorAction, RegulatoryActionRecord, RegulatoryError, RegulatoryRequest, RegulatoryStatus,
};

// ─── Voice / awareness re-exports ────────────────────────────────────

pub use awareness::{Audience, AwarenessMessage};
pub use voice::{EmployeeVoiceReport, ReportStatus, VoiceError};
