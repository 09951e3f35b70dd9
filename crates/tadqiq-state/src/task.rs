//! # Audit Task Lifecycle State Machine
//!
//! Models the lifecycle of an audit task from creation through
//! completion, including pause/resume by the general director and the
//! final-report approval gate.
//!
//! ## States
//!
//! ```text
//! Pending ──assign()──▶ InProgress ──complete()──▶ Completed (terminal)
//!    │                   │  ▲    │
//!    │          pause()──┘  │    └──mark_delayed()──▶ Delayed
//!    │            │         │                            │
//!    │            ▼      resume()                        │
//!    │          Paused ─────┘       start()◀─────────────┘
//!    │
//!    └──reject()──▶ Rejected (terminal)
//! ```
//!
//! ## Progress Invariants
//!
//! - Progress is always within 0–100.
//! - Assignment sets progress to 10.
//! - Starting a task raises progress to 10 if it was 0.
//! - Completion sets progress to 100.
//!
//! ## Final Report
//!
//! The auditor uploads the final report; the general director approves
//! it. Approval is one-way — an approved report is locked and cannot be
//! re-uploaded or un-approved.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tadqiq_core::{Department, PlanDate, PlanId, PlanYear, TaskId, Timestamp, UserId};

// ─── Task Type ───────────────────────────────────────────────────────

/// The kind of oversight work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    /// A financial or operational audit engagement.
    Audit,
    /// A field inspection.
    Inspection,
    /// An awareness campaign item.
    Awareness,
}

impl TaskType {
    /// The Arabic label shown in the records.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::Audit => "مراجعة",
            Self::Inspection => "تفتيشية",
            Self::Awareness => "توعوية",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Audit => "AUDIT",
            Self::Inspection => "INSPECTION",
            Self::Awareness => "AWARENESS",
        };
        f.write_str(s)
    }
}

// ─── Task Status ─────────────────────────────────────────────────────

/// The lifecycle status of an audit task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Awaiting assignment to an auditor.
    Pending,
    /// Under active execution.
    InProgress,
    /// Finished (terminal).
    Completed,
    /// Behind schedule.
    Delayed,
    /// Rejected by management (terminal).
    Rejected,
    /// Temporarily paused by the general director.
    Paused,
}

impl TaskStatus {
    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// The Arabic status label shown in the records.
    pub fn label_ar(&self) -> &'static str {
        match self {
            Self::Pending => "بانتظار الإسناد",
            Self::InProgress => "قيد التنفيذ",
            Self::Completed => "مكتملة",
            Self::Delayed => "متأخرة",
            Self::Rejected => "مرفوضة",
            Self::Paused => "موقوفة مؤقتًا",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Delayed => "DELAYED",
            Self::Rejected => "REJECTED",
            Self::Paused => "PAUSED",
        };
        f.write_str(s)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors that can occur during task lifecycle transitions.
#[derive(Error, Debug)]
pub enum TaskError {
    /// Attempted transition is not valid from the current status.
    #[error("invalid task transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: String,
        /// Attempted target status.
        to: String,
    },

    /// Task is in a terminal status.
    #[error("task {task_id} is {status} and cannot transition")]
    Terminal {
        /// The task reference code.
        task_id: String,
        /// The terminal status.
        status: String,
    },

    /// Final report not uploaded yet.
    #[error("task {task_id} has no final report to approve")]
    NoFinalReport {
        /// The task reference code.
        task_id: String,
    },

    /// Final report already approved and locked.
    #[error("final report of task {task_id} is approved and locked")]
    ReportLocked {
        /// The task reference code.
        task_id: String,
    },
}

// ─── Transition Evidence ─────────────────────────────────────────────

/// Evidence for a task lifecycle transition.
#[derive(Debug, Clone)]
pub struct TaskEvidence {
    /// What happened, as shown on the task timeline.
    pub reason: String,
    /// Who performed the action (job title or reference code).
    pub actor: String,
}

impl TaskEvidence {
    /// Build evidence from a reason and an actor.
    pub fn new(reason: impl Into<String>, actor: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            actor: actor.into(),
        }
    }
}

/// Record of a task status transition, one timeline row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTransitionRecord {
    /// Status before the transition.
    pub from_status: TaskStatus,
    /// Status after the transition.
    pub to_status: TaskStatus,
    /// When the transition occurred.
    pub timestamp: Timestamp,
    /// What happened.
    pub reason: String,
    /// Who performed the action.
    pub actor: String,
}

// ─── Final Report ────────────────────────────────────────────────────

/// The final-report gate of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalReport {
    /// The auditor has uploaded the closing report.
    pub uploaded: bool,
    /// The general director has approved it (locks the report).
    pub approved: bool,
}

// ─── Audit Task ──────────────────────────────────────────────────────

/// An audit task with its lifecycle status and transition history.
///
/// Enforces valid status transitions and the progress invariants.
/// Invalid transitions are rejected with structured errors naming the
/// current status and the attempted target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTask {
    /// Task reference code.
    pub id: TaskId,
    /// Short title.
    pub title: String,
    /// Scope and objectives, free text.
    pub description: String,
    /// Kind of oversight work.
    pub task_type: TaskType,
    /// Current lifecycle status.
    pub status: TaskStatus,
    /// Scheduled start date.
    pub start_date: PlanDate,
    /// Scheduled end date.
    pub end_date: PlanDate,
    /// The auditor the task is assigned to, once assigned.
    pub assigned_to: Option<UserId>,
    /// The audited department.
    pub department: Department,
    /// Planning-cycle year.
    pub year: PlanYear,
    /// Execution progress, 0–100.
    pub progress: u8,
    /// The liaison officer handling document requests, once assigned.
    pub liaison_id: Option<UserId>,
    /// The annual plan this task belongs to, if any.
    pub plan_id: Option<PlanId>,
    /// Final-report upload/approval gate.
    pub final_report: FinalReport,
    /// Ordered log of all status transitions.
    pub transitions: Vec<TaskTransitionRecord>,
}

impl AuditTask {
    /// Create a new task in the Pending status with zero progress.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        task_type: TaskType,
        start_date: PlanDate,
        end_date: PlanDate,
        department: Department,
        year: PlanYear,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            task_type,
            status: TaskStatus::Pending,
            start_date,
            end_date,
            assigned_to: None,
            department,
            year,
            progress: 0,
            liaison_id: None,
            plan_id: None,
            final_report: FinalReport::default(),
            transitions: Vec::new(),
        }
    }

    /// Set the designated auditor without a status change.
    ///
    /// Used when a pending task already names its intended auditor;
    /// [`AuditTask::assign`] is the transition that starts execution.
    pub fn with_assignee(mut self, auditor: UserId) -> Self {
        self.assigned_to = Some(auditor);
        self
    }

    /// Link the task to an annual plan.
    pub fn with_plan(mut self, plan_id: PlanId) -> Self {
        self.plan_id = Some(plan_id);
        self
    }

    /// Assign the task to an auditor.
    ///
    /// Assignment moves the task to InProgress and sets progress to 10,
    /// whatever it was before — reassignment restarts execution.
    pub fn assign(&mut self, auditor: UserId, evidence: TaskEvidence) -> Result<(), TaskError> {
        self.require_not_terminal()?;
        self.assigned_to = Some(auditor);
        self.progress = 10;
        self.do_transition(TaskStatus::InProgress, evidence);
        Ok(())
    }

    /// Assign the liaison officer who will fulfil document requests.
    pub fn assign_liaison(&mut self, liaison: UserId) -> Result<(), TaskError> {
        self.require_not_terminal()?;
        self.liaison_id = Some(liaison);
        Ok(())
    }

    /// Begin or resume field work (→ InProgress).
    ///
    /// Raises progress to 10 when starting from zero.
    pub fn start(&mut self, evidence: TaskEvidence) -> Result<(), TaskError> {
        self.require_not_terminal()?;
        if self.progress == 0 {
            self.progress = 10;
        }
        self.do_transition(TaskStatus::InProgress, evidence);
        Ok(())
    }

    /// Complete the task (→ Completed, progress 100).
    pub fn complete(&mut self, evidence: TaskEvidence) -> Result<(), TaskError> {
        self.require_not_terminal()?;
        self.progress = 100;
        self.do_transition(TaskStatus::Completed, evidence);
        Ok(())
    }

    /// Pause the task (→ Paused). Completed tasks cannot be paused.
    pub fn pause(&mut self, evidence: TaskEvidence) -> Result<(), TaskError> {
        self.require_not_terminal()?;
        if self.status == TaskStatus::Paused {
            return Err(TaskError::InvalidTransition {
                from: self.status.to_string(),
                to: "PAUSED".to_string(),
            });
        }
        self.do_transition(TaskStatus::Paused, evidence);
        Ok(())
    }

    /// Resume a paused task (PAUSED → IN_PROGRESS).
    pub fn resume(&mut self, evidence: TaskEvidence) -> Result<(), TaskError> {
        if self.status != TaskStatus::Paused {
            return Err(TaskError::InvalidTransition {
                from: self.status.to_string(),
                to: "IN_PROGRESS".to_string(),
            });
        }
        self.do_transition(TaskStatus::InProgress, evidence);
        Ok(())
    }

    /// Flag the task as behind schedule (→ Delayed).
    pub fn mark_delayed(&mut self, evidence: TaskEvidence) -> Result<(), TaskError> {
        self.require_not_terminal()?;
        self.do_transition(TaskStatus::Delayed, evidence);
        Ok(())
    }

    /// Reject the task (→ Rejected, terminal).
    pub fn reject(&mut self, evidence: TaskEvidence) -> Result<(), TaskError> {
        self.require_not_terminal()?;
        self.do_transition(TaskStatus::Rejected, evidence);
        Ok(())
    }

    /// Set execution progress, clamped to 0–100.
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
    }

    /// Record the final report as uploaded.
    ///
    /// Re-uploading is allowed until the report is approved.
    pub fn upload_final_report(&mut self) -> Result<(), TaskError> {
        if self.final_report.approved {
            return Err(TaskError::ReportLocked {
                task_id: self.id.to_string(),
            });
        }
        self.final_report.uploaded = true;
        Ok(())
    }

    /// Approve the final report. One-way: locks the report.
    pub fn approve_final_report(&mut self) -> Result<(), TaskError> {
        if !self.final_report.uploaded {
            return Err(TaskError::NoFinalReport {
                task_id: self.id.to_string(),
            });
        }
        if self.final_report.approved {
            return Err(TaskError::ReportLocked {
                task_id: self.id.to_string(),
            });
        }
        self.final_report.approved = true;
        Ok(())
    }

    /// Whether document requests can be raised on this task.
    ///
    /// Requires an assigned liaison officer.
    pub fn accepts_doc_requests(&self) -> bool {
        self.liaison_id.is_some() && !self.status.is_terminal()
    }

    /// Reject any transition out of a terminal status.
    fn require_not_terminal(&self) -> Result<(), TaskError> {
        if self.status.is_terminal() {
            return Err(TaskError::Terminal {
                task_id: self.id.to_string(),
                status: self.status.to_string(),
            });
        }
        Ok(())
    }

    /// Record a status transition.
    fn do_transition(&mut self, to: TaskStatus, evidence: TaskEvidence) {
        self.transitions.push(TaskTransitionRecord {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(reason: &str) -> TaskEvidence {
        TaskEvidence::new(reason, "مراجع")
    }

    fn make_task() -> AuditTask {
        AuditTask::new(
            TaskId::new("SH-101"),
            "مراجعة أنظمة الدفع الإلكتروني",
            "التأكد من أمان بوابات الدفع.",
            TaskType::Audit,
            PlanDate::parse("2024-03-01").unwrap(),
            PlanDate::parse("2024-04-15").unwrap(),
            Department::new("إدارة التحول الرقمي"),
            PlanYear(1446),
        )
        .with_plan(PlanId::new("PLAN-1446"))
    }

    fn make_assigned_task() -> AuditTask {
        let mut t = make_task();
        t.assign(UserId::new("AUD-101"), evidence("إسناد المهمة"))
            .unwrap();
        t
    }

    // ── Creation ─────────────────────────────────────────────────────

    #[test]
    fn test_new_task_is_pending_with_zero_progress() {
        let t = make_task();
        assert_eq!(t.status, TaskStatus::Pending);
        assert_eq!(t.progress, 0);
        assert!(t.transitions.is_empty());
        assert!(!t.accepts_doc_requests());
    }

    // ── Assignment ───────────────────────────────────────────────────

    #[test]
    fn test_assign_sets_in_progress_and_progress_ten() {
        let t = make_assigned_task();
        assert_eq!(t.status, TaskStatus::InProgress);
        assert_eq!(t.progress, 10);
        assert_eq!(t.assigned_to, Some(UserId::new("AUD-101")));
        assert_eq!(t.transitions.len(), 1);
    }

    #[test]
    fn test_reassign_resets_progress_to_ten() {
        let mut t = make_assigned_task();
        t.set_progress(75);
        t.assign(UserId::new("AUD-102"), evidence("إعادة إسناد"))
            .unwrap();
        assert_eq!(t.progress, 10);
        assert_eq!(t.assigned_to, Some(UserId::new("AUD-102")));
    }

    #[test]
    fn test_cannot_assign_completed_task() {
        let mut t = make_assigned_task();
        t.complete(evidence("اكتمال")).unwrap();
        let result = t.assign(UserId::new("AUD-103"), evidence("test"));
        assert!(matches!(result, Err(TaskError::Terminal { .. })));
    }

    // ── Start / complete ─────────────────────────────────────────────

    #[test]
    fn test_start_raises_zero_progress_to_ten() {
        let mut t = make_task();
        t.start(evidence("بدء العمل الميداني")).unwrap();
        assert_eq!(t.status, TaskStatus::InProgress);
        assert_eq!(t.progress, 10);
    }

    #[test]
    fn test_start_preserves_nonzero_progress() {
        let mut t = make_assigned_task();
        t.set_progress(45);
        t.pause(evidence("إيقاف")).unwrap();
        t.resume(evidence("استئناف")).unwrap();
        assert_eq!(t.progress, 45);
    }

    #[test]
    fn test_complete_sets_progress_hundred() {
        let mut t = make_assigned_task();
        t.complete(evidence("اكتمال المهمة")).unwrap();
        assert_eq!(t.status, TaskStatus::Completed);
        assert_eq!(t.progress, 100);
    }

    // ── Pause / resume ───────────────────────────────────────────────

    #[test]
    fn test_pause_and_resume() {
        let mut t = make_assigned_task();
        t.pause(evidence("إيقاف مؤقت")).unwrap();
        assert_eq!(t.status, TaskStatus::Paused);
        t.resume(evidence("استئناف")).unwrap();
        assert_eq!(t.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_cannot_pause_completed_task() {
        let mut t = make_assigned_task();
        t.complete(evidence("اكتمال")).unwrap();
        assert!(t.pause(evidence("test")).is_err());
    }

    #[test]
    fn test_cannot_pause_twice() {
        let mut t = make_assigned_task();
        t.pause(evidence("إيقاف")).unwrap();
        assert!(t.pause(evidence("إيقاف ثاني")).is_err());
    }

    #[test]
    fn test_cannot_resume_running_task() {
        let mut t = make_assigned_task();
        assert!(t.resume(evidence("test")).is_err());
    }

    // ── Delay / reject ───────────────────────────────────────────────

    #[test]
    fn test_mark_delayed_then_restart() {
        let mut t = make_assigned_task();
        t.mark_delayed(evidence("تجاوز الموعد")).unwrap();
        assert_eq!(t.status, TaskStatus::Delayed);
        t.start(evidence("معاودة التنفيذ")).unwrap();
        assert_eq!(t.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_rejected_is_terminal() {
        let mut t = make_task();
        t.reject(evidence("خارج النطاق")).unwrap();
        assert!(t.status.is_terminal());
        assert!(t.start(evidence("test")).is_err());
    }

    // ── Progress clamping ────────────────────────────────────────────

    #[test]
    fn test_progress_clamped_to_hundred() {
        let mut t = make_assigned_task();
        t.set_progress(250);
        assert_eq!(t.progress, 100);
    }

    // ── Liaison / document requests ──────────────────────────────────

    #[test]
    fn test_doc_requests_require_liaison() {
        let mut t = make_assigned_task();
        assert!(!t.accepts_doc_requests());
        t.assign_liaison(UserId::new("LIO-01"))
            .unwrap();
        assert!(t.accepts_doc_requests());
    }

    #[test]
    fn test_terminal_task_refuses_doc_requests() {
        let mut t = make_assigned_task();
        t.assign_liaison(UserId::new("LIO-01"))
            .unwrap();
        t.complete(evidence("اكتمال")).unwrap();
        assert!(!t.accepts_doc_requests());
    }

    // ── Final report ─────────────────────────────────────────────────

    #[test]
    fn test_final_report_upload_then_approve() {
        let mut t = make_assigned_task();
        assert!(t.approve_final_report().is_err());
        t.upload_final_report().unwrap();
        t.approve_final_report().unwrap();
        assert!(t.final_report.approved);
    }

    #[test]
    fn test_approved_report_is_locked() {
        let mut t = make_assigned_task();
        t.upload_final_report().unwrap();
        t.approve_final_report().unwrap();
        assert!(matches!(
            t.upload_final_report(),
            Err(TaskError::ReportLocked { .. })
        ));
        assert!(matches!(
            t.approve_final_report(),
            Err(TaskError::ReportLocked { .. })
        ));
    }

    // ── Transition log ───────────────────────────────────────────────

    #[test]
    fn test_transition_log_records_all_changes() {
        let mut t = make_assigned_task();
        t.pause(evidence("إيقاف")).unwrap();
        t.resume(evidence("استئناف")).unwrap();

        assert_eq!(t.transitions.len(), 3);
        assert_eq!(t.transitions[0].from_status, TaskStatus::Pending);
        assert_eq!(t.transitions[0].to_status, TaskStatus::InProgress);
        assert_eq!(t.transitions[1].to_status, TaskStatus::Paused);
        assert_eq!(t.transitions[2].to_status, TaskStatus::InProgress);
        assert_eq!(t.transitions[2].reason, "استئناف");
    }

    // ── Display / serde ──────────────────────────────────────────────

    #[test]
    fn test_status_display_and_labels() {
        assert_eq!(TaskStatus::Pending.to_string(), "PENDING");
        assert_eq!(TaskStatus::InProgress.to_string(), "IN_PROGRESS");
        assert_eq!(TaskStatus::Paused.label_ar(), "موقوفة مؤقتًا");
        assert_eq!(TaskType::Inspection.to_string(), "INSPECTION");
        assert_eq!(TaskType::Audit.label_ar(), "مراجعة");
    }

    #[test]
    fn test_task_serialization_roundtrip() {
        let t = make_assigned_task();
        let json = serde_json::to_string(&t).unwrap();
        let parsed: AuditTask = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.status, t.status);
        assert_eq!(parsed.id, t.id);
        assert_eq!(parsed.progress, t.progress);
    }

    #[test]
    fn test_status_serde_screaming_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
    }
}
