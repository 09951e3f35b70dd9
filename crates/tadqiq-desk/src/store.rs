//! # The Desk — Application State Root
//!
//! A [`Desk`] is the whole application state: the acting user, the
//! active navigation section, and every record collection. Operations
//! mutate it synchronously; each is gated on the acting user's role and
//! returns a structured error when refused.
//!
//! Collections keep insertion order; newly created plans, document
//! requests, and regulatory requests are prepended, newest first, as
//! the views list them.

use tracing::info;

use tadqiq_core::{
    Department, DocRequestId, MessageId, PlanDate, PlanId, PlanYear, ProgramId, RegulatoryRef,
    ReportId, TaskId, UserId, UserRole,
};
use tadqiq_state::{
    AnnualPlan, Audience, AuditProgram, AuditTask, AwarenessMessage, DirectorAction,
    DocumentRequest, EmployeeVoiceReport, PlanEvidence, ProgramPriority, Quarter,
    RegulatoryRequest, TaskEvidence, TaskType,
};

use crate::access::NavSection;
use crate::error::DeskError;
use crate::user::User;

/// The in-memory application state of the audit dashboard.
#[derive(Debug, Clone)]
pub struct Desk {
    pub(crate) current_user: User,
    pub(crate) active_section: NavSection,
    pub(crate) selected_task: Option<TaskId>,
    pub(crate) directory: Vec<User>,
    pub(crate) tasks: Vec<AuditTask>,
    pub(crate) plans: Vec<AnnualPlan>,
    pub(crate) programs: Vec<AuditProgram>,
    pub(crate) doc_requests: Vec<DocumentRequest>,
    pub(crate) regulatory: Vec<RegulatoryRequest>,
    pub(crate) voice_reports: Vec<EmployeeVoiceReport>,
    pub(crate) awareness: Vec<AwarenessMessage>,
    pub(crate) regulatory_sequence: u32,
}

impl Desk {
    /// Create an empty desk with the given acting user.
    pub fn new(current_user: User) -> Self {
        Self {
            current_user,
            active_section: NavSection::Dashboard,
            selected_task: None,
            directory: Vec::new(),
            tasks: Vec::new(),
            plans: Vec::new(),
            programs: Vec::new(),
            doc_requests: Vec::new(),
            regulatory: Vec::new(),
            voice_reports: Vec::new(),
            awareness: Vec::new(),
            regulatory_sequence: 1,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The acting user.
    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    /// The active navigation section.
    pub fn active_section(&self) -> NavSection {
        self.active_section
    }

    /// The task opened in the details view, if any.
    pub fn selected_task(&self) -> Option<&AuditTask> {
        self.selected_task
            .as_ref()
            .and_then(|id| self.tasks.iter().find(|t| &t.id == id))
    }

    /// The user directory.
    pub fn directory(&self) -> &[User] {
        &self.directory
    }

    /// All tasks, unfiltered. Role-conditioned views live on the
    /// filter queries.
    pub fn tasks(&self) -> &[AuditTask] {
        &self.tasks
    }

    /// All plans, unfiltered.
    pub fn plans(&self) -> &[AnnualPlan] {
        &self.plans
    }

    /// All programs, unfiltered.
    pub fn programs(&self) -> &[AuditProgram] {
        &self.programs
    }

    /// All document requests, newest first.
    pub fn doc_requests(&self) -> &[DocumentRequest] {
        &self.doc_requests
    }

    /// All regulatory requests, newest first.
    pub fn regulatory_requests(&self) -> &[RegulatoryRequest] {
        &self.regulatory
    }

    /// All employee-voice reports.
    pub fn voice_reports(&self) -> &[EmployeeVoiceReport] {
        &self.voice_reports
    }

    /// All awareness messages.
    pub fn awareness_messages(&self) -> &[AwarenessMessage] {
        &self.awareness
    }

    /// Look up a task by reference code.
    pub fn task(&self, id: &TaskId) -> Result<&AuditTask, DeskError> {
        self.tasks
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| DeskError::UnknownTask(id.to_string()))
    }

    /// Look up a plan by reference code.
    pub fn plan(&self, id: &PlanId) -> Result<&AnnualPlan, DeskError> {
        self.plans
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| DeskError::UnknownPlan(id.to_string()))
    }

    // ── Session ──────────────────────────────────────────────────────

    /// Switch the acting persona to another role's demo identity.
    ///
    /// Navigation returns to the dashboard and any open task details
    /// view is closed.
    pub fn switch_role(&mut self, role: UserRole) {
        self.current_user = User::persona(role);
        self.active_section = NavSection::Dashboard;
        self.selected_task = None;
        info!(role = %role, user = %self.current_user.id, "switched acting persona");
    }

    /// Open a navigation section, refusing roles the section does not admit.
    pub fn open_section(&mut self, section: NavSection) -> Result<(), DeskError> {
        if !section.admits(self.current_user.role) {
            return Err(DeskError::SectionNotAccessible {
                section: section.to_string(),
                role: self.current_user.role,
            });
        }
        self.active_section = section;
        Ok(())
    }

    /// Open a task in the details view.
    pub fn select_task(&mut self, id: &TaskId) -> Result<(), DeskError> {
        self.task(id)?;
        self.selected_task = Some(id.clone());
        Ok(())
    }

    /// Close the details view.
    pub fn clear_selected_task(&mut self) {
        self.selected_task = None;
    }

    // ── Plan operations ──────────────────────────────────────────────

    /// Create an annual plan in the Draft status, dated today.
    pub fn create_plan(
        &mut self,
        year: PlanYear,
        department: Department,
        coverage: impl Into<String>,
        title: Option<String>,
    ) -> Result<PlanId, DeskError> {
        use UserRole::*;
        self.require_role(&[GeneralDirector, DataEntry, SystemAdmin], "create a plan")?;
        let mut plan = AnnualPlan::new(
            PlanId::generate(),
            year,
            department,
            coverage,
            PlanDate::today(),
        );
        if let Some(title) = title {
            plan = plan.with_title(title);
        }
        let id = plan.id.clone();
        info!(plan = %id, year = %year, "created annual plan");
        self.plans.insert(0, plan);
        Ok(id)
    }

    /// Submit a plan for the general director's review.
    pub fn submit_plan(&mut self, id: &PlanId) -> Result<(), DeskError> {
        use UserRole::*;
        self.require_role(&[GeneralDirector, DataEntry, SystemAdmin], "submit a plan")?;
        let evidence = self.plan_evidence("رفع الخطة للاعتماد");
        self.plan_mut(id)?.submit_for_review(evidence)?;
        Ok(())
    }

    /// Approve a plan under review.
    pub fn approve_plan(&mut self, id: &PlanId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::GeneralDirector], "approve a plan")?;
        let evidence = self.plan_evidence("اعتماد الخطة");
        self.plan_mut(id)?.approve(evidence)?;
        info!(plan = %id, "plan approved");
        Ok(())
    }

    /// Reject a plan under review.
    pub fn reject_plan(&mut self, id: &PlanId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::GeneralDirector], "reject a plan")?;
        let evidence = self.plan_evidence("رفض الخطة");
        self.plan_mut(id)?.reject(evidence)?;
        Ok(())
    }

    /// Add a program to a draft plan's roster.
    pub fn add_program(
        &mut self,
        plan_id: &PlanId,
        title: impl Into<String>,
        objective: impl Into<String>,
        duration: impl Into<String>,
        priority: ProgramPriority,
        quarter: Quarter,
    ) -> Result<ProgramId, DeskError> {
        self.require_role(&[UserRole::DataEntry], "add a program")?;
        self.plan_mut(plan_id)?.record_program_added()?;
        let program = AuditProgram {
            id: ProgramId::generate(),
            plan_id: plan_id.clone(),
            title: title.into(),
            objective: objective.into(),
            duration: duration.into(),
            priority,
            quarter,
        };
        let id = program.id.clone();
        self.programs.push(program);
        Ok(id)
    }

    /// Remove a program from a draft plan's roster.
    pub fn delete_program(
        &mut self,
        plan_id: &PlanId,
        program_id: &ProgramId,
    ) -> Result<(), DeskError> {
        self.require_role(&[UserRole::DataEntry], "delete a program")?;
        let position = self
            .programs
            .iter()
            .position(|p| &p.id == program_id && &p.plan_id == plan_id)
            .ok_or_else(|| DeskError::UnknownProgram {
                program: program_id.to_string(),
                plan: plan_id.to_string(),
            })?;
        self.plan_mut(plan_id)?.record_program_removed()?;
        self.programs.remove(position);
        Ok(())
    }

    // ── Task operations ──────────────────────────────────────────────

    /// Create a task in the Pending status.
    #[allow(clippy::too_many_arguments)]
    pub fn create_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        task_type: TaskType,
        start_date: PlanDate,
        end_date: PlanDate,
        department: Department,
        year: PlanYear,
        plan_id: Option<PlanId>,
    ) -> Result<TaskId, DeskError> {
        use UserRole::*;
        self.require_role(&[DeptManager, DataEntry], "create a task")?;
        let mut task = AuditTask::new(
            TaskId::generate(),
            title,
            description,
            task_type,
            start_date,
            end_date,
            department,
            year,
        );
        if let Some(plan_id) = plan_id {
            task = task.with_plan(plan_id);
        }
        let id = task.id.clone();
        info!(task = %id, "created audit task");
        self.tasks.push(task);
        Ok(id)
    }

    /// Assign a task to an auditor (department manager action).
    pub fn assign_task(&mut self, id: &TaskId, auditor: UserId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::DeptManager], "assign a task")?;
        let evidence = self.task_evidence("إسناد المهمة لمراجع");
        self.task_mut(id)?.assign(auditor, evidence)?;
        info!(task = %id, "task assigned");
        Ok(())
    }

    /// Assign the liaison officer for a task (auditor action).
    pub fn assign_liaison(&mut self, id: &TaskId, liaison: UserId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::Auditor], "assign a liaison officer")?;
        self.task_mut(id)?.assign_liaison(liaison)?;
        Ok(())
    }

    /// Begin or resume field work on a task (auditor action).
    pub fn start_task(&mut self, id: &TaskId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::Auditor], "start a task")?;
        let evidence = self.task_evidence("بدء العمل الميداني والتدقيق");
        self.task_mut(id)?.start(evidence)?;
        Ok(())
    }

    /// Complete a task (auditor action).
    pub fn complete_task(&mut self, id: &TaskId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::Auditor], "complete a task")?;
        let evidence = self.task_evidence("اكتمال المهمة");
        self.task_mut(id)?.complete(evidence)?;
        info!(task = %id, "task completed");
        Ok(())
    }

    /// Pause a task (general director action).
    pub fn pause_task(&mut self, id: &TaskId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::GeneralDirector], "pause a task")?;
        let evidence = self.task_evidence("إيقاف مؤقت");
        self.task_mut(id)?.pause(evidence)?;
        Ok(())
    }

    /// Resume a paused task (general director action).
    pub fn resume_task(&mut self, id: &TaskId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::GeneralDirector], "resume a task")?;
        let evidence = self.task_evidence("استئناف المهمة");
        self.task_mut(id)?.resume(evidence)?;
        Ok(())
    }

    /// Flag a task as behind schedule.
    pub fn mark_task_delayed(&mut self, id: &TaskId) -> Result<(), DeskError> {
        use UserRole::*;
        self.require_role(&[GeneralDirector, DeptManager], "flag a task as delayed")?;
        let evidence = self.task_evidence("تجاوز الموعد المحدد");
        self.task_mut(id)?.mark_delayed(evidence)?;
        Ok(())
    }

    /// Reject a task (general director action).
    pub fn reject_task(&mut self, id: &TaskId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::GeneralDirector], "reject a task")?;
        let evidence = self.task_evidence("رفض المهمة");
        self.task_mut(id)?.reject(evidence)?;
        Ok(())
    }

    /// Set a task's execution progress (auditor action).
    pub fn set_task_progress(&mut self, id: &TaskId, progress: u8) -> Result<(), DeskError> {
        self.require_role(&[UserRole::Auditor], "update task progress")?;
        self.task_mut(id)?.set_progress(progress);
        Ok(())
    }

    /// Upload the final report of a task (auditor action).
    pub fn upload_final_report(&mut self, id: &TaskId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::Auditor], "upload the final report")?;
        self.task_mut(id)?.upload_final_report()?;
        Ok(())
    }

    /// Approve the final report of a task (general director action).
    /// One-way: the report is locked afterwards.
    pub fn approve_final_report(&mut self, id: &TaskId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::GeneralDirector], "approve the final report")?;
        self.task_mut(id)?.approve_final_report()?;
        info!(task = %id, "final report approved");
        Ok(())
    }

    // ── Document request operations ──────────────────────────────────

    /// Raise a document request on a task (auditor action).
    ///
    /// Requires the task to have a liaison officer assigned.
    pub fn request_document(
        &mut self,
        task_id: &TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: PlanDate,
    ) -> Result<DocRequestId, DeskError> {
        self.require_role(&[UserRole::Auditor], "request a document")?;
        let task = self.task(task_id)?;
        if !task.accepts_doc_requests() {
            return Err(DeskError::LiaisonRequired {
                task_id: task_id.to_string(),
            });
        }
        let request = DocumentRequest::new(
            DocRequestId::generate(),
            task_id.clone(),
            title,
            description,
            due_date,
        );
        let id = request.id.clone();
        info!(request = %id, task = %task_id, "document request sent");
        self.doc_requests.insert(0, request);
        Ok(id)
    }

    /// Flag a document request as being prepared (liaison action).
    pub fn begin_doc_preparation(&mut self, id: &DocRequestId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::LiaisonOfficer], "prepare a document request")?;
        self.doc_request_mut(id)?.begin_preparation()?;
        Ok(())
    }

    /// Deliver the documents for a request (liaison action).
    pub fn fulfil_doc_request(
        &mut self,
        id: &DocRequestId,
        attachment_url: Option<String>,
    ) -> Result<(), DeskError> {
        self.require_role(&[UserRole::LiaisonOfficer], "fulfil a document request")?;
        self.doc_request_mut(id)?.fulfil(attachment_url)?;
        info!(request = %id, "document request fulfilled");
        Ok(())
    }

    // ── Regulatory operations ────────────────────────────────────────

    /// Log an inbound notification from an oversight body
    /// (liaison action). Dated today, newest first.
    pub fn log_regulatory_request(
        &mut self,
        sender_entity: impl Into<String>,
        notification_type: impl Into<String>,
        main_topic: impl Into<String>,
        note: impl Into<String>,
    ) -> Result<RegulatoryRef, DeskError> {
        use UserRole::*;
        self.require_role(&[LiaisonOfficer, SystemAdmin], "log a regulatory request")?;
        let reference = RegulatoryRef::from_sequence(self.regulatory_sequence);
        self.regulatory_sequence += 1;
        let request = RegulatoryRequest::new(
            reference.clone(),
            sender_entity,
            notification_type,
            main_topic,
            note,
            PlanDate::today(),
        );
        info!(reference = %reference, "regulatory request logged");
        self.regulatory.insert(0, request);
        Ok(reference)
    }

    /// Take a handling action on a regulatory request (general director
    /// action). Returns the Arabic confirmation line.
    ///
    /// A `CreateTask` action also opens a Pending audit task in the
    /// target department, titled from the notification's topic.
    pub fn act_on_regulatory(
        &mut self,
        reference: &RegulatoryRef,
        action: DirectorAction,
    ) -> Result<&'static str, DeskError> {
        self.require_role(&[UserRole::GeneralDirector], "act on a regulatory request")?;
        let actor = self.current_user.role.title_ar().to_string();

        if let DirectorAction::CreateTask { department } = &action {
            let request = self.regulatory_ref(reference)?;
            let task = AuditTask::new(
                TaskId::generate(),
                request.main_topic.clone(),
                request.note.clone(),
                TaskType::Audit,
                PlanDate::today(),
                PlanDate::today().plus_days(30),
                department.clone(),
                self.latest_plan_year(),
            );
            info!(task = %task.id, reference = %reference, "task opened from regulatory request");
            self.tasks.push(task);
        }

        let request = self.regulatory_mut(reference)?;
        let confirmation = request.record_action(action, actor)?;
        Ok(confirmation)
    }

    /// Close a regulatory file (general director action).
    pub fn close_regulatory(&mut self, reference: &RegulatoryRef) -> Result<(), DeskError> {
        self.require_role(&[UserRole::GeneralDirector], "close a regulatory request")?;
        self.regulatory_mut(reference)?.close()?;
        Ok(())
    }

    // ── Employee voice operations ────────────────────────────────────

    /// Submit an employee-voice report. Open to every role.
    pub fn submit_voice_report(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        is_anonymous: bool,
    ) -> ReportId {
        let report = EmployeeVoiceReport::new(
            ReportId::generate(),
            title,
            content,
            PlanDate::today(),
            is_anonymous,
        );
        let id = report.id.clone();
        self.voice_reports.insert(0, report);
        id
    }

    /// Move a voice report under analysis (general director action).
    pub fn begin_voice_analysis(&mut self, id: &ReportId) -> Result<(), DeskError> {
        self.require_role(&[UserRole::GeneralDirector], "analyze a voice report")?;
        self.voice_reports
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| DeskError::UnknownReport(id.to_string()))?
            .begin_analysis()?;
        Ok(())
    }

    // ── Awareness operations ─────────────────────────────────────────

    /// Draft an awareness message (general director / system admin).
    pub fn draft_awareness_message(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        audience: Audience,
        publish_date: PlanDate,
    ) -> Result<MessageId, DeskError> {
        use UserRole::*;
        self.require_role(&[GeneralDirector, SystemAdmin], "draft an awareness message")?;
        let message = AwarenessMessage::new(
            MessageId::generate(),
            title,
            body,
            audience,
            publish_date,
        );
        let id = message.id.clone();
        self.awareness.insert(0, message);
        Ok(id)
    }

    /// Send a drafted awareness message.
    pub fn send_awareness_message(&mut self, id: &MessageId) -> Result<(), DeskError> {
        use UserRole::*;
        self.require_role(&[GeneralDirector, SystemAdmin], "send an awareness message")?;
        let message = self
            .awareness
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| DeskError::UnknownMessage(id.to_string()))?;
        message.mark_sent();
        info!(message = %id, "awareness message sent");
        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────

    fn require_role(
        &self,
        allowed: &[UserRole],
        operation: &'static str,
    ) -> Result<(), DeskError> {
        if allowed.contains(&self.current_user.role) {
            Ok(())
        } else {
            Err(DeskError::RoleNotPermitted {
                role: self.current_user.role,
                operation,
            })
        }
    }

    fn task_mut(&mut self, id: &TaskId) -> Result<&mut AuditTask, DeskError> {
        self.tasks
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| DeskError::UnknownTask(id.to_string()))
    }

    fn plan_mut(&mut self, id: &PlanId) -> Result<&mut AnnualPlan, DeskError> {
        self.plans
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DeskError::UnknownPlan(id.to_string()))
    }

    fn doc_request_mut(&mut self, id: &DocRequestId) -> Result<&mut DocumentRequest, DeskError> {
        self.doc_requests
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| DeskError::UnknownDocRequest(id.to_string()))
    }

    fn regulatory_ref(&self, reference: &RegulatoryRef) -> Result<&RegulatoryRequest, DeskError> {
        self.regulatory
            .iter()
            .find(|r| &r.reference == reference)
            .ok_or_else(|| DeskError::UnknownRegulatory(reference.to_string()))
    }

    fn regulatory_mut(
        &mut self,
        reference: &RegulatoryRef,
    ) -> Result<&mut RegulatoryRequest, DeskError> {
        self.regulatory
            .iter_mut()
            .find(|r| &r.reference == reference)
            .ok_or_else(|| DeskError::UnknownRegulatory(reference.to_string()))
    }

    /// The newest plan year on file, falling back to the current
    /// Gregorian year label when no plans exist.
    fn latest_plan_year(&self) -> PlanYear {
        self.plans
            .iter()
            .map(|p| p.year)
            .max()
            .unwrap_or(PlanYear(PlanDate::today().calendar_year() as u16))
    }

    fn task_evidence(&self, reason: &str) -> TaskEvidence {
        TaskEvidence::new(reason, self.current_user.role.title_ar())
    }

    fn plan_evidence(&self, reason: &str) -> PlanEvidence {
        PlanEvidence::new(reason, self.current_user.role.title_ar())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
