//! # Role-Conditioned Visibility and Grouping
//!
//! The read side of the desk: which records the acting user sees, and
//! the grouped views the dashboard renders. Every query starts from the
//! role-conditioned base set:
//!
//! - a department manager sees their own department's records;
//! - an auditor sees the tasks assigned to them;
//! - the general director and data entry see everything, optionally
//!   narrowed by department.
//!
//! Plan visibility is stricter for department managers: only APPROVED
//! plans of their own department.

use std::collections::BTreeMap;

use tadqiq_core::{Department, PlanId, PlanYear, TaskId, UserRole};
use tadqiq_state::{
    AnnualPlan, AuditProgram, AuditTask, DocRequestStatus, DocumentRequest, PlanStatus,
    RegulatoryRequest, TaskStatus,
};

use crate::store::Desk;

/// Optional narrowing applied on top of role visibility for tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Keep only tasks with this status.
    pub status: Option<TaskStatus>,
    /// Keep only tasks of this department.
    pub department: Option<Department>,
}

/// Optional narrowing applied on top of role visibility for plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Keep only plans with this status.
    pub status: Option<PlanStatus>,
    /// Keep only plans of this department.
    pub department: Option<Department>,
}

impl Desk {
    // ── Tasks ────────────────────────────────────────────────────────

    /// The tasks the acting user sees, before any further narrowing.
    pub fn visible_tasks(&self) -> Vec<&AuditTask> {
        let user = &self.current_user;
        self.tasks
            .iter()
            .filter(|task| match user.role {
                UserRole::DeptManager => Some(&task.department) == user.department.as_ref(),
                UserRole::Auditor => task.assigned_to.as_ref() == Some(&user.id),
                UserRole::GeneralDirector
                | UserRole::DataEntry
                | UserRole::LiaisonOfficer
                | UserRole::SystemAdmin => true,
            })
            .collect()
    }

    /// Visible tasks narrowed by status and department.
    pub fn filter_tasks(&self, filter: &TaskFilter) -> Vec<&AuditTask> {
        self.visible_tasks()
            .into_iter()
            .filter(|task| {
                let matches_status = filter.status.map_or(true, |s| task.status == s);
                let matches_dept = filter
                    .department
                    .as_ref()
                    .map_or(true, |d| &task.department == d);
                matches_status && matches_dept
            })
            .collect()
    }

    /// Visible tasks belonging to a plan, in stored order.
    pub fn tasks_for_plan(&self, plan_id: &PlanId) -> Vec<&AuditTask> {
        self.visible_tasks()
            .into_iter()
            .filter(|task| task.plan_id.as_ref() == Some(plan_id))
            .collect()
    }

    /// Visible tasks not linked to any plan.
    pub fn unplanned_tasks(&self) -> Vec<&AuditTask> {
        self.visible_tasks()
            .into_iter()
            .filter(|task| task.plan_id.is_none())
            .collect()
    }

    // ── Plans ────────────────────────────────────────────────────────

    /// The plans the acting user sees, narrowed by the filter.
    ///
    /// Department managers see only APPROVED plans of their own
    /// department, whatever the filter says.
    pub fn visible_plans(&self, filter: &PlanFilter) -> Vec<&AnnualPlan> {
        let user = &self.current_user;
        if user.role == UserRole::DeptManager {
            return self
                .plans
                .iter()
                .filter(|plan| {
                    Some(&plan.department) == user.department.as_ref()
                        && plan.status == PlanStatus::Approved
                })
                .collect();
        }
        self.plans
            .iter()
            .filter(|plan| {
                let matches_status = filter.status.map_or(true, |s| plan.status == s);
                let matches_dept = filter
                    .department
                    .as_ref()
                    .map_or(true, |d| &plan.department == d);
                matches_status && matches_dept
            })
            .collect()
    }

    /// Visible plans grouped by planning year, newest year first.
    pub fn plans_by_year(&self, filter: &PlanFilter) -> Vec<(PlanYear, Vec<&AnnualPlan>)> {
        let mut grouped: BTreeMap<PlanYear, Vec<&AnnualPlan>> = BTreeMap::new();
        for plan in self.visible_plans(filter) {
            grouped.entry(plan.year).or_default().push(plan);
        }
        grouped.into_iter().rev().collect()
    }

    /// Sum of plan task counts for a year, across visible plans.
    pub fn year_tasks_total(&self, year: PlanYear) -> u32 {
        self.visible_plans(&PlanFilter::default())
            .into_iter()
            .filter(|plan| plan.year == year)
            .map(|plan| plan.tasks_count)
            .sum()
    }

    // ── Programs ─────────────────────────────────────────────────────

    /// The program roster of one plan, in stored order.
    pub fn programs_for_plan(&self, plan_id: &PlanId) -> Vec<&AuditProgram> {
        self.programs
            .iter()
            .filter(|program| &program.plan_id == plan_id)
            .collect()
    }

    /// The year-wide program view: every program of every plan of the
    /// year, concatenated in plan order.
    pub fn programs_for_year(&self, year: PlanYear) -> Vec<&AuditProgram> {
        self.plans
            .iter()
            .filter(|plan| plan.year == year)
            .flat_map(|plan| self.programs_for_plan(&plan.id))
            .collect()
    }

    // ── Document requests ────────────────────────────────────────────

    /// Document requests belonging to a task, in stored order.
    pub fn doc_requests_for_task(&self, task_id: &TaskId) -> Vec<&DocumentRequest> {
        self.doc_requests
            .iter()
            .filter(|request| &request.task_id == task_id)
            .collect()
    }

    /// Search document requests by title or reference code substring
    /// (case-insensitive), narrowed by status.
    pub fn search_doc_requests(
        &self,
        term: &str,
        status: Option<DocRequestStatus>,
    ) -> Vec<&DocumentRequest> {
        let term = term.to_lowercase();
        self.doc_requests
            .iter()
            .filter(|request| {
                let matches_term = term.is_empty()
                    || request.title.to_lowercase().contains(&term)
                    || request.id.as_str().to_lowercase().contains(&term);
                let matches_status = status.map_or(true, |s| request.status == s);
                matches_term && matches_status
            })
            .collect()
    }

    // ── Regulatory ───────────────────────────────────────────────────

    /// Search regulatory requests by sender entity or main topic.
    pub fn search_regulatory(&self, term: &str) -> Vec<&RegulatoryRequest> {
        self.regulatory
            .iter()
            .filter(|request| request.matches_search(term))
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use tadqiq_core::UserId;

    fn desk_as(role: UserRole) -> Desk {
        let mut desk = seed::seeded_desk();
        desk.switch_role(role);
        desk
    }

    // ── Role visibility over tasks ───────────────────────────────────

    #[test]
    fn test_auditor_sees_only_own_tasks() {
        let desk = desk_as(UserRole::Auditor);
        let tasks = desk.visible_tasks();
        assert!(!tasks.is_empty());
        for task in tasks {
            assert_eq!(task.assigned_to, Some(UserId::new("AUD-200")));
        }
    }

    #[test]
    fn test_dept_manager_sees_own_department() {
        let desk = desk_as(UserRole::DeptManager);
        let tasks = desk.visible_tasks();
        assert!(!tasks.is_empty());
        for task in tasks {
            assert_eq!(task.department, Department::new("إدارة التحول الرقمي"));
        }
    }

    #[test]
    fn test_director_sees_everything() {
        let desk = desk_as(UserRole::GeneralDirector);
        assert_eq!(desk.visible_tasks().len(), desk.tasks().len());
    }

    #[test]
    fn test_status_and_department_narrowing() {
        let desk = desk_as(UserRole::GeneralDirector);
        let filter = TaskFilter {
            status: Some(TaskStatus::InProgress),
            department: Some(Department::new("إدارة التحول الرقمي")),
        };
        let tasks = desk.filter_tasks(&filter);
        assert!(!tasks.is_empty());
        for task in tasks {
            assert_eq!(task.status, TaskStatus::InProgress);
            assert_eq!(task.department, Department::new("إدارة التحول الرقمي"));
        }
    }

    // ── Role visibility over plans ───────────────────────────────────

    #[test]
    fn test_dept_manager_sees_only_approved_own_plans() {
        let desk = desk_as(UserRole::DeptManager);
        let plans = desk.visible_plans(&PlanFilter {
            // The filter is ignored for department managers.
            status: Some(PlanStatus::Draft),
            department: None,
        });
        assert!(!plans.is_empty());
        for plan in plans {
            assert_eq!(plan.status, PlanStatus::Approved);
            assert_eq!(plan.department, Department::new("إدارة التحول الرقمي"));
        }
    }

    #[test]
    fn test_plan_status_filter_for_director() {
        let desk = desk_as(UserRole::GeneralDirector);
        let under_review = desk.visible_plans(&PlanFilter {
            status: Some(PlanStatus::UnderReview),
            department: None,
        });
        assert_eq!(under_review.len(), 2);
    }

    // ── Grouping ─────────────────────────────────────────────────────

    #[test]
    fn test_tasks_grouped_by_plan() {
        let desk = desk_as(UserRole::GeneralDirector);
        let tasks = desk.tasks_for_plan(&PlanId::new("PLAN-1446"));
        assert_eq!(tasks.len(), 3);
        let older = desk.tasks_for_plan(&PlanId::new("PLAN-1445"));
        assert_eq!(older.len(), 1);
    }

    #[test]
    fn test_plans_by_year_newest_first() {
        let desk = desk_as(UserRole::GeneralDirector);
        let grouped = desk.plans_by_year(&PlanFilter::default());
        let years: Vec<_> = grouped.iter().map(|(year, _)| *year).collect();
        assert_eq!(years, vec![PlanYear(1446), PlanYear(1445)]);
    }

    #[test]
    fn test_year_tasks_total_sums_counts() {
        let desk = desk_as(UserRole::GeneralDirector);
        // 3 + 24 + 15 + 32 + 14 + 11 across the seeded 1446 plans.
        assert_eq!(desk.year_tasks_total(PlanYear(1446)), 99);
    }

    #[test]
    fn test_year_wide_program_view() {
        let desk = desk_as(UserRole::GeneralDirector);
        let programs = desk.programs_for_year(PlanYear(1446));
        assert_eq!(programs.len(), 3);
        assert!(desk.programs_for_year(PlanYear(1445)).is_empty());
    }

    // ── Document request search ──────────────────────────────────────

    #[test]
    fn test_doc_request_search_by_title() {
        let desk = desk_as(UserRole::LiaisonOfficer);
        let hits = desk.search_doc_requests("سجلات العمليات", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "REQ-1");
    }

    #[test]
    fn test_doc_request_search_by_code_case_insensitive() {
        let desk = desk_as(UserRole::LiaisonOfficer);
        let hits = desk.search_doc_requests("req-2", None);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_doc_request_status_filter() {
        let desk = desk_as(UserRole::LiaisonOfficer);
        let sent = desk.search_doc_requests("", Some(DocRequestStatus::Sent));
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].id.as_str(), "REQ-1");
    }

    #[test]
    fn test_doc_requests_for_task() {
        let desk = desk_as(UserRole::Auditor);
        let requests = desk.doc_requests_for_task(&TaskId::new("SH-101"));
        assert_eq!(requests.len(), 1);
    }

    // ── Regulatory search ────────────────────────────────────────────

    #[test]
    fn test_regulatory_search() {
        let desk = desk_as(UserRole::GeneralDirector);
        assert_eq!(desk.search_regulatory("ديوان المظالم").len(), 1);
        assert_eq!(desk.search_regulatory("").len(), 2);
        assert!(desk.search_regulatory("لا يوجد").is_empty());
    }
}
