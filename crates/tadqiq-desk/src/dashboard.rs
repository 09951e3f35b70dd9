//! # Dashboard Statistics
//!
//! The stat tiles of the landing dashboard and the per-plan completion
//! figures of the task-oversight view, computed over the acting user's
//! visible task set. Percentages guard against empty sets.

use serde::Serialize;

use tadqiq_core::PlanId;
use tadqiq_state::{AnnualPlan, AuditTask, PlanStatus, TaskStatus};

use crate::filters::PlanFilter;
use crate::store::Desk;

/// The landing dashboard's stat tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Tasks visible to the acting user.
    pub total_tasks: usize,
    /// Of those, under execution.
    pub in_progress: usize,
    /// Of those, completed.
    pub completed: usize,
    /// Of those, behind schedule.
    pub delayed: usize,
    /// Completed share of the visible set, rounded percent.
    pub completion_pct: u8,
    /// Plans awaiting the general director's review.
    pub pending_plans: usize,
}

/// Completion figures for one plan's task group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanTaskStats {
    /// Tasks in the group.
    pub total: usize,
    /// Completed tasks.
    pub completed: usize,
    /// Delayed tasks.
    pub delayed: usize,
    /// Completed share, rounded percent.
    pub completion_pct: u8,
}

/// Rounded percentage of `part` in `whole`, zero when `whole` is empty.
fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u8
}

impl Desk {
    /// The stat tiles over the acting user's visible tasks.
    pub fn dashboard_stats(&self) -> DashboardStats {
        let tasks = self.visible_tasks();
        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();
        let completed = count(TaskStatus::Completed);
        DashboardStats {
            total_tasks: tasks.len(),
            in_progress: count(TaskStatus::InProgress),
            completed,
            delayed: count(TaskStatus::Delayed),
            completion_pct: percentage(completed, tasks.len()),
            pending_plans: self.pending_plans().len(),
        }
    }

    /// Plans awaiting review, in stored order.
    pub fn pending_plans(&self) -> Vec<&AnnualPlan> {
        self.visible_plans(&PlanFilter {
            status: Some(PlanStatus::UnderReview),
            department: None,
        })
    }

    /// The first `n` visible tasks, for the dashboard's recent list.
    pub fn recent_tasks(&self, n: usize) -> Vec<&AuditTask> {
        self.visible_tasks().into_iter().take(n).collect()
    }

    /// Completion figures for one plan's visible task group.
    pub fn plan_task_stats(&self, plan_id: &PlanId) -> PlanTaskStats {
        let tasks = self.tasks_for_plan(plan_id);
        let completed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        let delayed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Delayed)
            .count();
        PlanTaskStats {
            total: tasks.len(),
            completed,
            delayed,
            completion_pct: percentage(completed, tasks.len()),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
