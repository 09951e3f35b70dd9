//! # Tasks Subcommand
//!
//! Task oversight grouped by plan, the task details view with its
//! escalation reading, and the timeline CSV export.

use anyhow::Context;
use clap::Args;

use tadqiq_core::{Department, PlanDate, TaskId};
use tadqiq_desk::{timeline, Desk, EscalationState, NavSection, TaskFilter};
use tadqiq_state::TaskStatus;

/// Arguments for the tasks subcommand.
#[derive(Args, Debug)]
pub struct TasksArgs {
    /// Keep only tasks with this status (PENDING, IN_PROGRESS,
    /// COMPLETED, DELAYED, REJECTED, PAUSED).
    #[arg(long)]
    pub status: Option<String>,

    /// Keep only tasks of this department.
    #[arg(long)]
    pub department: Option<String>,

    /// Show the details view of one task.
    #[arg(long)]
    pub task: Option<String>,

    /// With --task, print the timeline CSV instead of the details.
    #[arg(long, default_value_t = false)]
    pub export_timeline: bool,
}

fn parse_status(s: &str) -> anyhow::Result<TaskStatus> {
    match s {
        "PENDING" => Ok(TaskStatus::Pending),
        "IN_PROGRESS" => Ok(TaskStatus::InProgress),
        "COMPLETED" => Ok(TaskStatus::Completed),
        "DELAYED" => Ok(TaskStatus::Delayed),
        "REJECTED" => Ok(TaskStatus::Rejected),
        "PAUSED" => Ok(TaskStatus::Paused),
        other => anyhow::bail!("unknown task status: {other}"),
    }
}

/// Render the task-oversight view.
pub fn run(desk: &mut Desk, args: &TasksArgs) -> anyhow::Result<()> {
    desk.open_section(NavSection::TasksOversight)
        .context("task oversight is not available to this role")?;

    if let Some(task_id) = &args.task {
        let id = TaskId::new(task_id.as_str());
        desk.select_task(&id)?;
        return render_details(desk, &id, args.export_timeline);
    }

    let filter = TaskFilter {
        status: args.status.as_deref().map(parse_status).transpose()?,
        department: args.department.as_deref().map(Department::new),
    };

    let tasks = desk.filter_tasks(&filter);
    let mut listed = std::collections::HashSet::new();
    for task in &tasks {
        if let Some(plan_id) = &task.plan_id {
            if listed.insert(plan_id.clone()) {
                let stats = desk.plan_task_stats(plan_id);
                println!(
                    "{plan_id} — مكتمل {}/{} ({}%)",
                    stats.completed, stats.total, stats.completion_pct
                );
                for grouped in desk.tasks_for_plan(plan_id) {
                    if filter.status.map_or(true, |s| grouped.status == s) {
                        println!(
                            "  {} — {} [{}] {}%",
                            grouped.id,
                            grouped.title,
                            grouped.status.label_ar(),
                            grouped.progress
                        );
                    }
                }
            }
        }
    }

    let unplanned = desk.unplanned_tasks();
    if !unplanned.is_empty() {
        println!("مهام خارج الخطط:");
        for task in unplanned {
            println!("  {} — {} [{}]", task.id, task.title, task.status.label_ar());
        }
    }
    Ok(())
}

fn render_details(desk: &Desk, id: &TaskId, export_timeline: bool) -> anyhow::Result<()> {
    let task = desk.task(id)?;

    if export_timeline {
        print!("{}", timeline::timeline_csv(task));
        return Ok(());
    }

    println!("تفاصيل المهمة الرقابية #{}", task.id);
    println!("  {}", task.title);
    println!("  النوع: {}", task.task_type.label_ar());
    println!("  الإدارة المعنية: {}", task.department);
    println!("  تاريخ التنفيذ: {} — الموعد النهائي: {}", task.start_date, task.end_date);
    println!("  الحالة: {} — نسبة الإنجاز: {}%", task.status.label_ar(), task.progress);
    if let Some(auditor) = &task.assigned_to {
        println!("  المراجع: {auditor}");
    }
    match &task.liaison_id {
        Some(liaison) => println!("  ضابط الاتصال: {liaison}"),
        None => println!("  يجب تعيين ضابط اتصال أولاً لتفعيل الطلبات"),
    }

    let escalation = EscalationState::for_task(task, PlanDate::today());
    println!("  التصعيد: {}", escalation.message_ar());

    let requests = desk.doc_requests_for_task(id);
    println!("  طلبات المستندات ({}):", requests.len());
    for request in requests {
        println!(
            "    {} — {} [{}] — الاستحقاق {}",
            request.id,
            request.title,
            request.status.label_ar(),
            request.due_date
        );
    }
    Ok(())
}
