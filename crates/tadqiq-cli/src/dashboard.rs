//! # Dashboard Subcommand
//!
//! The landing view: stat tiles over the acting role's visible tasks,
//! plans awaiting review, and the most recent tasks.

use clap::Args;

use tadqiq_desk::Desk;

/// Arguments for the dashboard subcommand.
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// How many recent tasks to list.
    #[arg(long, default_value_t = 3)]
    pub recent: usize,
}

/// Render the dashboard view.
pub fn run(desk: &Desk, args: &DashboardArgs) -> anyhow::Result<()> {
    let user = desk.current_user();
    println!("{} — {}", user.name, user.role.title_ar());
    println!();

    let stats = desk.dashboard_stats();
    println!("المهام: {}", stats.total_tasks);
    println!("قيد التنفيذ: {}", stats.in_progress);
    println!("مكتملة: {}", stats.completed);
    println!("متأخرة: {}", stats.delayed);
    println!("نسبة الإنجاز: {}%", stats.completion_pct);

    let pending = desk.pending_plans();
    if !pending.is_empty() {
        println!();
        println!("خطط بانتظار الاعتماد ({}):", pending.len());
        for plan in pending {
            println!("  {} — {} ({})", plan.id, plan.department, plan.coverage);
        }
    }

    let recent = desk.recent_tasks(args.recent);
    if !recent.is_empty() {
        println!();
        println!("أحدث المهام:");
        for task in recent {
            println!(
                "  {} — {} [{}] {}%",
                task.id,
                task.title,
                task.status.label_ar(),
                task.progress
            );
        }
    }

    Ok(())
}
