//! # Plans Subcommand
//!
//! Annual plans grouped by year, with per-plan program rosters and the
//! year-wide program view.

use anyhow::Context;
use clap::Args;

use tadqiq_core::{Department, PlanId, PlanYear};
use tadqiq_desk::{Desk, NavSection, PlanFilter};
use tadqiq_state::PlanStatus;

/// Arguments for the plans subcommand.
#[derive(Args, Debug)]
pub struct PlansArgs {
    /// Keep only plans of this department.
    #[arg(long)]
    pub department: Option<String>,

    /// Keep only plans with this status (DRAFT, UNDER_REVIEW,
    /// APPROVED, REJECTED).
    #[arg(long)]
    pub status: Option<String>,

    /// Show the program roster of one plan.
    #[arg(long)]
    pub plan: Option<String>,

    /// Show every program of one year across all its plans.
    #[arg(long)]
    pub year: Option<u16>,
}

fn parse_status(s: &str) -> anyhow::Result<PlanStatus> {
    match s {
        "DRAFT" => Ok(PlanStatus::Draft),
        "UNDER_REVIEW" => Ok(PlanStatus::UnderReview),
        "APPROVED" => Ok(PlanStatus::Approved),
        "REJECTED" => Ok(PlanStatus::Rejected),
        other => anyhow::bail!("unknown plan status: {other}"),
    }
}

/// Render the annual-plan view.
pub fn run(desk: &mut Desk, args: &PlansArgs) -> anyhow::Result<()> {
    desk.open_section(NavSection::AnnualPlan)
        .context("annual plans are not available to this role")?;

    if let Some(plan_id) = &args.plan {
        return render_roster(desk, &PlanId::new(plan_id.as_str()));
    }
    if let Some(year) = args.year {
        return render_year_programs(desk, PlanYear(year));
    }

    let filter = PlanFilter {
        status: args.status.as_deref().map(parse_status).transpose()?,
        department: args.department.as_deref().map(Department::new),
    };

    for (year, plans) in desk.plans_by_year(&filter) {
        println!("خطة عام {year}هـ — إجمالي المهام: {}", desk.year_tasks_total(year));
        for plan in plans {
            println!(
                "  {} — {} [{}] {} مهمة — {}",
                plan.id,
                plan.department,
                plan.status.label_ar(),
                plan.tasks_count,
                plan.coverage
            );
        }
    }
    Ok(())
}

fn render_roster(desk: &Desk, plan_id: &PlanId) -> anyhow::Result<()> {
    let plan = desk.plan(plan_id)?;
    let title = plan.title.as_deref().unwrap_or(plan.id.as_str());
    println!("{title} [{}] — {}", plan.status.label_ar(), plan.department);
    for program in desk.programs_for_plan(plan_id) {
        println!(
            "  {} — {} ({} / {} / الأولوية: {})",
            program.id,
            program.title,
            program.quarter,
            program.duration,
            program.priority.label_ar()
        );
    }
    Ok(())
}

fn render_year_programs(desk: &Desk, year: PlanYear) -> anyhow::Result<()> {
    println!("برامج خطة عام {year}هـ:");
    for program in desk.programs_for_year(year) {
        println!("  {} — {} ({})", program.id, program.title, program.quarter);
    }
    Ok(())
}
