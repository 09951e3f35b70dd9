//! # Docs Subcommand
//!
//! Document-request tracking: search by title or reference code,
//! narrowed by status.

use clap::Args;

use tadqiq_desk::{Desk, NavSection};
use tadqiq_state::DocRequestStatus;

/// Arguments for the docs subcommand.
#[derive(Args, Debug)]
pub struct DocsArgs {
    /// Search term over titles and reference codes.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Keep only requests with this status (SENT, IN_PROGRESS, RECEIVED).
    #[arg(long)]
    pub status: Option<String>,
}

fn parse_status(s: &str) -> anyhow::Result<DocRequestStatus> {
    match s {
        "SENT" => Ok(DocRequestStatus::Sent),
        "IN_PROGRESS" => Ok(DocRequestStatus::InProgress),
        "RECEIVED" => Ok(DocRequestStatus::Received),
        other => anyhow::bail!("unknown document request status: {other}"),
    }
}

/// Render the document-requests view.
pub fn run(desk: &Desk, args: &DocsArgs) -> anyhow::Result<()> {
    // Probe access without mutating navigation; the view itself is
    // read-only.
    if !NavSection::DocRequests.admits(desk.current_user().role) {
        anyhow::bail!("document requests are not available to this role");
    }

    let status = args.status.as_deref().map(parse_status).transpose()?;
    let requests = desk
        .search_doc_requests(&args.search, status)
        .into_iter()
        .collect::<Vec<_>>();

    if requests.is_empty() {
        println!("لا توجد طلبات مستندات مطابقة.");
        return Ok(());
    }
    for request in requests {
        println!(
            "{} — {} [{}] — المهمة {} — الاستحقاق {}",
            request.id,
            request.title,
            request.status.label_ar(),
            request.task_id,
            request.due_date
        );
    }
    Ok(())
}
