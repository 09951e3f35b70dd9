//! # Regulatory Subcommand
//!
//! Correspondence with external oversight bodies: the notification
//! registry and its search.

use clap::Args;

use tadqiq_desk::{Desk, NavSection};

/// Arguments for the regulatory subcommand.
#[derive(Args, Debug)]
pub struct RegulatoryArgs {
    /// Search term over sender entities and topics.
    #[arg(long, default_value = "")]
    pub search: String,
}

/// Render the regulatory-entities view.
pub fn run(desk: &Desk, args: &RegulatoryArgs) -> anyhow::Result<()> {
    if !NavSection::RegulatoryEntities.admits(desk.current_user().role) {
        anyhow::bail!("regulatory correspondence is not available to this role");
    }

    let requests = desk.search_regulatory(&args.search);
    if requests.is_empty() {
        println!("لا توجد بلاغات مطابقة.");
        return Ok(());
    }
    for request in requests {
        println!(
            "{} — {} — {} [{}] — {}",
            request.reference,
            request.sender_entity,
            request.main_topic,
            request.status.label_ar(),
            request.date
        );
        for record in &request.actions {
            println!("    {} — {}", record.timestamp, record.action.confirmation_ar());
        }
    }
    Ok(())
}
