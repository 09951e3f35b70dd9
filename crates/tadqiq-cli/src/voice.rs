//! # Voice Subcommand
//!
//! Employee-voice reports: titles, handling status, and the identity
//! badge.

use clap::Args;

use tadqiq_desk::Desk;

/// Arguments for the voice subcommand.
#[derive(Args, Debug)]
pub struct VoiceArgs {}

/// Render the employee-voice view.
pub fn run(desk: &Desk, _args: &VoiceArgs) -> anyhow::Result<()> {
    let reports = desk.voice_reports();
    if reports.is_empty() {
        println!("لا توجد بلاغات موظفين.");
        return Ok(());
    }
    for report in reports {
        println!(
            "{} — {} [{}] — {} — {}",
            report.id,
            report.title,
            report.status.label_ar(),
            report.identity_label_ar(),
            report.date
        );
    }
    Ok(())
}
