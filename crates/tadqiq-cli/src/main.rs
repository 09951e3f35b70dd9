//! # tadqiq CLI Entry Point
//!
//! Assembles subcommands, selects the acting persona, and dispatches to
//! handler modules over a freshly seeded desk.

use clap::Parser;

use tadqiq_core::UserRole;
use tadqiq_desk::seed;

/// Tadqiq — internal-audit management desk.
///
/// Renders the audit dashboard's views in the terminal: annual plans,
/// task oversight, document requests, regulatory correspondence, and
/// the awareness center, each scoped to the acting role.
#[derive(Parser, Debug)]
#[command(name = "tadqiq", version, about)]
struct Cli {
    /// Acting role (GENERAL_DIRECTOR, DEPT_MANAGER, AUDITOR,
    /// DATA_ENTRY, LIAISON_OFFICER, SYSTEM_ADMIN).
    #[arg(long, global = true, default_value = "GENERAL_DIRECTOR")]
    role: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Stat tiles, pending plans, and recent tasks.
    Dashboard(tadqiq_cli::dashboard::DashboardArgs),
    /// Annual plans grouped by year, with program rosters.
    Plans(tadqiq_cli::plans::PlansArgs),
    /// Task oversight and task details.
    Tasks(tadqiq_cli::tasks::TasksArgs),
    /// Document-request tracking and search.
    Docs(tadqiq_cli::docs::DocsArgs),
    /// Regulatory-entity correspondence.
    Regulatory(tadqiq_cli::regulatory::RegulatoryArgs),
    /// Employee-voice reports.
    Voice(tadqiq_cli::voice::VoiceArgs),
    /// Awareness center, with optional AI drafting.
    Awareness(tadqiq_cli::awareness::AwarenessArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let role: UserRole = cli.role.parse()?;
    let mut desk = seed::seeded_desk();
    desk.switch_role(role);
    tracing::debug!(role = %role, "desk seeded");

    match cli.command {
        Commands::Dashboard(args) => tadqiq_cli::dashboard::run(&desk, &args),
        Commands::Plans(args) => tadqiq_cli::plans::run(&mut desk, &args),
        Commands::Tasks(args) => tadqiq_cli::tasks::run(&mut desk, &args),
        Commands::Docs(args) => tadqiq_cli::docs::run(&desk, &args),
        Commands::Regulatory(args) => tadqiq_cli::regulatory::run(&desk, &args),
        Commands::Voice(args) => tadqiq_cli::voice::run(&desk, &args),
        Commands::Awareness(args) => tadqiq_cli::awareness::run(&mut desk, &args),
    }
}
