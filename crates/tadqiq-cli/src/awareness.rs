//! # Awareness Subcommand
//!
//! The awareness center: the sent-message list and AI-assisted
//! drafting. With `API_KEY` set in the environment the draft comes
//! from the live generative-text API; otherwise the deterministic
//! offline assistant answers.

use anyhow::Context;
use clap::Args;

use tadqiq_assist::{AssistService, GeminiClient, MockAssistant};
use tadqiq_core::PlanDate;
use tadqiq_desk::{Desk, NavSection};
use tadqiq_state::Audience;

/// Arguments for the awareness subcommand.
#[derive(Args, Debug)]
pub struct AwarenessArgs {
    /// Draft a message about this topic and add it to the desk.
    #[arg(long)]
    pub suggest: Option<String>,
}

/// Render the awareness center, optionally drafting a new message.
pub fn run(desk: &mut Desk, args: &AwarenessArgs) -> anyhow::Result<()> {
    desk.open_section(NavSection::Awareness)
        .context("the awareness center is not available to this role")?;

    if let Some(topic) = &args.suggest {
        let body = draft(topic)?;
        println!("{body}");
        println!();
        let id = desk.draft_awareness_message(
            topic.clone(),
            body,
            Audience::AllStaff,
            PlanDate::today(),
        )?;
        println!("تمت إضافة المسودة: {id}");
        println!();
    }

    println!("أحدث الرسائل:");
    for message in desk.awareness_messages() {
        let state = if message.sent { "تم الإرسال" } else { "مسودة" };
        println!(
            "  {} — {} [{state}] — {} — {}",
            message.id,
            message.title,
            message.audience.label_ar(),
            message.publish_date
        );
    }
    Ok(())
}

/// Run one suggestion call on a local runtime.
fn draft(topic: &str) -> anyhow::Result<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the assist runtime")?;

    let suggestion = match std::env::var("API_KEY") {
        Ok(api_key) => {
            let service = AssistService::new(GeminiClient::new(api_key));
            runtime.block_on(service.suggest_awareness_message(topic))
        }
        Err(_) => {
            let service = AssistService::new(MockAssistant::default());
            runtime.block_on(service.suggest_awareness_message(topic))
        }
    };
    Ok(suggestion)
}
