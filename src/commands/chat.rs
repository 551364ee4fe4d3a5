//! Donation assistant

use colored::Colorize;
use lifeflow::core::services::{ReplySource, reply};
use lifeflow::output::OutputMode;

use super::{Context, assistant};

/// Answer one question
pub fn chat(message: &str, ctx: &Context) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let backend = assistant(&config);
    let answer = reply(message, backend.as_ref());

    match ctx.mode {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&answer)?),
        OutputMode::Human => {
            let label = match answer.source {
                ReplySource::Faq => "faq".dimmed(),
                ReplySource::Model => "assistant".dimmed(),
                ReplySource::Fallback => "offline".yellow(),
            };
            println!("{} {}", label, answer.text);
        },
    }
    Ok(())
}
