//! Outbound messaging commands

use lifeflow::core::models::Outcome;
use lifeflow::output::{OperationResult, Render};

use super::Context;

/// Send a donor the dispatch alert
pub fn alert(donor_id: &str, ctx: &Context) -> anyhow::Result<()> {
    let (_, coordinator) = ctx.open()?;
    match coordinator.notify_donor(donor_id)? {
        Outcome::Applied(message) => {
            OperationResult {
                success: true,
                message,
            }
            .render(ctx.mode);
            Ok(())
        },
        Outcome::NotFound => anyhow::bail!("Donor '{donor_id}' not found"),
    }
}

/// Send the urgent blood request e-mail
pub fn urgent(to: &str, donor_name: &str, ctx: &Context) -> anyhow::Result<()> {
    let (_, coordinator) = ctx.open()?;
    let message = coordinator.send_urgent_request(to, donor_name)?;
    OperationResult {
        success: true,
        message: format!("Urgent request sent to {}", message.to),
    }
    .render(ctx.mode);
    Ok(())
}
