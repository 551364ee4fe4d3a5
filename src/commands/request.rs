//! Match request commands

use lifeflow::core::models::{BloodType, NewMatchRequest};
use lifeflow::core::services::compatible_donor_types;
use lifeflow::output::{MatchReport, RequestList, Render, warn_durability};

use super::Context;
use crate::cli::RequestAction;

/// Handle request subcommands
pub fn request_cmd(action: RequestAction, ctx: &Context) -> anyhow::Result<()> {
    match action {
        RequestAction::Submit {
            name,
            blood_type,
            age,
            contact,
            email,
            condition,
        } => submit(
            NewMatchRequest {
                name,
                blood_type,
                age,
                contact,
                email,
                condition,
            },
            ctx,
        ),
        RequestAction::List => {
            let (_, coordinator) = ctx.open()?;
            RequestList {
                recipients: coordinator.directory().recipients().to_vec(),
            }
            .render(ctx.mode);
            Ok(())
        },
    }
}

fn submit(input: NewMatchRequest, ctx: &Context) -> anyhow::Result<()> {
    let (_, mut coordinator) = ctx.open()?;
    let persisted = coordinator.submit_match_request(input, Some(&ctx.actor))?;
    warn_durability(&persisted.durability);

    let outcome = persisted.value;
    let blood_type = outcome.request.blood_type;
    MatchReport {
        blood_type,
        donor_types: compatible_donor_types(blood_type).to_vec(),
        request: Some(outcome.request),
        matched: outcome.matched,
        saved: persisted.durability.is_saved(),
    }
    .render(ctx.mode);
    Ok(())
}

/// Show compatible types and the current best match without storing anything
pub fn match_lookup(blood_type: BloodType, ctx: &Context) -> anyhow::Result<()> {
    let (_, coordinator) = ctx.open()?;
    MatchReport {
        blood_type,
        donor_types: compatible_donor_types(blood_type).to_vec(),
        request: None,
        matched: coordinator.find_match(blood_type).cloned(),
        saved: true,
    }
    .render(ctx.mode);
    Ok(())
}
