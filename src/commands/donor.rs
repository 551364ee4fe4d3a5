//! Donor commands

use std::io::{self, BufRead as _, Write as _};

use lifeflow::core::models::{DonorUpdate, NewDonor, Outcome};
use lifeflow::output::{DonorList, OutputMode, RecordResult, Render, warn_durability};

use super::Context;
use crate::cli::DonorAction;

/// Handle donor subcommands
pub fn donor_cmd(action: DonorAction, ctx: &Context) -> anyhow::Result<()> {
    match action {
        DonorAction::Add {
            name,
            blood_type,
            contact,
            age,
            email,
        } => add(
            NewDonor {
                name,
                age,
                blood_type,
                contact,
                email,
            },
            ctx,
        ),
        DonorAction::List => list(ctx),
        DonorAction::Update {
            id,
            name,
            age,
            blood_type,
            contact,
            email,
            last_donation,
        } => update(
            &id,
            DonorUpdate {
                name,
                age,
                blood_type,
                contact,
                email,
                last_donation,
            },
            ctx,
        ),
        DonorAction::Remove { id, yes } => remove(&id, yes, ctx),
    }
}

fn add(input: NewDonor, ctx: &Context) -> anyhow::Result<()> {
    let (_, mut coordinator) = ctx.open()?;
    let persisted = coordinator.register_donor(input)?;
    warn_durability(&persisted.durability);

    let donor = persisted.value;
    RecordResult {
        message: format!("Registered {} as {} ({})", donor.name, donor.id, donor.blood_type),
        saved: persisted.durability.is_saved(),
        alerts: persisted.alerts,
        record: donor,
    }
    .render(ctx.mode);
    Ok(())
}

fn list(ctx: &Context) -> anyhow::Result<()> {
    let (_, coordinator) = ctx.open()?;
    DonorList {
        donors: coordinator.directory().donors().to_vec(),
    }
    .render(ctx.mode);
    Ok(())
}

fn update(id: &str, update: DonorUpdate, ctx: &Context) -> anyhow::Result<()> {
    if update.is_empty() {
        anyhow::bail!("Nothing to update. Pass at least one field, e.g. --contact");
    }

    let (_, mut coordinator) = ctx.open()?;
    match coordinator.update_donor(id, update)? {
        Outcome::Applied(persisted) => {
            warn_durability(&persisted.durability);
            RecordResult {
                message: format!("Updated {id}"),
                saved: persisted.durability.is_saved(),
                alerts: persisted.alerts,
                record: persisted.value,
            }
            .render(ctx.mode);
            Ok(())
        },
        Outcome::NotFound => anyhow::bail!("Donor '{id}' not found"),
    }
}

fn remove(id: &str, yes: bool, ctx: &Context) -> anyhow::Result<()> {
    let (_, mut coordinator) = ctx.open()?;
    let Some(donor) = coordinator.directory().donor(id) else {
        anyhow::bail!("Donor '{id}' not found");
    };

    if !yes {
        if ctx.mode == OutputMode::Json {
            anyhow::bail!("Refusing to remove {id} without --yes");
        }
        print!("Remove {} ({})? [y/N] ", donor.name, donor.id);
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    match coordinator.remove_donor(id) {
        Outcome::Applied(persisted) => {
            warn_durability(&persisted.durability);
            RecordResult {
                message: format!("Removed {} ({})", persisted.value.name, persisted.value.id),
                saved: persisted.durability.is_saved(),
                alerts: persisted.alerts,
                record: persisted.value,
            }
            .render(ctx.mode);
            Ok(())
        },
        Outcome::NotFound => anyhow::bail!("Donor '{id}' not found"),
    }
}
