//! Blood bag inventory commands

use lifeflow::output::{BagList, RecordResult, Render, warn_durability};

use super::Context;
use crate::cli::BagAction;

/// Handle bag subcommands
pub fn bag_cmd(action: BagAction, ctx: &Context) -> anyhow::Result<()> {
    let (_, mut coordinator) = ctx.open()?;

    match action {
        BagAction::Add { blood_type, volume } => {
            let persisted = coordinator.intake_blood_bag(blood_type, &volume);
            warn_durability(&persisted.durability);
            let bag = persisted.value;
            RecordResult {
                message: format!(
                    "Took {} ({} {}) into inventory, expires {}",
                    bag.id, bag.blood_type, bag.volume, bag.expiry_date
                ),
                saved: persisted.durability.is_saved(),
                alerts: persisted.alerts,
                record: bag,
            }
            .render(ctx.mode);
        },
        BagAction::List => {
            BagList {
                bags: coordinator.directory().bags().to_vec(),
            }
            .render(ctx.mode);
        },
        BagAction::Dispatch { id } => {
            let Some(persisted) = coordinator.dispatch_blood_bag(&id).applied() else {
                anyhow::bail!("Blood bag '{id}' not found");
            };
            warn_durability(&persisted.durability);
            RecordResult {
                message: format!("Dispatched {} ({})", persisted.value.id, persisted.value.blood_type),
                saved: persisted.durability.is_saved(),
                alerts: persisted.alerts,
                record: persisted.value,
            }
            .render(ctx.mode);
        },
    }

    Ok(())
}
