//! Notification feed commands

use lifeflow::output::{NotificationList, OperationResult, OutputMode, Render, warn_durability};

use super::Context;
use crate::cli::NotificationAction;

/// Handle notification subcommands
pub fn notifications_cmd(action: NotificationAction, ctx: &Context) -> anyhow::Result<()> {
    let (_, mut coordinator) = ctx.open()?;

    match action {
        NotificationAction::List => {
            let unread = coordinator.unread_count();
            let notifications = coordinator.notifications().to_vec();
            // Opening the feed marks it read
            warn_durability(&coordinator.mark_all_read().durability);
            NotificationList {
                notifications,
                unread,
            }
            .render(ctx.mode);
        },
        NotificationAction::Check => {
            let inventory = coordinator.check_inventory();
            warn_durability(&inventory.durability);
            let personal = coordinator.evaluate_personal_match(&ctx.actor);
            warn_durability(&personal.durability);

            let mut alerts = inventory.alerts;
            alerts.extend(personal.alerts);
            let unread = coordinator.unread_count();
            if ctx.mode == OutputMode::Human {
                println!("{} new alert(s)", alerts.len());
            }
            NotificationList {
                notifications: alerts,
                unread,
            }
            .render(ctx.mode);
        },
        NotificationAction::Clear => {
            let persisted = coordinator.clear_notifications();
            warn_durability(&persisted.durability);
            OperationResult {
                success: persisted.durability.is_saved(),
                message: format!("Cleared {} notification(s)", persisted.value),
            }
            .render(ctx.mode);
        },
    }

    Ok(())
}
