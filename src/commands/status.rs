//! Status command - show overview of the directory

use lifeflow::output::{Render, StatusReport};

use super::Context;

/// Show directory counts and stock levels
pub fn status(ctx: &Context) -> anyhow::Result<()> {
    let (_, coordinator) = ctx.open()?;
    let directory = coordinator.directory();

    StatusReport {
        donors: directory.donors().len(),
        requests: directory.recipients().len(),
        bags: directory.bags().len(),
        resources: directory.resources().len(),
        unread_notifications: coordinator.unread_count(),
        stock: directory.stock_levels(),
    }
    .render(ctx.mode);
    Ok(())
}
