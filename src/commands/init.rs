//! Initialize lifeflow in a directory

use std::path::Path;

use chrono::NaiveDate;

use lifeflow::adapters::JsonFileStore;
use lifeflow::config::Config;
use lifeflow::core::models::{BloodBagUnit, BloodType, Donor, Recipient, Snapshot};
use lifeflow::output::{OperationResult, Render};
use lifeflow::paths;

use super::Context;

/// Write a project config and an empty (or demo) data file
pub fn init(force: bool, demo: bool, ctx: &Context) -> anyhow::Result<()> {
    let config_path = paths::project_config();
    if config_path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to reinitialize.",
                paths::PROJECT_CONFIG
            ),
        }
        .render(ctx.mode);
        return Ok(());
    }

    let mut config = Config::default();
    if let Some(data) = &ctx.data {
        config.storage.data_file.clone_from(data);
    }
    config.save_to(&config_path)?;

    let data_path = config.storage.data_file.clone();
    if data_path.exists() && !force {
        log::info!("Keeping existing data file {}", data_path.display());
    } else {
        let snapshot = if demo { demo_snapshot() } else { Snapshot::default() };
        JsonFileStore::new(&data_path).replace_all(&snapshot)?;
    }

    OperationResult {
        success: true,
        message: init_message(&config_path, &data_path, demo),
    }
    .render(ctx.mode);
    Ok(())
}

fn init_message(config: &Path, data: &Path, demo: bool) -> String {
    let seeded = if demo { " (seeded with demo data)" } else { "" };
    format!(
        "Created {}\nCreated {}{seeded}\n\nNext steps:\n  lifeflow donor add <name> -b O+ -c 9870000101\n  lifeflow request submit <name> -b O+",
        config.display(),
        data.display()
    )
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn demo_donor(id: u32, name: &str, age: u32, blood_type: BloodType, contact: &str, last: NaiveDate) -> Donor {
    Donor {
        id: format!("DNR-{id}"),
        name: name.to_string(),
        age,
        blood_type,
        contact: contact.to_string(),
        email: None,
        last_donation: last,
    }
}

fn demo_recipient(
    id: u32,
    name: &str,
    age: u32,
    blood_type: BloodType,
    contact: &str,
    condition: &str,
) -> Recipient {
    Recipient {
        id: format!("REQ-{id}"),
        name: name.to_string(),
        age,
        blood_type,
        contact: contact.to_string(),
        email: None,
        condition: condition.to_string(),
    }
}

fn demo_bag(id: u32, blood_type: BloodType, donated: NaiveDate, expires: NaiveDate) -> BloodBagUnit {
    BloodBagUnit {
        id: format!("BAG-{id}"),
        blood_type,
        volume: "450ml".to_string(),
        donation_date: donated,
        expiry_date: expires,
    }
}

/// The demo directory
#[must_use]
pub fn demo_snapshot() -> Snapshot {
    Snapshot {
        donors: vec![
            demo_donor(1, "Vaghu", 24, BloodType::OPos, "9870000101", date(2024, 2, 15)),
            demo_donor(2, "Aayan", 22, BloodType::BNeg, "9870000102", date(2024, 3, 1)),
            demo_donor(3, "Akash", 25, BloodType::AbPos, "9870000103", date(2024, 1, 20)),
            demo_donor(4, "Shreyash", 23, BloodType::OPos, "9870000104", date(2024, 3, 10)),
        ],
        recipients: vec![
            demo_recipient(1, "Sahil Mane", 29, BloodType::OPos, "9988776655", "Surgery Recovery"),
            demo_recipient(2, "Priya Patil", 34, BloodType::AbPos, "9988776644", "Anemia Treatment"),
        ],
        bags: vec![
            demo_bag(1, BloodType::OPos, date(2024, 3, 12), date(2024, 4, 23)),
            demo_bag(2, BloodType::BNeg, date(2024, 3, 5), date(2024, 4, 16)),
            demo_bag(3, BloodType::AbPos, date(2024, 1, 25), date(2024, 3, 8)),
        ],
        ..Snapshot::default()
    }
}
