//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, Context};
use lifeflow::core::models::{Actor, BloodType, ResourceKind, Role};
use lifeflow::output::OutputMode;

/// lifeflow - Blood-donation coordination
#[derive(Parser, Debug)]
#[command(
    name = "lifeflow",
    version,
    about = "Blood-donation coordination: donor matching, inventory and alerts",
    long_about = "Keep a directory of donors, match requests and blood bag inventory.\n\n\
                  Requests are matched to the first compatible donor on record.\n\
                  Low stock and new matches raise notifications."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Data file (overrides the configured one)
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Acting role: donor, recipient, admin
    #[arg(long, global = true, default_value = "admin")]
    pub role: Role,

    /// Acting user's blood type (enables personal match alerts for donors)
    #[arg(long = "my-blood-type", global = true, value_name = "TYPE")]
    pub actor_blood_type: Option<BloodType>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a config and data file in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Seed the directory with demo donors, requests and bags
        #[arg(long)]
        demo: bool,
    },

    /// Show directory overview and stock levels
    Status,

    /// Manage donors (add, list, update, remove)
    Donor {
        #[command(subcommand)]
        action: DonorAction,
    },

    /// Manage match requests (submit, list)
    Request {
        #[command(subcommand)]
        action: RequestAction,
    },

    /// Show compatible donor types and the best match, without recording a request
    Match {
        /// Blood type needed (e.g. O+, AB-)
        blood_type: BloodType,
    },

    /// Manage blood bag inventory (add, list, dispatch)
    Bag {
        #[command(subcommand)]
        action: BagAction,
    },

    /// Manage the resource donation ledger (add, list)
    Resource {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Show or clear notifications
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationAction>,
    },

    /// Send a donor the dispatch alert
    Alert {
        /// Donor ID
        donor_id: String,
    },

    /// Send the urgent blood request e-mail
    Urgent {
        /// Recipient e-mail address
        #[arg(long)]
        to: String,

        /// Name to address the e-mail to
        #[arg(long = "name")]
        donor_name: String,
    },

    /// Ask the donation assistant a question
    Chat {
        /// The question
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Run the HTTP API server
    #[cfg(feature = "server")]
    Serve {
        /// Bind address (defaults to the configured one)
        #[arg(long)]
        host: Option<String>,

        /// Port (defaults to the configured one)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum DonorAction {
    /// Register a donor
    Add {
        /// Donor name
        name: String,

        /// Blood type
        #[arg(short, long = "blood-type")]
        blood_type: BloodType,

        /// Ten-digit contact number
        #[arg(short, long)]
        contact: String,

        /// Age (defaults to 18)
        #[arg(short, long)]
        age: Option<u32>,

        /// E-mail address
        #[arg(short, long)]
        email: Option<String>,
    },

    /// List donors
    List,

    /// Update a donor
    Update {
        /// Donor ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New age
        #[arg(long)]
        age: Option<u32>,

        /// New blood type
        #[arg(long = "blood-type")]
        blood_type: Option<BloodType>,

        /// New contact number
        #[arg(long)]
        contact: Option<String>,

        /// New e-mail address
        #[arg(long)]
        email: Option<String>,

        /// New last donation date (YYYY-MM-DD)
        #[arg(long = "last-donation")]
        last_donation: Option<chrono::NaiveDate>,
    },

    /// Remove a donor
    Remove {
        /// Donor ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum RequestAction {
    /// Submit a match request and show the matched donor
    Submit {
        /// Recipient name
        name: String,

        /// Blood type needed
        #[arg(short, long = "blood-type")]
        blood_type: BloodType,

        /// Recipient age
        #[arg(short, long)]
        age: Option<u32>,

        /// Contact number
        #[arg(short, long)]
        contact: Option<String>,

        /// E-mail address
        #[arg(short, long)]
        email: Option<String>,

        /// Medical condition
        #[arg(long)]
        condition: Option<String>,
    },

    /// List match requests
    List,
}

#[derive(Subcommand, Debug)]
pub enum BagAction {
    /// Take a unit into inventory
    Add {
        /// Blood type
        blood_type: BloodType,

        /// Volume label
        #[arg(long, default_value = "450ml")]
        volume: String,
    },

    /// List inventory
    List,

    /// Dispatch a unit (removes it for good)
    Dispatch {
        /// Bag ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// Record a donation of food, clothes or money
    Add {
        /// Kind: food, clothes, money
        kind: ResourceKind,

        /// Who donated
        #[arg(long = "from")]
        donor_name: String,

        /// What was donated
        #[arg(short, long)]
        details: String,

        /// Confirm the payment was received (required for money)
        #[arg(long)]
        verified: bool,
    },

    /// List the ledger
    List,
}

#[derive(Subcommand, Debug)]
pub enum NotificationAction {
    /// Show the feed and mark it read
    List,

    /// Run the low-stock and personal-match checks
    Check,

    /// Clear the feed
    Clear,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let ctx = Context {
        mode: output_mode,
        data: cli.data,
        actor: Actor {
            role: cli.role,
            blood_type: cli.actor_blood_type,
            name: None,
        },
    };

    match cli.command {
        Some(Command::Init { force, demo }) => commands::init(force, demo, &ctx),
        Some(Command::Status) => commands::status(&ctx),
        Some(Command::Donor { action }) => commands::donor_cmd(action, &ctx),
        Some(Command::Request { action }) => commands::request_cmd(action, &ctx),
        Some(Command::Match { blood_type }) => commands::match_lookup(blood_type, &ctx),
        Some(Command::Bag { action }) => commands::bag_cmd(action, &ctx),
        Some(Command::Resource { action }) => commands::resource_cmd(action, &ctx),
        Some(Command::Notifications { action }) => {
            commands::notifications_cmd(action.unwrap_or(NotificationAction::List), &ctx)
        },
        Some(Command::Alert { donor_id }) => commands::alert(&donor_id, &ctx),
        Some(Command::Urgent { to, donor_name }) => commands::urgent(&to, &donor_name, &ctx),
        Some(Command::Chat { message }) => commands::chat(&message.join(" "), &ctx),
        #[cfg(feature = "server")]
        Some(Command::Serve { host, port }) => commands::serve(host, port, &ctx),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("lifeflow v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("lifeflow v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'lifeflow --help' for usage");
                println!("Run 'lifeflow init --demo' to get started");
            }
            Ok(())
        },
    }
}
