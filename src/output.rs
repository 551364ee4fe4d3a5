//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::collections::BTreeMap;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{
    AppNotification, BloodBagUnit, BloodType, Donor, Recipient, ResourceDonation,
};
use crate::core::services::{Durability, LOW_STOCK_THRESHOLD};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A command result that can be printed in either mode
pub trait Render: Serialize {
    /// Print for a person
    fn render_human(&self);

    /// Print as pretty JSON
    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }

    /// Render the result based on output mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }
}

/// Blood type highlighted for terminal output
#[must_use]
pub fn badge(blood_type: BloodType) -> ColoredString {
    blood_type.as_str().red().bold()
}

/// Print the unsaved-change warning, if any
pub fn warn_durability(durability: &Durability) {
    if let Some(warning) = durability.warning() {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }
}

// =============================================================================
// LISTS
// =============================================================================

/// Donor listing
#[derive(Debug, Serialize)]
pub struct DonorList {
    /// Donors, newest first
    pub donors: Vec<Donor>,
}

impl Render for DonorList {
    fn render_human(&self) {
        if self.donors.is_empty() {
            println!("No donors registered.");
            return;
        }
        for d in &self.donors {
            println!(
                "  [{}] {} {} age {}, {} (last donation {})",
                d.id.dimmed(),
                badge(d.blood_type),
                d.name.bold(),
                d.age,
                d.contact,
                d.last_donation
            );
        }
    }
}

/// Match request listing
#[derive(Debug, Serialize)]
pub struct RequestList {
    /// Requests, newest first
    pub recipients: Vec<Recipient>,
}

impl Render for RequestList {
    fn render_human(&self) {
        if self.recipients.is_empty() {
            println!("No match requests.");
            return;
        }
        for r in &self.recipients {
            println!(
                "  [{}] {} {} age {}, {} ({})",
                r.id.dimmed(),
                badge(r.blood_type),
                r.name.bold(),
                r.age,
                r.condition,
                r.contact
            );
        }
    }
}

/// Inventory listing
#[derive(Debug, Serialize)]
pub struct BagList {
    /// Units, newest first
    pub bags: Vec<BloodBagUnit>,
}

impl Render for BagList {
    fn render_human(&self) {
        if self.bags.is_empty() {
            println!("Inventory is empty.");
            return;
        }
        for b in &self.bags {
            println!(
                "  [{}] {} {} donated {}, expires {}",
                b.id.dimmed(),
                badge(b.blood_type),
                b.volume,
                b.donation_date,
                b.expiry_date
            );
        }
    }
}

/// Resource ledger listing
#[derive(Debug, Serialize)]
pub struct ResourceList {
    /// Entries, newest first
    pub resources: Vec<ResourceDonation>,
}

impl Render for ResourceList {
    fn render_human(&self) {
        if self.resources.is_empty() {
            println!("No resource donations recorded.");
            return;
        }
        for r in &self.resources {
            println!(
                "  [{}] {} from {}: {} ({})",
                r.id.dimmed(),
                r.kind.to_string().cyan(),
                r.donor_name.bold(),
                r.details,
                r.date
            );
        }
    }
}

/// Notification feed listing
#[derive(Debug, Serialize)]
pub struct NotificationList {
    /// Notifications, newest first
    pub notifications: Vec<AppNotification>,
    /// Unread count before the feed was opened
    pub unread: usize,
}

impl Render for NotificationList {
    fn render_human(&self) {
        if self.notifications.is_empty() {
            println!("No notifications.");
            return;
        }
        println!("{} unread\n", self.unread);
        for n in &self.notifications {
            let marker = if n.read { " ".normal() } else { "*".yellow().bold() };
            println!("{marker} {} [{}] {}", n.timestamp.dimmed(), n.category, n.title.bold());
            println!("    {}", n.message);
        }
    }
}

// =============================================================================
// REPORTS
// =============================================================================

/// Directory overview
#[derive(Debug, Serialize)]
pub struct StatusReport {
    /// Registered donors
    pub donors: usize,
    /// Match requests
    pub requests: usize,
    /// Units in inventory
    pub bags: usize,
    /// Resource ledger entries
    pub resources: usize,
    /// Unread notifications
    pub unread_notifications: usize,
    /// Units per blood type
    pub stock: BTreeMap<BloodType, usize>,
}

impl Render for StatusReport {
    fn render_human(&self) {
        println!("Donors:    {}", self.donors);
        println!("Requests:  {}", self.requests);
        println!("Resources: {}", self.resources);
        println!("Unread:    {}", self.unread_notifications);
        println!();
        println!("Inventory: {} unit(s)", self.bags);
        for (blood_type, count) in &self.stock {
            let count_str = if *count <= LOW_STOCK_THRESHOLD {
                count.to_string().red().bold()
            } else {
                count.to_string().green()
            };
            println!("  {:<4} {count_str}", blood_type.as_str());
        }
    }
}

/// Match lookup or request outcome
#[derive(Debug, Serialize)]
pub struct MatchReport {
    /// Blood type needed
    pub blood_type: BloodType,
    /// Donor types considered
    pub donor_types: Vec<BloodType>,
    /// Stored request, when one was submitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Recipient>,
    /// First compatible donor, if any
    pub matched: Option<Donor>,
    /// Whether the request was saved
    pub saved: bool,
}

impl Render for MatchReport {
    fn render_human(&self) {
        if let Some(request) = &self.request {
            println!("Request {} stored for {}", request.id, request.name.bold());
        }
        let types: Vec<&str> = self.donor_types.iter().map(|t| t.as_str()).collect();
        println!("{} accepts: {}", badge(self.blood_type), types.join(", "));
        match &self.matched {
            Some(d) => println!(
                "{} {} ({}) - contact {}",
                "Match:".green().bold(),
                d.name.bold(),
                badge(d.blood_type),
                d.contact
            ),
            None => println!("{}", "No compatible donor available.".yellow()),
        }
    }
}

/// A single record created or changed
#[derive(Debug, Serialize)]
pub struct RecordResult<T> {
    /// Human-readable summary
    pub message: String,
    /// The record
    pub record: T,
    /// Whether the change was saved
    pub saved: bool,
    /// Notifications raised by the change
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<AppNotification>,
}

impl<T: Serialize> Render for RecordResult<T> {
    fn render_human(&self) {
        println!("{}", self.message);
        for alert in &self.alerts {
            println!("  {} {}", "alert:".yellow().bold(), alert.title);
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl Render for OperationResult {
    fn render_human(&self) {
        println!("{}", self.message);
    }
}
