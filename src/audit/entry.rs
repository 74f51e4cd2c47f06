//! Audit entry data structures
//!
//! Defines the operations that are audited and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{Donor, DonorId, Money};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A donor was added to the registry
    Create,
    /// A donation was recorded for a donor
    Donation,
    /// A thank-you letter was written to disk
    Letter,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Donation => write!(f, "DONATION"),
            Operation::Letter => write!(f, "LETTER"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// ID of the affected donor
    pub donor_id: DonorId,

    /// Full name of the affected donor
    pub donor_name: String,

    /// Amount involved (donation recorded, or donation thanked for)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// Extra context, e.g. the letter path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, donor: &Donor) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            donor_id: donor.id,
            donor_name: donor.name.clone(),
            amount: None,
            detail: None,
        }
    }

    /// Entry for a newly created donor
    pub fn donor_created(donor: &Donor) -> Self {
        Self::new(Operation::Create, donor)
    }

    /// Entry for a donation appended to a donor's history
    pub fn donation_recorded(donor: &Donor, amount: Money) -> Self {
        Self {
            amount: Some(amount),
            detail: Some(format!("{} donation(s) on record", donor.count())),
            ..Self::new(Operation::Donation, donor)
        }
    }

    /// Entry for a letter saved to disk
    pub fn letter_saved(donor: &Donor, amount: Money, path: &Path) -> Self {
        Self {
            amount: Some(amount),
            detail: Some(path.display().to_string()),
            ..Self::new(Operation::Letter, donor)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.donor_id,
            self.donor_name
        );

        if let Some(amount) = self.amount {
            output.push_str(&format!(" {}", amount));
        }

        if let Some(detail) = &self.detail {
            output.push_str(&format!("\n  {}", detail));
        }

        output
    }
}
