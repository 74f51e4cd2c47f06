//! Donor model
//!
//! A donor is a named person with an append-only history of donations. The
//! order of the history is the order the donations were recorded in.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DonorId;
use super::money::Money;

/// A donor and their donation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    /// Registry-assigned identifier
    pub id: DonorId,

    /// Full name, unique within the registry
    pub name: String,

    /// Donations in the order they were received
    #[serde(default)]
    pub donations: Vec<Money>,
}

impl Donor {
    /// Create a donor with an empty history
    pub fn new(id: DonorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            donations: Vec::new(),
        }
    }

    /// Create a donor with an existing history
    pub fn with_donations(id: DonorId, name: impl Into<String>, donations: Vec<Money>) -> Self {
        Self {
            id,
            name: name.into(),
            donations,
        }
    }

    /// Append a donation to the history
    pub fn add_donation(&mut self, amount: Money) {
        self.donations.push(amount);
    }

    /// Sum of all donations
    pub fn total(&self) -> Money {
        self.donations.iter().sum()
    }

    /// Number of donations
    pub fn count(&self) -> usize {
        self.donations.len()
    }

    /// Average donation; zero when there are no donations
    pub fn average(&self) -> Money {
        self.total().average(self.count())
    }

    /// The most recent donation, if any
    pub fn last_donation(&self) -> Option<Money> {
        self.donations.last().copied()
    }

    /// Check if this donor has exactly the given full name
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Validate a full name before it is used for a new donor
    pub fn validate_name(name: &str) -> Result<(), DonorValidationError> {
        if name.trim().is_empty() {
            return Err(DonorValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for Donor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for donors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonorValidationError {
    EmptyName,
}

impl fmt::Display for DonorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Donor name cannot be empty"),
        }
    }
}

impl std::error::Error for DonorValidationError {}
