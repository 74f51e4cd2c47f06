//! Donor identifiers
//!
//! Donor IDs are sequence numbers assigned by the registry and rendered as
//! `donor_<n>`. Wrapping them in a newtype keeps them from being confused with
//! counts or indexes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DISPLAY_PREFIX: &str = "donor_";

/// Identifier of a donor within the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DonorId(u32);

impl DonorId {
    /// Create an ID from its sequence number
    pub const fn new(sequence: u32) -> Self {
        Self(sequence)
    }

    /// Get the sequence number
    pub const fn sequence(&self) -> u32 {
        self.0
    }

    /// Parse an ID from its `donor_<n>` form (a bare number is accepted too)
    pub fn parse(s: &str) -> Result<Self, DonorIdParseError> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(DISPLAY_PREFIX).unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| DonorIdParseError(s.to_string()))
    }
}

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

impl FromStr for DonorId {
    type Err = DonorIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DonorId {
    type Error = DonorIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DonorId> for String {
    fn from(id: DonorId) -> Self {
        id.to_string()
    }
}

/// Error returned when a string is not a valid donor ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorIdParseError(String);

impl fmt::Display for DonorIdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid donor ID: {}", self.0)
    }
}

impl std::error::Error for DonorIdParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(DonorId::new(3).to_string(), "donor_3");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!(DonorId::parse("donor_12").unwrap(), DonorId::new(12));
        assert_eq!(DonorId::parse("7").unwrap(), DonorId::new(7));
        assert!(DonorId::parse("donor_").is_err());
        assert!(DonorId::parse("someone").is_err());
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = DonorId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"donor_5\"");

        let deserialized: DonorId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
