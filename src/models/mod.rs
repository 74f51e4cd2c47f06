//! Core data models for Mailroom
//!
//! This module contains the data structures that represent the mailroom
//! domain: donors, their identifiers and donation amounts.

pub mod donor;
pub mod ids;
pub mod money;

pub use donor::{Donor, DonorValidationError};
pub use ids::{DonorId, DonorIdParseError};
pub use money::{Money, MoneyParseError};
