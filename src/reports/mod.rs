//! Reports module for Mailroom
//!
//! Provides the donor summary report shown from the menu and the `report`
//! command.

pub mod donor_summary;

pub use donor_summary::{DonorSummaryReport, DonorSummaryRow};
