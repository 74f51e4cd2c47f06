//! Mailroom - Terminal mailroom for donors and thank-you letters
//!
//! This library tracks donors and their donations in memory, writes
//! thank-you letters and produces a donor summary report. The binary wraps
//! it in an interactive menu plus a few one-shot commands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Diagnostic logging setup
//! - `models`: Core data models (donors, IDs, money)
//! - `registry`: In-memory donor registry
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `letters`: Letter rendering and bulk export
//! - `reports`: Donor summary report
//! - `cli`: Interactive menu and command handlers
//!
//! # Example
//!
//! ```rust
//! use mailroom::letters::format_thank_you_letter;
//! use mailroom::models::Money;
//!
//! let letter = format_thank_you_letter("Jane Doe", Money::parse("100.5").unwrap());
//! assert!(letter.contains("$100.50"));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod letters;
pub mod logging;
pub mod models;
pub mod registry;
pub mod reports;
pub mod services;

pub use error::{MailroomError, MailroomResult};
pub use registry::Registry;
