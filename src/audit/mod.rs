//! Audit logging for Mailroom
//!
//! Records donor creations, recorded donations and saved letters in an
//! append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single audit record with timestamp, operation and the
//!   donor it concerns.
//! - `AuditLogger`: writes entries to the audit log file using a
//!   line-delimited JSON format (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use mailroom::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::donor_created(&donor))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
