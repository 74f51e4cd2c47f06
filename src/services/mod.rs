//! Service layer for Mailroom
//!
//! The service layer provides business logic on top of the registry,
//! handling validation and audit logging.

pub mod donor;

pub use donor::DonorService;
