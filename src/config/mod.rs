//! Configuration module for Mailroom
//!
//! This module provides configuration management including:
//! - Data directory resolution (`MAILROOM_DATA_DIR`, XDG, APPDATA)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MailroomPaths;
pub use settings::Settings;
