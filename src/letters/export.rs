//! Bulk letter export
//!
//! Writes a thank-you letter for every donor's most recent donation to
//! `<dir>/<full name>.txt`. A failed write is reported for that donor and the
//! export moves on to the next one. Names that would not make a single file
//! name inside `dir` (`a/b`, absolute paths) fail the same way.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use crate::audit::{AuditEntry, AuditLogger};
use crate::registry::Registry;

use super::template::LetterTemplate;

/// What happened to a single donor's letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterOutcome {
    /// Letter written
    Saved { name: String, path: PathBuf },
    /// Letter could not be written
    Failed {
        name: String,
        path: PathBuf,
        error: String,
    },
    /// Donor has no donations to thank them for
    Skipped { name: String },
}

impl LetterOutcome {
    /// Check if the letter was written
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

impl fmt::Display for LetterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved { name, path } => {
                write!(f, "Saved letter for {} to {}", name, path.display())
            }
            Self::Failed { name, path, .. } => write!(
                f,
                "Unable to save letter for {} to {}, please check the file path...",
                name,
                path.display()
            ),
            Self::Skipped { name } => {
                write!(f, "No donations on record for {}, skipping letter...", name)
            }
        }
    }
}

/// Path of the letter file for a donor, or `None` if the name would not
/// stay a single file inside `dir`
pub fn letter_path(dir: &Path, full_name: &str) -> Option<PathBuf> {
    let file_name = format!("{}.txt", full_name);
    let mut components = Path::new(&file_name).components();

    match (components.next(), components.next()) {
        (Some(Component::Normal(name)), None) if name == file_name.as_str() => {
            Some(dir.join(name))
        }
        _ => None,
    }
}

fn save_letter(path: &Path, letter: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(letter.as_bytes())?;
    writer.flush()
}

/// Write a letter for every donor in registry order
///
/// Nothing here aborts the run: each donor gets an outcome, and audit log
/// failures are only logged.
pub fn export_all_letters(
    registry: &Registry,
    template: &LetterTemplate,
    dir: &Path,
    audit: Option<&AuditLogger>,
) -> Vec<LetterOutcome> {
    if let Err(e) = fs::create_dir_all(dir) {
        tracing::warn!(dir = %dir.display(), error = %e, "could not create letters directory");
    }

    let mut outcomes = Vec::with_capacity(registry.len());

    for donor in registry.iter() {
        let Some(last) = donor.last_donation() else {
            tracing::warn!(donor = %donor.id, "no donations, skipping letter");
            outcomes.push(LetterOutcome::Skipped {
                name: donor.name.clone(),
            });
            continue;
        };

        let Some(path) = letter_path(dir, &donor.name) else {
            tracing::warn!(donor = %donor.id, "name is not a usable file name");
            outcomes.push(LetterOutcome::Failed {
                name: donor.name.clone(),
                path: dir.to_path_buf(),
                error: "donor name is not a valid file name".to_string(),
            });
            continue;
        };
        let letter = template.render(&donor.name, last);

        match save_letter(&path, &letter) {
            Ok(()) => {
                tracing::debug!(donor = %donor.id, path = %path.display(), "letter saved");
                if let Some(audit) = audit {
                    audit.log_or_warn(&AuditEntry::letter_saved(donor, last, &path));
                }
                outcomes.push(LetterOutcome::Saved {
                    name: donor.name.clone(),
                    path,
                });
            }
            Err(e) => {
                tracing::warn!(
                    donor = %donor.id,
                    path = %path.display(),
                    error = %e,
                    "letter write failed"
                );
                outcomes.push(LetterOutcome::Failed {
                    name: donor.name.clone(),
                    path,
                    error: e.to_string(),
                });
            }
        }
    }

    outcomes
}
