//! Non-interactive command handlers
//!
//! Each handler works on a fresh seed registry, the same one the interactive
//! menu starts from.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::audit::AuditLogger;
use crate::config::{MailroomPaths, Settings};
use crate::error::{MailroomError, MailroomResult};
use crate::letters::{export_all_letters, LetterTemplate};
use crate::registry::Registry;
use crate::reports::DonorSummaryReport;

/// Print the donor summary, optionally exporting it as CSV too
pub fn handle_report_command(registry: &Registry, csv: Option<PathBuf>) -> MailroomResult<()> {
    let report = DonorSummaryReport::generate(registry);
    print!("{}", report.format_terminal());

    if let Some(path) = csv {
        export_report_csv(&report, &path)?;
        println!();
        println!("Report exported to: {}", path.display());
    }

    Ok(())
}

fn export_report_csv(report: &DonorSummaryReport, path: &Path) -> MailroomResult<()> {
    let file = File::create(path).map_err(|e| {
        MailroomError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    report.export_csv(BufWriter::new(file))
}

/// Write a letter for every donor
pub fn handle_thank_all_command(
    registry: &Registry,
    settings: &Settings,
    paths: &MailroomPaths,
    letters_dir: Option<PathBuf>,
) -> MailroomResult<()> {
    let dir = settings.resolve_letters_dir(letters_dir);
    let audit = settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()));

    let outcomes = export_all_letters(
        registry,
        &LetterTemplate::from_settings(settings),
        &dir,
        audit.as_ref(),
    );

    for outcome in &outcomes {
        println!("{}", outcome);
    }

    let saved = outcomes.iter().filter(|o| o.is_saved()).count();
    println!();
    println!("{} of {} letters saved to {}", saved, outcomes.len(), dir.display());
    Ok(())
}

/// Show the most recent audit log entries
pub fn handle_history_command(
    settings: &Settings,
    paths: &MailroomPaths,
    limit: usize,
) -> MailroomResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries found.");
        if !settings.audit_enabled {
            println!(
                "Audit logging is disabled; set \"audit_enabled\": true in {}",
                paths.settings_file().display()
            );
        }
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

/// Write the settings file with the current (or default) settings
pub fn handle_init_command(settings: &Settings, paths: &MailroomPaths) -> MailroomResult<()> {
    if paths.settings_file().exists() {
        println!("Settings already exist at: {}", paths.settings_file().display());
        return Ok(());
    }

    settings.save(paths)?;
    println!("Settings written to: {}", paths.settings_file().display());
    Ok(())
}

/// Print resolved paths and settings
pub fn handle_config_command(
    settings: &Settings,
    paths: &MailroomPaths,
    letters_dir: Option<PathBuf>,
) -> MailroomResult<()> {
    println!("Mailroom Configuration");
    println!("======================");
    println!("Config directory:  {}", paths.base_dir().display());
    println!("Settings file:     {}", paths.settings_file().display());
    println!("Audit log:         {}", paths.audit_log().display());
    let letters_dir = settings.resolve_letters_dir(letters_dir);
    println!("Letters directory: {}", letters_dir.display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Signature:       {}", settings.signature);
    println!("  Audit enabled:   {}", settings.audit_enabled);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");

        handle_report_command(&Registry::with_seed_donors(), Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Donor Name,Total Given,Num Gifts,Average Gift\n"));
        assert!(contents.contains("Cyril Figgis,1828.37,3,609.46"));
    }

    #[test]
    fn test_report_csv_bad_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.csv");

        let err = handle_report_command(&Registry::with_seed_donors(), Some(path)).unwrap_err();
        assert!(matches!(err, MailroomError::Export(_)));
    }

    #[test]
    fn test_thank_all_with_audit() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MailroomPaths::with_base_dir(temp_dir.path().join("config"));
        let settings = Settings {
            audit_enabled: true,
            ..Settings::default()
        };
        let letters = temp_dir.path().join("letters");

        handle_thank_all_command(
            &Registry::with_seed_donors(),
            &settings,
            &paths,
            Some(letters.clone()),
        )
        .unwrap();

        assert!(letters.join("Ray Gillette.txt").exists());
        let entries = AuditLogger::new(paths.audit_log()).read_all().unwrap();
        assert_eq!(entries.len(), 5);
    }

    #[test]
    fn test_init_writes_settings_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MailroomPaths::with_base_dir(temp_dir.path().join("config"));

        handle_init_command(&Settings::default(), &paths).unwrap();
        assert!(paths.settings_file().exists());

        let custom = Settings {
            signature: "Someone Else".to_string(),
            ..Settings::default()
        };
        handle_init_command(&custom, &paths).unwrap();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.signature, "The Owners");
    }
}
