//! JSONL audit log file
//!
//! One `AuditEntry` per line, appended as changes happen. Readers parse
//! lazily, so `history` only decodes the lines it is going to print.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{MailroomError, MailroomResult};

use super::entry::AuditEntry;

/// Appends entries to, and reads them back from, one audit log file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry, creating the file and its directory on first use
    pub fn log(&self, entry: &AuditEntry) -> MailroomResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        // whole line in one write
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&line)?;

        tracing::debug!(operation = %entry.operation, donor = %entry.donor_id, "audited");
        Ok(())
    }

    /// Append an entry, logging a warning instead of failing
    ///
    /// Used where the change being audited has already happened and must not
    /// be undone or interrupted by a broken log file.
    pub fn log_or_warn(&self, entry: &AuditEntry) {
        if let Err(e) = self.log(entry) {
            tracing::warn!(
                path = %self.path.display(),
                operation = %entry.operation,
                donor = %entry.donor_id,
                error = %e,
                "could not write audit entry"
            );
        }
    }

    /// Every entry in the log, oldest first
    pub fn read_all(&self) -> MailroomResult<Vec<AuditEntry>> {
        self.read_recent(usize::MAX)
    }

    /// The last `count` entries, oldest first
    ///
    /// Only the raw text of the last `count` lines is held while scanning.
    pub fn read_recent(&self, count: usize) -> MailroomResult<Vec<AuditEntry>> {
        let Some(lines) = self.lines()? else {
            return Ok(Vec::new());
        };

        let mut tail: VecDeque<(usize, String)> = VecDeque::new();
        for (index, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() || count == 0 {
                continue;
            }
            if tail.len() == count {
                tail.pop_front();
            }
            tail.push_back((index + 1, line));
        }

        tail.into_iter()
            .map(|(line_no, line)| parse_line(line_no, &line))
            .collect()
    }

    fn lines(&self) -> MailroomResult<Option<std::io::Lines<BufReader<File>>>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(BufReader::new(file).lines())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn parse_line(line_no: usize, line: &str) -> MailroomResult<AuditEntry> {
    serde_json::from_str(line).map_err(|e| {
        MailroomError::Json(format!("audit log line {}: {}", line_no, e))
    })
}
