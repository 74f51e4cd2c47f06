//! Donor Summary Report
//!
//! Totals, counts and averages per donor, largest total first.

use serde::Serialize;
use std::io::Write;

use crate::error::MailroomResult;
use crate::models::Money;
use crate::registry::Registry;

/// One donor's line in the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorSummaryRow {
    /// Donor full name
    pub name: String,
    /// Sum of all donations
    pub total: Money,
    /// Number of donations
    pub count: usize,
    /// Average donation (zero without donations)
    pub average: Money,
}

impl DonorSummaryRow {
    /// Format the row in the fixed-width terminal layout
    pub fn format_terminal(&self) -> String {
        format!(
            "{:<20} ${:>13} {:>11} {:>13}",
            self.name,
            self.total.format_grouped(),
            self.count,
            self.average.format_grouped()
        )
    }
}

/// Donor Summary Report
#[derive(Debug, Clone)]
pub struct DonorSummaryReport {
    /// Rows ordered by total, descending
    pub rows: Vec<DonorSummaryRow>,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Donor Name")]
    name: &'a str,
    #[serde(rename = "Total Given")]
    total: String,
    #[serde(rename = "Num Gifts")]
    count: usize,
    #[serde(rename = "Average Gift")]
    average: String,
}

impl DonorSummaryReport {
    /// Generate the report from the registry
    pub fn generate(registry: &Registry) -> Self {
        let mut rows: Vec<DonorSummaryRow> = registry
            .iter()
            .map(|donor| DonorSummaryRow {
                name: donor.name.clone(),
                total: donor.total(),
                count: donor.count(),
                average: donor.average(),
            })
            .collect();

        // sort_by is stable, so equal totals keep registry order
        rows.sort_by(|a, b| b.total.cmp(&a.total));

        Self { rows }
    }

    /// The header line
    pub fn header() -> String {
        format!(
            "{:<20} | {} | {} | {}",
            "Donor Name", "Total Given", "Num Gifts", "Average Gift"
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let header = Self::header();
        let mut output = String::new();

        output.push_str(&header);
        output.push('\n');
        output.push_str(&"-".repeat(header.len()));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&row.format_terminal());
            output.push('\n');
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> MailroomResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for row in &self.rows {
            csv_writer.serialize(CsvRow {
                name: &row.name,
                total: row.total.to_decimal_string(),
                count: row.count,
                average: row.average.to_decimal_string(),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
