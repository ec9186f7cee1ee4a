//! CSV report rows and output
//!
//! Fields are joined with a bare comma, values are not quoted. A value that
//! itself contains a comma therefore shifts the remaining columns; logins,
//! timestamps and URLs never do.

use crate::error::ReportError;
use chrono::{DateTime, SecondsFormat, Utc};
use gh_client::PullRequestDetail;
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column names of the report, in row order
pub const HEADERS: [&str; 5] = [
    "PR number",
    "merged_by.login",
    "created_at",
    "merged_at",
    "html_url",
];

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub number: String,
    pub merged_by: String,
    pub created_at: String,
    pub merged_at: String,
    pub html_url: String,
}

impl ReportRow {
    /// Fields in column order
    pub fn fields(&self) -> [&str; 5] {
        [
            self.number.as_str(),
            self.merged_by.as_str(),
            self.created_at.as_str(),
            self.merged_at.as_str(),
            self.html_url.as_str(),
        ]
    }
}

impl From<&PullRequestDetail> for ReportRow {
    fn from(detail: &PullRequestDetail) -> Self {
        let merged_by = match detail.merged_by_login() {
            Some(login) => login.to_string(),
            None => {
                warn!("PR #{} has no merged_by account", detail.number);
                String::new()
            }
        };

        Self {
            number: detail.number.to_string(),
            merged_by,
            created_at: format_timestamp(&detail.created_at),
            merged_at: detail
                .merged_at
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_default(),
            html_url: detail.html_url.clone(),
        }
    }
}

/// Timestamp in the API's own form, e.g. `2011-01-26T19:01:12Z`
///
/// Sub-second digits are only written when the timestamp carries them, so
/// whole-second API values come back unchanged and finer ones are not cut.
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Write the header line and one line per row to `out`
pub fn render_report<W: Write>(rows: &[ReportRow], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", HEADERS.join(","))?;
    for row in rows {
        writeln!(out, "{}", row.fields().join(","))?;
    }
    out.flush()
}

/// Write the report to `path`, replacing any existing content
///
/// A failure part-way leaves whatever was already written in place.
pub fn write_report(rows: &[ReportRow], path: &Path) -> Result<(), ReportError> {
    let write_err = |source: std::io::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    render_report(rows, &mut out).map_err(write_err)?;

    info!("Finished writing {} ({} rows)", path.display(), rows.len());
    Ok(())
}
