//! Merged pull request reports
//!
//! Walks a repository's closed pull requests, newest first, picks the merged
//! ones inside a requested range of positions (or an explicit list of
//! numbers) and writes one CSV row per pull request.
//!
//! The interesting part is [`paging`]: mapping a range of listing positions
//! onto the fixed-size pages the API serves, and each page back onto the
//! slice of its positions that was asked for.

pub mod cli;
pub mod collector;
pub mod error;
pub mod paging;
pub mod report;
pub mod selection;

pub use cli::{Cli, RunSettings, Selection};
pub use collector::{Collected, ReportCollector};
pub use error::ReportError;
pub use paging::{compute_page_bounds, compute_page_window, PageBounds, PageWindow, PrRange};
pub use report::{render_report, write_report, ReportRow, HEADERS};
pub use selection::select_qualifying;

use gh_client::GitHubClient;

/// Collect the rows `settings` asks for and write them to the output file
///
/// Fetch failures do not stop the run; they are counted in the returned
/// `Collected` and the report holds whatever could be gathered.
pub async fn run_report<C: GitHubClient + ?Sized>(
    client: &C,
    settings: &RunSettings,
) -> Result<Collected, ReportError> {
    let collector = ReportCollector::new(client, &settings.owner, &settings.repo);

    let collected = match &settings.selection {
        Selection::Range(range) => collector.collect_range(*range, settings.per_page).await,
        Selection::List(numbers) => collector.collect_list(numbers).await,
    };

    write_report(&collected.rows, &settings.output_file)?;
    Ok(collected)
}
