//! Concurrent collection of report rows
//!
//! Collection runs in two phases separated by a barrier:
//!
//! 1. every listing page of the range is requested at once and the
//!    qualifying PR numbers are gathered in page order
//! 2. every PR detail is requested at once and rows are built in the
//!    order the numbers were gathered
//!
//! All requests of a phase are in flight together on the calling task and
//! are joined with `join_all`, which keeps results in input order no matter
//! in which order they complete. Each request's error is captured on its
//! own, so one failure never cancels its siblings.

use crate::error::ReportError;
use crate::paging::{addressable_page_bounds, compute_page_window, PrRange};
use crate::report::ReportRow;
use crate::selection::select_qualifying;
use futures::future::join_all;
use gh_client::GitHubClient;
use log::{debug, error, info};

/// Rows gathered for a report, plus how many requests failed
#[derive(Debug, Default)]
pub struct Collected {
    pub rows: Vec<ReportRow>,
    pub failures: usize,
}

impl Collected {
    /// Whether every request succeeded
    pub fn is_complete(&self) -> bool {
        self.failures == 0
    }
}

/// Gathers report rows for one repository
pub struct ReportCollector<'a, C: GitHubClient + ?Sized> {
    client: &'a C,
    owner: &'a str,
    repo: &'a str,
}

impl<'a, C: GitHubClient + ?Sized> ReportCollector<'a, C> {
    pub fn new(client: &'a C, owner: &'a str, repo: &'a str) -> Self {
        Self {
            client,
            owner,
            repo,
        }
    }

    /// Rows for the merged PRs among listing positions `range`
    pub async fn collect_range(&self, range: PrRange, per_page: u8) -> Collected {
        // Checked before any request is built, one future is created per page
        let bounds = match addressable_page_bounds(range, u64::from(per_page)) {
            Ok(bounds) => bounds,
            Err(e) => {
                error!("Cannot list PRs of {}/{}: {}", self.owner, self.repo, e);
                return Collected {
                    rows: Vec::new(),
                    failures: 1,
                };
            }
        };
        info!(
            "Collecting PRs {}..{} of {}/{} from pages {}..={} ({} per page)",
            range.start,
            range.end(),
            self.owner,
            self.repo,
            bounds.start_page,
            bounds.end_page,
            per_page
        );

        let listings = bounds
            .pages()
            .map(|page| self.qualifying_on_page(page, range, per_page));
        let results = join_all(listings).await;

        let mut failures = 0;
        let mut numbers = Vec::new();
        for (page, result) in bounds.pages().zip(results) {
            match result {
                Ok(found) => {
                    debug!("Page {} yielded {} merged PRs", page, found.len());
                    numbers.extend(found);
                }
                Err(e) => {
                    error!(
                        "Failed to list page {} of {}/{}: {:#}",
                        page, self.owner, self.repo, e
                    );
                    failures += 1;
                }
            }
        }

        let mut collected = self.collect_details(&numbers).await;
        collected.failures += failures;
        collected
    }

    /// Rows for an explicit list of PR numbers, highest number first
    ///
    /// Duplicates are dropped. PRs that were closed without merging are
    /// left out of the report.
    pub async fn collect_list(&self, numbers: &[u64]) -> Collected {
        let mut numbers = numbers.to_vec();
        numbers.sort_unstable_by(|a, b| b.cmp(a));
        numbers.dedup();

        info!(
            "Collecting {} listed PRs of {}/{}",
            numbers.len(),
            self.owner,
            self.repo
        );
        self.collect_details(&numbers).await
    }

    async fn qualifying_on_page(
        &self,
        page: u64,
        range: PrRange,
        per_page: u8,
    ) -> anyhow::Result<Vec<u64>> {
        // The API counts pages from 1
        let api_page = page
            .checked_add(1)
            .and_then(|p| u32::try_from(p).ok())
            .ok_or(ReportError::PageOutOfRange(page))?;

        let items = self
            .client
            .list_closed_pull_requests(self.owner, self.repo, api_page, per_page)
            .await?;

        let window = compute_page_window(page, range, u64::from(per_page));
        Ok(select_qualifying(&items, window))
    }

    async fn collect_details(&self, numbers: &[u64]) -> Collected {
        let fetches = numbers
            .iter()
            .map(|&number| self.client.fetch_pull_request(self.owner, self.repo, number));
        let results = join_all(fetches).await;

        let mut collected = Collected::default();
        for (number, result) in numbers.iter().zip(results) {
            match result {
                Ok(detail) if detail.is_merged() => collected.rows.push(ReportRow::from(&detail)),
                Ok(_) => info!("Skipping PR #{}: closed without merging", number),
                Err(e) => {
                    error!("Failed to fetch PR #{}: {:#}", number, e);
                    collected.failures += 1;
                }
            }
        }
        collected
    }
}
