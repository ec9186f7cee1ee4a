//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.

use crate::client::GitHubClient;
use crate::types::{ListedPullRequest, PullRequestDetail};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::{params, Octocrab};
use std::sync::Arc;

/// Direct GitHub API client using octocrab
///
/// Authentication, base URI and transport-level behaviour all live in the
/// wrapped `Octocrab` instance.
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<Vec<ListedPullRequest>> {
        debug!(
            "Listing closed PRs for {}/{} (page {}, {} per page)",
            owner, repo, page, per_page
        );

        let listing = self
            .octocrab
            .pulls(owner, repo)
            .list()
            .state(params::State::Closed)
            .sort(params::pulls::Sort::Created)
            .direction(params::Direction::Descending)
            .per_page(per_page)
            .page(page)
            .send()
            .await
            .with_context(|| format!("Failed to list page {} of {}/{}", page, owner, repo))?;

        let items: Vec<ListedPullRequest> = listing
            .items
            .into_iter()
            .map(|pr| ListedPullRequest {
                number: pr.number,
                merged_at: pr.merged_at,
            })
            .collect();

        debug!(
            "Page {} of {}/{} returned {} PRs",
            page,
            owner,
            repo,
            items.len()
        );
        Ok(items)
    }

    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> anyhow::Result<PullRequestDetail> {
        debug!("Fetching PR #{} for {}/{}", number, owner, repo);

        // Raw GET so only the report fields have to deserialize
        let detail: PullRequestDetail = self
            .octocrab
            .get(pull_request_route(owner, repo, number), None::<&()>)
            .await
            .with_context(|| format!("Failed to fetch PR #{} of {}/{}", number, owner, repo))?;

        Ok(detail)
    }
}

/// REST route of a single pull request
fn pull_request_route(owner: &str, repo: &str, number: u64) -> String {
    format!("/repos/{}/{}/pulls/{}", owner, repo, number)
}
