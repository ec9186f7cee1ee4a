//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::types::{ListedPullRequest, PullRequestDetail};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the read operations used to build a pull request report.
/// Implementations can hit the API directly or serve canned data in tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, ListedPullRequest};
///
/// async fn newest(client: &dyn GitHubClient) -> anyhow::Result<Vec<ListedPullRequest>> {
///     client.list_closed_pull_requests("rust-lang", "rust", 1, 30).await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch one page of closed pull requests, newest first
    ///
    /// The listing is sorted by creation time, descending.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `page` - 1-based page number as understood by the API
    /// * `per_page` - Page size (1..=100)
    ///
    /// # Returns
    ///
    /// The items of that page in listing order. The last page of a listing
    /// may be shorter than `per_page`, pages past the end are empty.
    async fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<Vec<ListedPullRequest>>;

    /// Fetch a single pull request by number
    ///
    /// This returns the fields that are not part of the listing endpoint,
    /// such as who merged the pull request.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `number` - Pull request number
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> anyhow::Result<PullRequestDetail>;
}
