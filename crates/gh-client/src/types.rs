//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! Only the fields a report needs are modelled; everything else in the
//! payload is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the closed pull request listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedPullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// When the PR was merged (null for closed-but-unmerged PRs)
    pub merged_at: Option<DateTime<Utc>>,
}

impl ListedPullRequest {
    /// Whether the pull request was actually merged, not merely closed
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

/// A GitHub account reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// GitHub username
    pub login: String,
}

/// Full detail of a single pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestDetail {
    /// PR number
    pub number: u64,

    /// Who merged the PR (null when unmerged, or when the account is gone)
    pub merged_by: Option<Account>,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// When the PR was merged
    pub merged_at: Option<DateTime<Utc>>,

    /// PR URL for opening in browser
    pub html_url: String,
}

impl PullRequestDetail {
    /// Whether the pull request was actually merged
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }

    /// Login of the merging account, if GitHub reports one
    pub fn merged_by_login(&self) -> Option<&str> {
        self.merged_by.as_ref().map(|account| account.login.as_str())
    }
}
