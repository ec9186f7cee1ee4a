//! Read-only GitHub API client for pull request reports
//!
//! This crate provides a trait-based GitHub API client covering the two
//! read operations a pull request report needs: a page of the closed pull
//! request listing, and the full detail of a single pull request.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - list_closed_pull_requests()                   │
//! │  - fetch_pull_request()                          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{connect, GitHubClient, TokenResolver};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let token = TokenResolver::new().resolve(None, None);
//! let client = connect(None, token)?;
//!
//! let page = client
//!     .list_closed_pull_requests("rust-lang", "rust", 1, 100)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod octocrab_client;
pub mod types;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

/// Largest page size the GitHub REST API accepts
pub const MAX_PER_PAGE: u8 = 100;

pub use auth::{connect, TokenResolver};
pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use types::{Account, ListedPullRequest, PullRequestDetail};
