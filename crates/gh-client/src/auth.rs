//! Token resolution and client construction
//!
//! A token is optional: without one the client talks to the API
//! unauthenticated, with the lower rate limit that implies.

use crate::{OctocrabClient, DEFAULT_HOST};
use anyhow::{Context, Result};
use log::{debug, info};
use octocrab::Octocrab;
use std::sync::Arc;

/// Resolves GitHub tokens for a host
///
/// Tries multiple sources in order:
/// 1. Token passed explicitly (e.g. `--github-token`)
/// 2. Host-specific env var (e.g., `GITHUB_TOKEN_GHE_EXAMPLE_COM`)
/// 3. Generic `GITHUB_TOKEN` or `GH_TOKEN` (github.com only)
#[derive(Debug, Clone)]
pub struct TokenResolver {
    /// Cached default token from GITHUB_TOKEN/GH_TOKEN
    default_token: Option<String>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a resolver from the process environment
    ///
    /// Loads a `.env` file first when `GITHUB_TOKEN` is not already set.
    pub fn new() -> Self {
        if std::env::var("GITHUB_TOKEN").is_err() {
            match dotenvy::dotenv() {
                Ok(path) => debug!("Loaded .env file from: {:?}", path),
                Err(_) => debug!(".env file not found, relying on environment variables"),
            }
        }

        let default_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok();

        Self::with_default_token(default_token)
    }

    /// Create a resolver with a fixed fallback token
    pub fn with_default_token(default_token: Option<String>) -> Self {
        Self {
            default_token: default_token.filter(|token| !token.is_empty()),
        }
    }

    /// Pick the token to use for `host` (None = github.com)
    ///
    /// Returns `None` when no source yields a token.
    pub fn resolve(&self, explicit: Option<String>, host: Option<&str>) -> Option<String> {
        if let Some(token) = explicit.filter(|token| !token.is_empty()) {
            debug!("Using token passed on the command line");
            return Some(token);
        }

        let host = host.unwrap_or(DEFAULT_HOST);
        let env_key = host_env_key(host);
        if let Ok(token) = std::env::var(&env_key) {
            if !token.is_empty() {
                debug!("Using token from env var {} for host {}", env_key, host);
                return Some(token);
            }
        }

        if host == DEFAULT_HOST {
            if let Some(ref token) = self.default_token {
                debug!("Using default token (GITHUB_TOKEN/GH_TOKEN) for github.com");
                return Some(token.clone());
            }
        }

        None
    }
}

/// Env var holding the token for a specific host
pub fn host_env_key(host: &str) -> String {
    format!(
        "GITHUB_TOKEN_{}",
        host.replace(['.', '-'], "_").to_uppercase()
    )
}

/// Build a client for `host` (None = github.com)
///
/// Enterprise hosts are reached through `https://{host}/api/v3`.
pub fn connect(host: Option<&str>, token: Option<String>) -> Result<OctocrabClient> {
    let effective_host = host.unwrap_or(DEFAULT_HOST);
    info!(
        "Creating GitHub client for host: {} ({})",
        effective_host,
        if token.is_some() {
            "authenticated"
        } else {
            "unauthenticated"
        }
    );

    let mut builder = Octocrab::builder();
    if let Some(token) = token {
        builder = builder.personal_token(token);
    }

    if effective_host != DEFAULT_HOST {
        let uri = format!("https://{}/api/v3", effective_host);
        builder = builder
            .base_uri(uri.as_str())
            .context("Failed to set base URI")?;
    }

    let octocrab = builder.build().context("Failed to build Octocrab client")?;
    Ok(OctocrabClient::new(Arc::new(octocrab)))
}
