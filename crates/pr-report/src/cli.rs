use crate::error::ReportError;
use crate::paging::{addressable_page_bounds, PrRange};
use clap::{ArgGroup, Parser};
use gh_client::MAX_PER_PAGE;
use pr_report_config::AppConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pr-report",
    version,
    about = "Write a CSV report of merged pull requests"
)]
#[command(group(
    ArgGroup::new("selection")
        .required(true)
        .args(["start_num", "list_of_pull_requests"])
))]
pub struct Cli {
    #[arg(short, long, help = "Owner of the repository")]
    pub owner: String,

    #[arg(short, long, help = "Name of the repository")]
    pub repo: String,

    #[arg(
        short,
        long,
        requires = "total_num",
        help = "First PR to check, counted from the newest closed PR (zero-indexed)"
    )]
    pub start_num: Option<u64>,

    #[arg(
        short,
        long,
        requires = "start_num",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Number of closed PRs to check"
    )]
    pub total_num: Option<u64>,

    #[arg(
        short,
        long,
        value_delimiter = ',',
        conflicts_with_all = ["start_num", "total_num"],
        help = "Comma-separated PR numbers to report on instead of a range"
    )]
    pub list_of_pull_requests: Option<Vec<u64>>,

    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_PER_PAGE)),
        help = "Number of PRs to load per page [default: 100]"
    )]
    pub per_page_num: Option<u8>,

    #[arg(short = 'f', long, help = "Output CSV filename [default: results.csv]")]
    pub output_file: Option<PathBuf>,

    #[arg(short, long, help = "GitHub personal access token")]
    pub github_token: Option<String>,

    #[arg(long, help = "GitHub Enterprise host [default: github.com]")]
    pub host: Option<String>,

    #[arg(
        short,
        long,
        help = "Config file to use instead of .pr-report.toml in the working or home directory"
    )]
    pub config: Option<PathBuf>,
}

/// Which pull requests a run reports on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Positions of the closed PR listing, newest first
    Range(PrRange),
    /// Explicit PR numbers
    List(Vec<u64>),
}

/// Settings of one run after merging flags with the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub owner: String,
    pub repo: String,
    pub selection: Selection,
    pub per_page: u8,
    pub output_file: PathBuf,
    pub github_token: Option<String>,
    pub host: Option<String>,
}

impl Cli {
    /// Config named by `--config`, or the one found by the usual lookup
    ///
    /// An explicitly named file must exist and parse.
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        match &self.config {
            Some(path) => AppConfig::from_path(path),
            None => Ok(AppConfig::load()),
        }
    }

    /// Resolve flags against `config`; flags win
    pub fn into_settings(self, config: AppConfig) -> Result<RunSettings, ReportError> {
        let selection = match (self.list_of_pull_requests, self.start_num, self.total_num) {
            (Some(list), _, _) => Selection::List(list),
            (None, Some(start), Some(total)) => Selection::Range(PrRange::new(start, total)?),
            _ => return Err(ReportError::MissingSelection),
        };

        let per_page = self.per_page_num.unwrap_or(config.per_page);
        if let Selection::Range(range) = selection {
            addressable_page_bounds(range, u64::from(per_page))?;
        }

        Ok(RunSettings {
            owner: self.owner,
            repo: self.repo,
            selection,
            per_page,
            output_file: self
                .output_file
                .unwrap_or_else(|| PathBuf::from(config.output_file)),
            github_token: self.github_token,
            host: self.host.or(config.host),
        })
    }
}
