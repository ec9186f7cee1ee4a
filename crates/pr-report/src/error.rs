use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a pull request report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("either a PR range (start and total) or a list of PRs is required")]
    MissingSelection,

    #[error("a PR range must contain at least one pull request")]
    EmptyRange,

    #[error("range of {count} PRs starting at {start} runs past the last addressable position")]
    RangeOverflow { start: u64, count: u64 },

    #[error("page {0} is beyond the pages the API can address")]
    PageOutOfRange(u64),

    #[error("failed to write report to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
