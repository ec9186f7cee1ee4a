//! Qualifying pull requests of a fetched listing page

use crate::paging::PageWindow;
use gh_client::ListedPullRequest;

/// Numbers of the merged pull requests at positions inside `window`
///
/// Closed-but-unmerged pull requests are skipped even inside the window.
/// Listing order is preserved. A short page (end of the listing) simply
/// yields fewer candidates.
pub fn select_qualifying(items: &[ListedPullRequest], window: PageWindow) -> Vec<u64> {
    items
        .iter()
        .enumerate()
        .filter(|(position, pr)| window.contains(*position as u64) && pr.is_merged())
        .map(|(_, pr)| pr.number)
        .collect()
}
