use log::warn;

use crate::requests::PageFetcher;

// The site paginates every group listing across exactly these pages.
const SCHEDULE_PAGES: [&str; 2] = ["1", "2"];

/// Expand each discovered link across the known pagination set and keep the
/// URLs that actually fetch. A failed candidate is logged and skipped; one
/// dead page never aborts validation of the rest. Output order is input
/// link order, then page order.
pub async fn validate_links<F: PageFetcher>(
    fetcher: &F,
    base_url: &str,
    links: &[String],
) -> Vec<String> {
    let mut valid_links = Vec::new();
    for link in links {
        for page in SCHEDULE_PAGES {
            let full_url = format!("{base_url}{link}?page={page}");
            match fetcher.fetch_page(&full_url).await {
                Ok(_) => valid_links.push(full_url),
                Err(e) => warn!("schedule page skipped: {e}"),
            }
        }
    }
    valid_links
}
