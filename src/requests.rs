use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};

use crate::fetch_error::FetchError;
use crate::ratelimit::RateLimiter;

// An unresponsive remote page must not hang a whole ingestion run.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One HTTP GET per call. Exactly status 200 counts as success; anything
/// else becomes a `FetchError` carrying the URL and the cause.
pub trait PageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

pub struct RequestClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RequestClient {
    pub fn new() -> anyhow::Result<Self> {
        let client = ClientBuilder::new().timeout(REQUEST_TIMEOUT).build()?;
        let rate_limiter = RateLimiter::new();
        Ok(Self {
            client,
            rate_limiter,
        })
    }
}

impl PageFetcher for RequestClient {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        // Wait (non-blocking) until we're allowed to make a request according
        // to our self-imposed rate-limiting policy.
        self.rate_limiter.wait_until_ready().await;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, e))?;
        if response.status() != StatusCode::OK {
            return Err(FetchError::new(
                url,
                format!("unexpected status {}", response.status()),
            ));
        }
        response.text().await.map_err(|e| FetchError::new(url, e))
    }
}
