#[derive(Debug)]
pub struct FetchError {
    pub url: String,
    pub cause: String,
}

impl FetchError {
    pub fn new(url: &str, cause: impl std::fmt::Display) -> Self {
        Self {
            url: url.to_string(),
            cause: cause.to_string(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fetch for {} failed: {}", self.url, self.cause)
    }
}

impl std::error::Error for FetchError {}
