//! Location of the users REST endpoint.

use std::env;

use url::Url;

use crate::ApiError;

/// Public demo API the application talks to unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads the base URL from the environment, with an in-code default.
    ///
    /// # Environment Variables
    /// - `USERS_API_BASE_URL`: base URL of the users API. Read at runtime on
    ///   native targets. A browser has no process environment, so wasm32
    ///   builds take the value present at compile time.
    pub fn from_env() -> Self {
        let from_runtime = env::var("USERS_API_BASE_URL").ok();
        let from_build = option_env!("USERS_API_BASE_URL").map(str::to_string);

        let base_url = from_runtime
            .or(from_build)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/users`
    pub fn users_url(&self) -> Result<Url, ApiError> {
        self.endpoint(&["users"])
    }

    /// `{base}/users/{id}`, with `id` percent-encoded as one path segment.
    pub fn user_url(&self, id: &str) -> Result<Url, ApiError> {
        self.endpoint(&["users", id])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidBaseUrl(self.base_url.clone());

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
