//! Data access for the user directory: the user model, the REST client and
//! the pure list derivation used by the views.

pub mod config;
pub mod prefs;
pub mod user;
pub mod user_query;

use config::ApiConfig;
use dioxus_logger::tracing;
use serde::de::DeserializeOwned;
use url::Url;
use user::User;

/// Everything that can go wrong talking to the users API.
///
/// The views collapse all variants into one fixed message; the detail is
/// only logged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid users API base url `{0}`")]
    InvalidBaseUrl(String),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: u16 },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Read-only client for the users endpoint.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl UsersClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// `GET /users`
    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.config.users_url()?;
        self.get_json(url).await
    }

    /// `GET /users/{id}`. The id is passed through as an opaque path segment.
    pub async fn user(&self, id: &str) -> Result<User, ApiError> {
        let url = self.config.user_url(id)?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl Default for UsersClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

/// Fetches every user from the configured endpoint.
pub async fn users() -> Result<Vec<User>, ApiError> {
    UsersClient::default().users().await
}

/// Fetches one user by the id taken from the navigation path.
pub async fn user(id: String) -> Result<User, ApiError> {
    UsersClient::default().user(&id).await
}
