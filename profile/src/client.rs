use async_trait::async_trait;
use http::StatusCode;
use reqwest::{Client, header::CONTENT_TYPE};

use crate::config::{Config, ConfigError};
use crate::models::UserData;

/// Client for the backend user API.
///
/// One method per endpoint; implementations perform exactly one HTTP request
/// per call and never retry.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Fetches the profile of a user.
    async fn fetch_user(&self, user_id: &str, token: &str) -> Result<ApiResponse, ApiError>;

    /// Updates the profile of a user.
    async fn update_user(
        &self,
        user_id: &str,
        token: &str,
        data: &UserData,
    ) -> Result<ApiResponse, ApiError>;
}

/// A backend response reduced to what the operations inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: StatusCode,

    /// The body read as text. May be empty.
    pub body: String,
}

impl ApiResponse {
    /// Formats the failure message of a non-2xx response: the backend body
    /// when present, otherwise `fallback`, with the status appended.
    pub fn failure_message(&self, fallback: &str) -> String {
        let message = if self.body.is_empty() {
            fallback
        } else {
            &self.body
        };
        format!("{message} ({})", self.status.as_u16())
    }
}

/// Backend client errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("user api request failed: {0}")]
    SendRequest(#[from] reqwest::Error),
}

/// Reqwest implementation of [`ProfileApi`].
#[derive(Clone)]
pub struct HttpProfileApi {
    client: Client,
    endpoint: String,
}

impl HttpProfileApi {
    /// Creates a client against a backend endpoint base URL.
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Creates a client from [`Config::from_env`].
    ///
    /// # Errors
    /// - the endpoint environment variable is missing
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(Config::from_env()?.endpoint))
    }

    fn user_url(&self, user_id: &str) -> String {
        format!("{}/user/{user_id}", self.endpoint)
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn fetch_user(&self, user_id: &str, token: &str) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .get(self.user_url(user_id))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }

    async fn update_user(
        &self,
        user_id: &str,
        token: &str,
        data: &UserData,
    ) -> Result<ApiResponse, ApiError> {
        let response = self
            .client
            .patch(self.user_url(user_id))
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .json(data)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(feature = "testutils")]
pub mod testutils {
    use super::*;
    use tokio::sync::Mutex;

    /// Mock backend client recording requests and returning queued responses.
    pub struct MockProfileApi {
        pub fetch_user_req: Mutex<Option<(String, String)>>,
        pub fetch_user_resp: Mutex<Option<Result<ApiResponse, ApiError>>>,
        pub update_user_req: Mutex<Option<(String, String, UserData)>>,
        pub update_user_resp: Mutex<Option<Result<ApiResponse, ApiError>>>,
    }

    impl Default for MockProfileApi {
        fn default() -> Self {
            Self {
                fetch_user_req: Mutex::new(None),
                fetch_user_resp: Mutex::new(None),
                update_user_req: Mutex::new(None),
                update_user_resp: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl ProfileApi for MockProfileApi {
        async fn fetch_user(&self, user_id: &str, token: &str) -> Result<ApiResponse, ApiError> {
            *self.fetch_user_req.lock().await = Some((user_id.to_string(), token.to_string()));
            self.fetch_user_resp.lock().await.take().unwrap()
        }

        async fn update_user(
            &self,
            user_id: &str,
            token: &str,
            data: &UserData,
        ) -> Result<ApiResponse, ApiError> {
            *self.update_user_req.lock().await =
                Some((user_id.to_string(), token.to_string(), data.clone()));
            self.update_user_resp.lock().await.take().unwrap()
        }
    }
}
