//! HTTP client for the corkboard service.
//!
//! Thin pass-through over the service's REST endpoints. Every call returns a
//! structured [`ApiResult`]; nothing retries, and no timeout is configured.

use cork_types::{LoginRequest, LoginResponse, Post, PostPayload, RegisterRequest, User};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::session::Session;

/// Client for the corkboard REST API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client for the given base address.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Exchanges credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<String> {
        let url = format!("{}/api/login", self.base_url);
        tracing::debug!(%url, "POST login");
        let response = self
            .http
            .post(&url)
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(|err| ApiError::network(&err))?;

        let body: LoginResponse = Self::read_json(response).await?;
        Ok(body.token)
    }

    /// Creates an account. The confirmation check is the caller's concern;
    /// the service only sees name, email, and password.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<()> {
        let url = format!("{}/api/register", self.base_url);
        tracing::debug!(%url, "POST register");
        let response = self
            .http
            .post(&url)
            .json(&RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(|err| ApiError::network(&err))?;

        Self::read_empty(response).await
    }

    /// Fetches the signed-in user's profile.
    pub async fn fetch_user(&self, session: &Session) -> ApiResult<User> {
        let url = format!("{}/api/user", self.base_url);
        tracing::debug!(%url, "GET user");
        let response = self
            .authorized(self.http.get(&url), session)
            .send()
            .await
            .map_err(|err| ApiError::network(&err))?;

        Self::read_json(response).await
    }

    /// Fetches the full post collection.
    pub async fn list_posts(&self, session: &Session) -> ApiResult<Vec<Post>> {
        let url = format!("{}/api/posts", self.base_url);
        tracing::debug!(%url, "GET posts");
        let response = self
            .authorized(self.http.get(&url), session)
            .send()
            .await
            .map_err(|err| ApiError::network(&err))?;

        Self::read_json(response).await
    }

    /// Creates a post and returns the server's copy.
    pub async fn create_post(&self, session: &Session, payload: &PostPayload) -> ApiResult<Post> {
        let url = format!("{}/api/posts", self.base_url);
        tracing::debug!(%url, "POST post");
        let response = self
            .authorized(self.http.post(&url), session)
            .json(payload)
            .send()
            .await
            .map_err(|err| ApiError::network(&err))?;

        Self::read_json(response).await
    }

    /// Updates a post and returns the server's copy.
    pub async fn update_post(
        &self,
        session: &Session,
        id: &str,
        payload: &PostPayload,
    ) -> ApiResult<Post> {
        let url = format!("{}/api/posts/{id}", self.base_url);
        tracing::debug!(%url, "PUT post");
        let response = self
            .authorized(self.http.put(&url), session)
            .json(payload)
            .send()
            .await
            .map_err(|err| ApiError::network(&err))?;

        Self::read_json(response).await
    }

    /// Deletes a post. The response body is ignored.
    pub async fn delete_post(&self, session: &Session, id: &str) -> ApiResult<()> {
        let url = format!("{}/api/posts/{id}", self.base_url);
        tracing::debug!(%url, "DELETE post");
        let response = self
            .authorized(self.http.delete(&url), session)
            .send()
            .await
            .map_err(|err| ApiError::network(&err))?;

        Self::read_empty(response).await
    }

    fn authorized(
        &self,
        builder: reqwest::RequestBuilder,
        session: &Session,
    ) -> reqwest::RequestBuilder {
        builder.bearer_auth(session.token())
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::network(&err))?;

        if !status.is_success() {
            return Err(ApiError::http_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|err| ApiError::parse(&err))
    }

    async fn read_empty(response: reqwest::Response) -> ApiResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|err| ApiError::network(&err))?;
        Err(ApiError::http_status(status.as_u16(), &body))
    }
}
