//! JSON-over-HTTP implementation of the service API

use async_trait::async_trait;
use gatehouse_common::protocol::{SavedUser, ServerAccess, UserPayload, UserRecord};
use reqwest::{Client, Response, StatusCode};

use super::{ApiError, UserAdminApi};

/// HTTP client for the Gatehouse service
///
/// Connection parameters are injected by the embedding shell; the
/// client itself is stateless beyond its connection pool and can be
/// shared freely.
pub struct HttpApi {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpApi {
    /// Create a client for the service at `base_url`
    ///
    /// `token` is sent as a bearer token on every request. A trailing
    /// slash on `base_url` is tolerated.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client
    /// cannot be constructed (e.g. TLS backend initialization failure).
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response to an `ApiError`
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        // Body is best effort; the status code alone is actionable.
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            code: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl UserAdminApi for HttpApi {
    async fn get_user(&self, id: i64) -> Result<UserRecord, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/users/{id}")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn create_user(&self, user: &UserPayload) -> Result<SavedUser, ApiError> {
        let response = self
            .client
            .post(self.url("/users"))
            .bearer_auth(&self.token)
            .json(user)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn edit_user(&self, id: i64, user: &UserPayload) -> Result<SavedUser, ApiError> {
        let response = self
            .client
            .patch(self.url(&format!("/users/{id}")))
            .bearer_auth(&self.token)
            .json(user)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn edit_group_servers(
        &self,
        group_id: i64,
        servers: &[ServerAccess],
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .patch(self.url(&format!("/groups/{group_id}/servers")))
            .bearer_auth(&self.token)
            .json(&servers)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn edit_group_memberships(&self, user_id: i64, groups: &[i64]) -> Result<(), ApiError> {
        let response = self
            .client
            .patch(self.url(&format!("/users/{user_id}/groups")))
            .bearer_auth(&self.token)
            .json(&groups)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
