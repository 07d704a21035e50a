//! Users API.

use crate::client::CisternClient;
use crate::error::Result;
use crate::query::ListQuery;
use crate::types::{
    CreateUserRequest, ListUsersResponse, UpdateUserRequest, User, UserResponse,
};

/// Users API client.
pub struct UsersApi {
    client: CisternClient,
}

impl UsersApi {
    pub(crate) fn new(client: CisternClient) -> Self {
        Self { client }
    }

    /// Create a user.
    pub async fn create(&self, request: CreateUserRequest) -> Result<User> {
        let response: UserResponse = self.client.post("users", &request).await?;
        Ok(response.user)
    }

    /// List users.
    pub async fn list(&self, query: &ListQuery) -> Result<ListUsersResponse> {
        self.client.get_with_query("users", query).await
    }

    /// Get a user by ID.
    pub async fn get(&self, id: &str) -> Result<User> {
        let response: UserResponse = self.client.get(&format!("users/{}", id)).await?;
        Ok(response.user)
    }

    /// Update a user. Returns `None` when the server answered 204.
    pub async fn update(
        &self,
        id: &str,
        etag: &str,
        request: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let response: Option<UserResponse> = self
            .client
            .put(&format!("users/{}", id), etag, &request)
            .await?;
        Ok(response.map(|r| r.user))
    }

    /// Delete a user.
    pub async fn delete(&self, id: &str, etag: &str) -> Result<()> {
        self.client.delete(&format!("users/{}", id), Some(etag)).await
    }
}
