use crate::{
    client::SelfHostClient,
    error::SelfHostResult,
    models::{CreatedUserToken, Policy, User, UserToken, UserUpdate},
};
use log::{debug, info};
use reqwest::Method;
use serde_json::json;
use uuid::Uuid;

/// User API operations
pub struct UsersApi<'a> {
    client: &'a SelfHostClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a SelfHostClient) -> Self {
        Self { client }
    }

    /// List users
    ///
    /// # Arguments
    /// * `limit` - Number of items to return
    /// * `offset` - Number of items to skip before collecting the result set
    pub async fn list_users(
        &self,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> SelfHostResult<Vec<User>> {
        let mut req = self.client.request(Method::GET, "users")?;
        req = SelfHostClient::with_pagination(req, limit, offset);

        self.client.execute_list(req).await
    }

    /// Create a new user
    ///
    /// # Arguments
    /// * `name` - Name of the user
    pub async fn create_user(&self, name: &str) -> SelfHostResult<User> {
        info!("Creating user: {}", name);
        let req = self
            .client
            .request(Method::POST, "users")?
            .json(&json!({ "name": name }));

        self.client.execute(req).await
    }

    /// Get the user the client is authenticated as
    pub async fn get_current_user(&self) -> SelfHostResult<User> {
        let req = self.client.request(Method::GET, "users/me")?;

        self.client.execute(req).await
    }

    /// Get a user by UUID
    pub async fn get_user(&self, user_uuid: &Uuid) -> SelfHostResult<User> {
        let path = format!("users/{}", user_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute(req).await
    }

    /// Update a user
    ///
    /// # Arguments
    /// * `user_uuid` - UUID of the user to update
    /// * `update` - Fields to change; unset fields are left untouched
    pub async fn update_user(&self, user_uuid: &Uuid, update: &UserUpdate) -> SelfHostResult<()> {
        info!("Updating user: {}", user_uuid);
        debug!("Request body: {:?}", update);
        let path = format!("users/{}", user_uuid);
        let req = self.client.request(Method::PUT, &path)?.json(update);

        self.client.execute_unit(req).await
    }

    /// Delete a user
    pub async fn delete_user(&self, user_uuid: &Uuid) -> SelfHostResult<()> {
        info!("Deleting user: {}", user_uuid);
        let path = format!("users/{}", user_uuid);
        let req = self.client.request(Method::DELETE, &path)?;

        self.client.execute_unit(req).await
    }

    /// List the policies associated with a user
    pub async fn get_user_policies(&self, user_uuid: &Uuid) -> SelfHostResult<Vec<Policy>> {
        let path = format!("users/{}/policies", user_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute_list(req).await
    }

    /// Change the allowed request rate for a user
    ///
    /// # Arguments
    /// * `user_uuid` - UUID of the target user
    /// * `rate` - Allowed requests per time unit
    pub async fn update_user_rate(&self, user_uuid: &Uuid, rate: i64) -> SelfHostResult<()> {
        let path = format!("users/{}/rate", user_uuid);
        let req = self
            .client
            .request(Method::PUT, &path)?
            .json(&json!({ "rate": rate }));

        self.client.execute_unit(req).await
    }

    /// List the secret tokens registered on a user
    ///
    /// The token secrets themselves are not included; they are only
    /// returned once, by `create_user_token`.
    pub async fn get_user_tokens(&self, user_uuid: &Uuid) -> SelfHostResult<Vec<UserToken>> {
        let path = format!("users/{}/tokens", user_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute_list(req).await
    }

    /// Generate and register a new secret token on a user
    ///
    /// # Arguments
    /// * `user_uuid` - UUID of the target user
    /// * `token_name` - Name of the secret token
    pub async fn create_user_token(
        &self,
        user_uuid: &Uuid,
        token_name: &str,
    ) -> SelfHostResult<CreatedUserToken> {
        info!("Creating token {} for user {}", token_name, user_uuid);
        let path = format!("users/{}/tokens", user_uuid);
        let req = self
            .client
            .request(Method::POST, &path)?
            .json(&json!({ "name": token_name }));

        self.client.execute(req).await
    }

    /// Delete a secret token from a user
    pub async fn delete_user_token(
        &self,
        user_uuid: &Uuid,
        token_uuid: &Uuid,
    ) -> SelfHostResult<()> {
        info!("Deleting token {} from user {}", token_uuid, user_uuid);
        let path = format!("users/{}/tokens/{}", user_uuid, token_uuid);
        let req = self.client.request(Method::DELETE, &path)?;

        self.client.execute_unit(req).await
    }
}
