use crate::{
    client::SelfHostClient,
    error::SelfHostResult,
    models::{Group, Policy},
};
use log::info;
use reqwest::Method;
use serde_json::json;
use uuid::Uuid;

/// Group API operations
pub struct GroupsApi<'a> {
    client: &'a SelfHostClient,
}

impl<'a> GroupsApi<'a> {
    pub(crate) fn new(client: &'a SelfHostClient) -> Self {
        Self { client }
    }

    /// List groups
    ///
    /// # Arguments
    /// * `limit` - Number of items to return
    /// * `offset` - Number of items to skip before collecting the result set
    pub async fn list_groups(
        &self,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> SelfHostResult<Vec<Group>> {
        let mut req = self.client.request(Method::GET, "groups")?;
        req = SelfHostClient::with_pagination(req, limit, offset);

        self.client.execute_list(req).await
    }

    /// Create a new group
    ///
    /// # Arguments
    /// * `name` - Name of the group
    pub async fn create_group(&self, name: &str) -> SelfHostResult<Group> {
        info!("Creating group: {}", name);
        let req = self
            .client
            .request(Method::POST, "groups")?
            .json(&json!({ "name": name }));

        self.client.execute(req).await
    }

    /// Get a group by UUID
    pub async fn get_group(&self, group_uuid: &Uuid) -> SelfHostResult<Group> {
        let path = format!("groups/{}", group_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute(req).await
    }

    /// Rename a group
    pub async fn update_group(&self, group_uuid: &Uuid, name: &str) -> SelfHostResult<()> {
        info!("Updating group: {}", group_uuid);
        let path = format!("groups/{}", group_uuid);
        let req = self
            .client
            .request(Method::PUT, &path)?
            .json(&json!({ "name": name }));

        self.client.execute_unit(req).await
    }

    /// Delete a group
    pub async fn delete_group(&self, group_uuid: &Uuid) -> SelfHostResult<()> {
        info!("Deleting group: {}", group_uuid);
        let path = format!("groups/{}", group_uuid);
        let req = self.client.request(Method::DELETE, &path)?;

        self.client.execute_unit(req).await
    }

    /// List the policies associated with a group
    pub async fn get_group_policies(&self, group_uuid: &Uuid) -> SelfHostResult<Vec<Policy>> {
        let path = format!("groups/{}/policies", group_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute_list(req).await
    }
}
