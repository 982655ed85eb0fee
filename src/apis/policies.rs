use crate::{
    client::SelfHostClient,
    error::SelfHostResult,
    models::{NewPolicy, Policy, PolicyUpdate},
};
use reqwest::Method;
use uuid::Uuid;

/// Policy API operations
pub struct PoliciesApi<'a> {
    client: &'a SelfHostClient,
}

impl<'a> PoliciesApi<'a> {
    pub(crate) fn new(client: &'a SelfHostClient) -> Self {
        Self { client }
    }

    /// List policies, optionally restricted to a set of groups.
    ///
    /// Each entry of `group_uuids` is sent as its own `group_uuids`
    /// query parameter.
    pub async fn list_policies(
        &self,
        limit: Option<u64>,
        offset: Option<u64>,
        group_uuids: Option<&[Uuid]>,
    ) -> SelfHostResult<Vec<Policy>> {
        let mut req = self.client.request(Method::GET, "policies")?;
        req = SelfHostClient::with_pagination(req, limit, offset);
        req = SelfHostClient::with_repeated(req, "group_uuids", group_uuids);

        self.client.execute_list(req).await
    }

    /// Create a new policy
    pub async fn create_policy(&self, policy: &NewPolicy) -> SelfHostResult<Policy> {
        let req = self.client.request(Method::POST, "policies")?.json(policy);

        self.client.execute(req).await
    }

    /// Get a policy by UUID
    pub async fn get_policy(&self, policy_uuid: &Uuid) -> SelfHostResult<Policy> {
        let path = format!("policies/{}", policy_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute(req).await
    }

    /// Update a policy; unset fields are left untouched.
    pub async fn update_policy(
        &self,
        policy_uuid: &Uuid,
        update: &PolicyUpdate,
    ) -> SelfHostResult<()> {
        let path = format!("policies/{}", policy_uuid);
        let req = self.client.request(Method::PUT, &path)?.json(update);

        self.client.execute_unit(req).await
    }

    /// Delete a policy
    pub async fn delete_policy(&self, policy_uuid: &Uuid) -> SelfHostResult<()> {
        let path = format!("policies/{}", policy_uuid);
        let req = self.client.request(Method::DELETE, &path)?;

        self.client.execute_unit(req).await
    }
}
