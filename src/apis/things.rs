use crate::{
    client::SelfHostClient,
    error::SelfHostResult,
    models::{Dataset, NewThing, Thing, ThingUpdate, Timeseries},
};
use log::debug;
use reqwest::Method;
use uuid::Uuid;

/// Thing API operations
pub struct ThingsApi<'a> {
    client: &'a SelfHostClient,
}

impl<'a> ThingsApi<'a> {
    pub(crate) fn new(client: &'a SelfHostClient) -> Self {
        Self { client }
    }

    /// List things, optionally filtered by tags.
    ///
    /// Each tag is sent as its own `tags` query parameter.
    pub async fn list_things(
        &self,
        limit: Option<u64>,
        offset: Option<u64>,
        tags: Option<&[String]>,
    ) -> SelfHostResult<Vec<Thing>> {
        let mut req = self.client.request(Method::GET, "things")?;
        req = SelfHostClient::with_pagination(req, limit, offset);
        req = SelfHostClient::with_repeated(req, "tags", tags);

        self.client.execute_list(req).await
    }

    /// Create a new thing
    pub async fn create_thing(&self, thing: &NewThing) -> SelfHostResult<Thing> {
        debug!("Request body: {:?}", thing);
        let req = self.client.request(Method::POST, "things")?.json(thing);

        self.client.execute(req).await
    }

    /// Get a thing by UUID
    pub async fn get_thing(&self, thing_uuid: &Uuid) -> SelfHostResult<Thing> {
        let path = format!("things/{}", thing_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute(req).await
    }

    /// Update a thing; unset fields are left untouched.
    pub async fn update_thing(&self, thing_uuid: &Uuid, update: &ThingUpdate) -> SelfHostResult<()> {
        debug!("Request body: {:?}", update);
        let path = format!("things/{}", thing_uuid);
        let req = self.client.request(Method::PUT, &path)?.json(update);

        self.client.execute_unit(req).await
    }

    /// Delete a thing
    pub async fn delete_thing(&self, thing_uuid: &Uuid) -> SelfHostResult<()> {
        let path = format!("things/{}", thing_uuid);
        let req = self.client.request(Method::DELETE, &path)?;

        self.client.execute_unit(req).await
    }

    /// List the datasets tracked to a thing
    pub async fn get_thing_datasets(&self, thing_uuid: &Uuid) -> SelfHostResult<Vec<Dataset>> {
        let path = format!("things/{}/datasets", thing_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute_list(req).await
    }

    /// List the timeseries bound to a thing
    pub async fn get_thing_timeseries(&self, thing_uuid: &Uuid) -> SelfHostResult<Vec<Timeseries>> {
        let path = format!("things/{}/timeseries", thing_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute_list(req).await
    }
}
