use crate::{
    client::SelfHostClient,
    error::SelfHostResult,
    models::{Dataset, DatasetUpdate, NewDataset},
};
use bytes::Bytes;
use reqwest::Method;
use uuid::Uuid;

/// Dataset API operations
pub struct DatasetsApi<'a> {
    client: &'a SelfHostClient,
}

impl<'a> DatasetsApi<'a> {
    pub(crate) fn new(client: &'a SelfHostClient) -> Self {
        Self { client }
    }

    /// List datasets
    pub async fn list_datasets(
        &self,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> SelfHostResult<Vec<Dataset>> {
        let mut req = self.client.request(Method::GET, "datasets")?;
        req = SelfHostClient::with_pagination(req, limit, offset);

        self.client.execute_list(req).await
    }

    /// Create a new dataset
    pub async fn create_dataset(&self, dataset: &NewDataset) -> SelfHostResult<Dataset> {
        let req = self.client.request(Method::POST, "datasets")?.json(dataset);

        self.client.execute(req).await
    }

    /// Get a dataset's metadata by UUID
    pub async fn get_dataset(&self, dataset_uuid: &Uuid) -> SelfHostResult<Dataset> {
        let path = format!("datasets/{}", dataset_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute(req).await
    }

    /// Update a dataset; unset fields are left untouched.
    pub async fn update_dataset(
        &self,
        dataset_uuid: &Uuid,
        update: &DatasetUpdate,
    ) -> SelfHostResult<()> {
        let path = format!("datasets/{}", dataset_uuid);
        let req = self.client.request(Method::PUT, &path)?.json(update);

        self.client.execute_unit(req).await
    }

    /// Delete a dataset
    pub async fn delete_dataset(&self, dataset_uuid: &Uuid) -> SelfHostResult<()> {
        let path = format!("datasets/{}", dataset_uuid);
        let req = self.client.request(Method::DELETE, &path)?;

        self.client.execute_unit(req).await
    }

    /// Fetch a dataset's content verbatim.
    ///
    /// The body comes back exactly as stored, JSON or not; no decoding
    /// is attempted.
    pub async fn get_dataset_raw_content(&self, dataset_uuid: &Uuid) -> SelfHostResult<Bytes> {
        let path = format!("datasets/{}/raw", dataset_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute_bytes(req).await
    }
}
