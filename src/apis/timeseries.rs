use crate::{
    client::SelfHostClient,
    error::SelfHostResult,
    models::{DataFilter, DataPoint, NewTimeseries, Timeseries, TimeseriesData, TimeseriesUpdate},
};
use chrono::{DateTime, FixedOffset};
use log::{debug, info};
use reqwest::{Method, RequestBuilder};
use uuid::Uuid;

/// Timeseries API operations
///
/// Covers the timeseries collection itself, the per-series `/data`
/// sub-resource, and the top-level `/tsquery` bulk endpoint.
pub struct TimeseriesApi<'a> {
    client: &'a SelfHostClient,
}

impl<'a> TimeseriesApi<'a> {
    pub(crate) fn new(client: &'a SelfHostClient) -> Self {
        Self { client }
    }

    /// List timeseries, optionally filtered by tags.
    ///
    /// # Arguments
    /// * `limit` - Number of items to return
    /// * `offset` - Number of items to skip before collecting the result set
    /// * `tags` - Tags to match on; each is sent as its own `tags` parameter
    pub async fn list_timeseries(
        &self,
        limit: Option<u64>,
        offset: Option<u64>,
        tags: Option<&[String]>,
    ) -> SelfHostResult<Vec<Timeseries>> {
        let mut req = self.client.request(Method::GET, "timeseries")?;
        req = SelfHostClient::with_pagination(req, limit, offset);
        req = SelfHostClient::with_repeated(req, "tags", tags);

        self.client.execute_list(req).await
    }

    /// Create a new timeseries
    pub async fn create_timeseries(&self, timeseries: &NewTimeseries) -> SelfHostResult<Timeseries> {
        info!("Creating timeseries: {}", timeseries.name);
        debug!("Request body: {:?}", timeseries);
        let req = self
            .client
            .request(Method::POST, "timeseries")?
            .json(timeseries);

        self.client.execute(req).await
    }

    /// Get a timeseries by UUID
    pub async fn get_timeseries(&self, timeseries_uuid: &Uuid) -> SelfHostResult<Timeseries> {
        let path = format!("timeseries/{}", timeseries_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute(req).await
    }

    /// Update a timeseries; unset fields are left untouched.
    pub async fn update_timeseries(
        &self,
        timeseries_uuid: &Uuid,
        update: &TimeseriesUpdate,
    ) -> SelfHostResult<()> {
        info!("Updating timeseries: {}", timeseries_uuid);
        debug!("Request body: {:?}", update);
        let path = format!("timeseries/{}", timeseries_uuid);
        let req = self.client.request(Method::PUT, &path)?.json(update);

        self.client.execute_unit(req).await
    }

    /// Delete a timeseries
    pub async fn delete_timeseries(&self, timeseries_uuid: &Uuid) -> SelfHostResult<()> {
        info!("Deleting timeseries: {}", timeseries_uuid);
        let path = format!("timeseries/{}", timeseries_uuid);
        let req = self.client.request(Method::DELETE, &path)?;

        self.client.execute_unit(req).await
    }

    /// Fetch a range of data points from one timeseries.
    ///
    /// `start` and `end` are serialized as RFC 3339 date-time strings;
    /// the period can not exceed 1 year. The server answers 204 when
    /// the range holds no points, which decodes to an empty vector.
    ///
    /// # Arguments
    /// * `timeseries_uuid` - UUID of the timeseries to query
    /// * `start` - Start (>=) of the time period
    /// * `end` - End (<=) of the time period
    /// * `filter` - Optional query refinements
    pub async fn get_timeseries_data(
        &self,
        timeseries_uuid: &Uuid,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        filter: &DataFilter,
    ) -> SelfHostResult<Vec<DataPoint>> {
        let path = format!("timeseries/{}/data", timeseries_uuid);
        let mut req = self.client.request(Method::GET, &path)?;
        req = req.query(&[("start", start.to_rfc3339()), ("end", end.to_rfc3339())]);
        req = with_data_filter(req, filter);

        self.client.execute_list(req).await
    }

    /// Add data points to a timeseries.
    ///
    /// Timestamps are serialized as RFC 3339 date-time strings in the
    /// request body.
    ///
    /// # Arguments
    /// * `timeseries_uuid` - UUID of the target timeseries
    /// * `data_points` - Points to insert
    /// * `unit` - SI unit of the supplied values; the server casts when
    ///   it differs from the stored unit
    pub async fn create_timeseries_data(
        &self,
        timeseries_uuid: &Uuid,
        data_points: &[DataPoint],
        unit: Option<&str>,
    ) -> SelfHostResult<()> {
        info!(
            "Inserting {} data points into timeseries {}",
            data_points.len(),
            timeseries_uuid
        );
        let path = format!("timeseries/{}/data", timeseries_uuid);
        let mut req = self.client.request(Method::POST, &path)?;
        if let Some(unit) = unit {
            req = req.query(&[("unit", unit)]);
        }
        debug!("Request body: {:?}", data_points);
        req = req.json(&data_points);

        self.client.execute_unit(req).await
    }

    /// Delete a range of data points from a timeseries.
    ///
    /// # Arguments
    /// * `timeseries_uuid` - UUID of the target timeseries
    /// * `start` - Start (>=) of the time period
    /// * `end` - End (<=) of the time period
    /// * `ge` - Only delete values >= this
    /// * `le` - Only delete values <= this
    pub async fn delete_timeseries_data(
        &self,
        timeseries_uuid: &Uuid,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        ge: Option<i64>,
        le: Option<i64>,
    ) -> SelfHostResult<()> {
        info!("Deleting data from timeseries {}", timeseries_uuid);
        let path = format!("timeseries/{}/data", timeseries_uuid);
        let mut req = self.client.request(Method::DELETE, &path)?;
        req = req.query(&[("start", start.to_rfc3339()), ("end", end.to_rfc3339())]);
        if let Some(ge) = ge {
            req = req.query(&[("ge", ge)]);
        }
        if let Some(le) = le {
            req = req.query(&[("le", le)]);
        }

        self.client.execute_unit(req).await
    }

    /// Fetch data from several timeseries in one request.
    ///
    /// Goes through the top-level `/tsquery` endpoint rather than the
    /// per-series sub-resource. Each UUID is sent as its own `uuids`
    /// query parameter and yields one result bucket.
    pub async fn get_multiple_timeseries_data(
        &self,
        uuids: &[Uuid],
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        filter: &DataFilter,
    ) -> SelfHostResult<Vec<TimeseriesData>> {
        let mut req = self.client.request(Method::GET, "tsquery")?;
        req = SelfHostClient::with_repeated(req, "uuids", Some(uuids));
        req = req.query(&[("start", start.to_rfc3339()), ("end", end.to_rfc3339())]);
        req = with_data_filter(req, filter);

        self.client.execute_list(req).await
    }
}

/// Attach the set fields of a data filter as query parameters.
fn with_data_filter(request: RequestBuilder, filter: &DataFilter) -> RequestBuilder {
    let mut req = request;

    if let Some(unit) = &filter.unit {
        req = req.query(&[("unit", unit)]);
    }
    if let Some(ge) = filter.ge {
        req = req.query(&[("ge", ge)]);
    }
    if let Some(le) = filter.le {
        req = req.query(&[("le", le)]);
    }
    if let Some(precision) = filter.precision {
        req = req.query(&[("precision", precision.as_str())]);
    }
    if let Some(aggregate) = filter.aggregate {
        req = req.query(&[("aggregate", aggregate.as_str())]);
    }
    if let Some(timezone) = &filter.timezone {
        req = req.query(&[("timezone", timezone)]);
    }

    req
}
