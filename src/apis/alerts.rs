use crate::{
    client::SelfHostClient,
    error::SelfHostResult,
    models::{Alert, AlertFilter, AlertUpdate, CreatedAlert, NewAlert},
};
use log::debug;
use reqwest::Method;
use uuid::Uuid;

/// Alert API operations
pub struct AlertsApi<'a> {
    client: &'a SelfHostClient,
}

impl<'a> AlertsApi<'a> {
    pub(crate) fn new(client: &'a SelfHostClient) -> Self {
        Self { client }
    }

    /// List alerts matching a filter.
    ///
    /// Unset filter fields are omitted from the query; `tags` and
    /// `service` encode as repeated parameters.
    pub async fn list_alerts(&self, filter: &AlertFilter) -> SelfHostResult<Vec<Alert>> {
        let mut req = self.client.request(Method::GET, "alerts")?;
        req = SelfHostClient::with_pagination(req, filter.limit, filter.offset);

        if let Some(resource) = &filter.resource {
            req = req.query(&[("resource", resource)]);
        }
        if let Some(environment) = &filter.environment {
            req = req.query(&[("environment", environment)]);
        }
        if let Some(event) = &filter.event {
            req = req.query(&[("event", event)]);
        }
        if let Some(origin) = &filter.origin {
            req = req.query(&[("origin", origin)]);
        }
        if let Some(status) = &filter.status {
            req = req.query(&[("status", status)]);
        }
        if let Some(severity_le) = &filter.severity_le {
            req = req.query(&[("severity_le", severity_le)]);
        }
        if let Some(severity_ge) = &filter.severity_ge {
            req = req.query(&[("severity_ge", severity_ge)]);
        }
        if let Some(severity) = &filter.severity {
            req = req.query(&[("severity", severity)]);
        }
        req = SelfHostClient::with_repeated(req, "tags", filter.tags.as_deref());
        req = SelfHostClient::with_repeated(req, "service", filter.service.as_deref());

        self.client.execute_list(req).await
    }

    /// Raise a new alert. Only the new alert's UUID comes back.
    pub async fn create_alert(&self, alert: &NewAlert) -> SelfHostResult<CreatedAlert> {
        debug!("Request body: {:?}", alert);
        let req = self.client.request(Method::POST, "alerts")?.json(alert);

        self.client.execute(req).await
    }

    /// Get an alert by UUID
    pub async fn get_alert(&self, alert_uuid: &Uuid) -> SelfHostResult<Alert> {
        let path = format!("alerts/{}", alert_uuid);
        let req = self.client.request(Method::GET, &path)?;

        self.client.execute(req).await
    }

    /// Update an alert; unset fields are left untouched.
    pub async fn update_alert(&self, alert_uuid: &Uuid, update: &AlertUpdate) -> SelfHostResult<()> {
        debug!("Request body: {:?}", update);
        let path = format!("alerts/{}", alert_uuid);
        let req = self.client.request(Method::PUT, &path)?.json(update);

        self.client.execute_unit(req).await
    }

    /// Delete an alert
    pub async fn delete_alert(&self, alert_uuid: &Uuid) -> SelfHostResult<()> {
        let path = format!("alerts/{}", alert_uuid);
        let req = self.client.request(Method::DELETE, &path)?;

        self.client.execute_unit(req).await
    }
}
