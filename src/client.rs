use crate::{
    apis::{
        AlertsApi, DatasetsApi, GroupsApi, PoliciesApi, ProgramsApi, ThingsApi, TimeseriesApi,
        UsersApi,
    },
    auth::{BasicAuth, BASE_URL_VAR},
    error::{SelfHostError, SelfHostResult},
};
use bytes::Bytes;
use log::debug;
use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Fixed API version segment, prepended to every resource path.
const API_VERSION: &str = "v2";

/// Decoded body of a successful response.
///
/// A 2xx response either carries JSON, a non-JSON body that is handed
/// back verbatim (raw dataset content), or no body at all.
#[derive(Debug, Clone)]
pub(crate) enum Payload {
    Json(serde_json::Value),
    Raw(Bytes),
    Empty,
}

/// Client for the NODA Self-host API.
///
/// Owns the connection configuration (base URL and Basic-auth credential
/// pair) and a single `reqwest::Client` shared by every resource API.
#[derive(Debug, Clone)]
pub struct SelfHostClient {
    client: Client,
    base_url: Url,
    auth: BasicAuth,
}

impl SelfHostClient {
    /// Create a new Self-host client.
    ///
    /// Each omitted parameter falls back to its environment variable:
    /// `SELF_HOST_BASE_URL`, `SELF_HOST_USERNAME`, `SELF_HOST_PASSWORD`.
    /// A parameter that resolves to neither is a fatal configuration
    /// error; such a client can never work and must not be retried.
    pub fn new(
        base_url: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> SelfHostResult<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Self::with_client(client, base_url, username, password)
    }

    /// Create a new Self-host client configured entirely from the
    /// environment.
    pub fn from_env() -> SelfHostResult<Self> {
        Self::new(None, None, None)
    }

    /// Create a new Self-host client with a custom reqwest client.
    ///
    /// Timeouts and other transport policies belong on the injected
    /// client; this library sets none of its own.
    pub fn with_client(
        client: Client,
        base_url: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> SelfHostResult<Self> {
        let base_url = base_url
            .or_else(|| std::env::var(BASE_URL_VAR).ok())
            .ok_or_else(|| SelfHostError::config("No base_url provided to client"))?;
        let base_url = Url::parse(&base_url)?;
        let auth = BasicAuth::resolve(username, password)?;

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get Users API
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Get Groups API
    pub fn groups(&self) -> GroupsApi<'_> {
        GroupsApi::new(self)
    }

    /// Get Policies API
    pub fn policies(&self) -> PoliciesApi<'_> {
        PoliciesApi::new(self)
    }

    /// Get Things API
    pub fn things(&self) -> ThingsApi<'_> {
        ThingsApi::new(self)
    }

    /// Get Timeseries API
    pub fn timeseries(&self) -> TimeseriesApi<'_> {
        TimeseriesApi::new(self)
    }

    /// Get Datasets API
    pub fn datasets(&self) -> DatasetsApi<'_> {
        DatasetsApi::new(self)
    }

    /// Get Programs API
    pub fn programs(&self) -> ProgramsApi<'_> {
        ProgramsApi::new(self)
    }

    /// Get Alerts API
    pub fn alerts(&self) -> AlertsApi<'_> {
        AlertsApi::new(self)
    }

    /// Build an authenticated request to `{base}/v2/{path}`.
    pub(crate) fn request(&self, method: Method, path: &str) -> SelfHostResult<RequestBuilder> {
        let url = Url::parse(&format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            API_VERSION,
            path
        ))?;
        Ok(self
            .client
            .request(method, url)
            .header(header::AUTHORIZATION, self.auth.header_value()?))
    }

    /// Execute a request and decode the JSON response into `T`.
    pub(crate) async fn execute<T>(&self, request: RequestBuilder) -> SelfHostResult<T>
    where
        T: DeserializeOwned,
    {
        match self.process(request).await? {
            Payload::Json(value) => Ok(serde_json::from_value(value)?),
            Payload::Raw(_) => Err(SelfHostError::invalid_response(
                "expected a JSON body, got a raw body",
            )),
            Payload::Empty => Err(SelfHostError::invalid_response(
                "expected a JSON body, got an empty response",
            )),
        }
    }

    /// Execute a request and decode the JSON response into a list.
    ///
    /// A response without a body decodes to an empty list; the API
    /// answers 204 when a query matches nothing.
    pub(crate) async fn execute_list<T>(&self, request: RequestBuilder) -> SelfHostResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        match self.process(request).await? {
            Payload::Json(value) => Ok(serde_json::from_value(value)?),
            Payload::Empty => Ok(Vec::new()),
            Payload::Raw(_) => Err(SelfHostError::invalid_response(
                "expected a JSON list, got a raw body",
            )),
        }
    }

    /// Execute a request, discarding whatever a successful response
    /// carries. Used by updates and deletes, which return no payload.
    pub(crate) async fn execute_unit(&self, request: RequestBuilder) -> SelfHostResult<()> {
        self.process(request).await.map(|_| ())
    }

    /// Execute a request and return the body verbatim, bypassing JSON
    /// decoding entirely.
    pub(crate) async fn execute_bytes(&self, request: RequestBuilder) -> SelfHostResult<Bytes> {
        let response = request.send().await?;
        let status = response.status();
        debug!("API response: {} {}", status, response.url());

        if status.is_success() {
            Ok(response.bytes().await?)
        } else {
            Err(classify_status(status))
        }
    }

    /// Execute a request and interpret the response.
    async fn process(&self, request: RequestBuilder) -> SelfHostResult<Payload> {
        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Map a response to its payload or classified error.
    ///
    /// Success means 2xx. The body of an error response is never
    /// JSON-decoded; the status code alone picks the error.
    async fn handle_response(&self, response: Response) -> SelfHostResult<Payload> {
        let status = response.status();
        debug!("API response: {} {}", status, response.url());

        if !status.is_success() {
            return Err(classify_status(status));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Payload::Empty);
        }
        match serde_json::from_slice(&body) {
            Ok(value) => Ok(Payload::Json(value)),
            Err(_) => Ok(Payload::Raw(body)),
        }
    }

    /// Add pagination parameters to a request.
    pub(crate) fn with_pagination(
        request: RequestBuilder,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> RequestBuilder {
        let mut req = request;

        if let Some(limit) = limit {
            req = req.query(&[("limit", limit)]);
        }

        if let Some(offset) = offset {
            req = req.query(&[("offset", offset)]);
        }

        req
    }

    /// Encode a list-valued parameter as repeated same-named entries,
    /// preserving order. Unset lists are omitted entirely.
    pub(crate) fn with_repeated<T: ToString>(
        request: RequestBuilder,
        name: &str,
        values: Option<&[T]>,
    ) -> RequestBuilder {
        let mut req = request;

        if let Some(values) = values {
            for value in values {
                req = req.query(&[(name, value.to_string())]);
            }
        }

        req
    }
}

/// Classify an unsuccessful HTTP status.
///
/// The API enumerates seven client-error statuses; everything else,
/// unlisted 4xx included, collapses into `InternalServer`.
fn classify_status(status: StatusCode) -> SelfHostError {
    match status {
        StatusCode::BAD_REQUEST => SelfHostError::BadRequest,
        StatusCode::UNAUTHORIZED => SelfHostError::Unauthorized,
        StatusCode::FORBIDDEN => SelfHostError::Forbidden,
        StatusCode::NOT_FOUND => SelfHostError::NotFound,
        StatusCode::METHOD_NOT_ALLOWED => SelfHostError::MethodNotAllowed,
        StatusCode::CONFLICT => SelfHostError::Conflict,
        StatusCode::TOO_MANY_REQUESTS => SelfHostError::TooManyRequests,
        _ => SelfHostError::InternalServer {
            status: status.as_u16(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    fn test_client(base_url: &str) -> SelfHostClient {
        SelfHostClient::new(
            Some(base_url.to_string()),
            Some("user".to_string()),
            Some("pass".to_string()),
        )
        .expect("client construction")
    }

    #[test]
    fn request_url_has_version_segment() {
        let client = test_client("http://localhost:8080");
        let request = client
            .request(Method::GET, "users")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:8080/v2/users");
    }

    #[test]
    fn request_url_keeps_base_path_prefix() {
        let client = test_client("http://localhost:8080/noda/");
        let request = client
            .request(Method::GET, "things/abc")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/noda/v2/things/abc"
        );
    }

    #[test]
    fn request_carries_basic_auth_header() {
        let client = test_client("http://localhost:8080");
        let request = client
            .request(Method::GET, "users/me")
            .unwrap()
            .build()
            .unwrap();
        let value = request.headers().get(AUTHORIZATION).unwrap();
        // base64("user:pass")
        assert_eq!(value, "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn enumerated_statuses_classify_distinctly() {
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST),
            SelfHostError::BadRequest
        ));
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED),
            SelfHostError::Unauthorized
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN),
            SelfHostError::Forbidden
        ));
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND),
            SelfHostError::NotFound
        ));
        assert!(matches!(
            classify_status(StatusCode::METHOD_NOT_ALLOWED),
            SelfHostError::MethodNotAllowed
        ));
        assert!(matches!(
            classify_status(StatusCode::CONFLICT),
            SelfHostError::Conflict
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS),
            SelfHostError::TooManyRequests
        ));
    }

    #[test]
    fn unlisted_statuses_fall_through_to_internal_server() {
        for status in [402u16, 410, 418, 422, 500, 502, 503] {
            let classified = classify_status(StatusCode::from_u16(status).unwrap());
            assert!(
                matches!(classified, SelfHostError::InternalServer { status: s } if s == status),
                "status {status} should classify as InternalServer"
            );
        }
    }
}
