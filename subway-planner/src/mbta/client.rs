//! MBTA v3 API HTTP client.
//!
//! Fetches subway routes and the stops on each route. Requests are made one
//! at a time with a fixed timeout and are never retried.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::MbtaError;
use super::source::TransitDataSource;
use super::types::{RouteRecord, RoutesResponse, StopRecord, StopsResponse};

/// Default base URL for the MBTA v3 API.
const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Route types that make up the subway: light rail and heavy rail.
const SUBWAY_ROUTE_TYPES: &str = "0,1";

/// Configuration for the MBTA client.
///
/// Credentials live here rather than in process-wide state; the client owns
/// a copy for as long as it is alive.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// API key, sent as the `x-api-key` header and as the basic-auth password
    pub api_key: String,
    /// Username, sent as the basic-auth user
    pub username: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MbtaConfig {
    /// Create a new config with the given credentials.
    pub fn new(api_key: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            username: username.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// MBTA v3 API client.
#[derive(Debug, Clone)]
pub struct MbtaClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    api_key: String,
}

impl MbtaClient {
    /// Create a new MBTA client with the given configuration.
    pub fn new(config: MbtaConfig) -> Result<Self, MbtaError> {
        let mut headers = HeaderMap::new();

        // An empty key is allowed: the API serves anonymous requests at a
        // lower rate limit.
        if !config.api_key.is_empty() {
            let api_key = HeaderValue::from_str(&config.api_key)
                .map_err(|_| MbtaError::InvalidCredentials("API key is not a valid header value"))?;
            headers.insert(HeaderName::from_static("x-api-key"), api_key);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username,
            api_key: config.api_key,
        })
    }

    /// GET `{base_url}/{path}` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, MbtaError> {
        let url = format!("{}/{}", self.base_url, path);

        let mut request = self.http.get(&url).query(query);
        if !self.username.is_empty() {
            request = request.basic_auth(&self.username, Some(&self.api_key));
        }

        let response = request.send().await?;
        let status = response.status();

        let body = if status.is_success() {
            response.text().await?
        } else {
            response.text().await.unwrap_or_default()
        };

        decode_response(status, body)
    }
}

/// Longest body excerpt kept on a decode error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Turn a status and body into the decoded payload or the matching error.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: String) -> Result<T, MbtaError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(MbtaError::Unauthorized);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(MbtaError::RateLimited);
    }

    if !status.is_success() {
        return Err(MbtaError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    serde_json::from_str(&body).map_err(|e| MbtaError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
    })
}

impl TransitDataSource for MbtaClient {
    async fn fetch_subway_routes(&self) -> Result<Vec<RouteRecord>, MbtaError> {
        let response: RoutesResponse = self
            .get_json("routes", &[("filter[type]", SUBWAY_ROUTE_TYPES)])
            .await?;
        debug!(routes = response.data.len(), "Fetched subway routes");
        Ok(response.data)
    }

    async fn fetch_stops_for_route(&self, route_id: &str) -> Result<Vec<StopRecord>, MbtaError> {
        let response: StopsResponse = self
            .get_json("stops", &[("filter[route]", route_id)])
            .await?;
        debug!(route = route_id, stops = response.data.len(), "Fetched stops");
        Ok(response.data)
    }
}
