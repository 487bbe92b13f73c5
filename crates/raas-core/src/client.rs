use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ensure_success, RaasError};
use crate::http_client::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient, DEFAULT_TIMEOUT_MS,
};

/// Authenticated client for the RaaS resource endpoints.
///
/// Cheap to clone: the transport is shared and the configuration is
/// immutable. Endpoint methods live in [`crate::resources`].
#[derive(Clone)]
pub struct RaasClient {
    http_client: Arc<dyn HttpClient>,
    config: ClientConfig,
    timeout_ms: u64,
}

impl RaasClient {
    /// Builds a client over the default reqwest transport.
    ///
    /// `environment` is parsed leniently; blank or unknown values target
    /// production.
    pub fn new(
        token: &str,
        account_identifier: &str,
        send_email: bool,
        environment: &str,
    ) -> Result<Self, RaasError> {
        let config = ClientConfig::new(token, account_identifier, send_email, environment)?;
        Ok(Self::with_http_client(
            config,
            Arc::new(ReqwestHttpClient::default()),
        ))
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            config,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub(crate) fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{}", self.config.base_url(), path))
            .with_bearer_token(self.config.token())
            .with_header("content-type", "application/json")
            .with_timeout_ms(self.timeout_ms)
    }

    pub(crate) fn json_request<B>(
        &self,
        path: &str,
        body: &B,
        operation: &str,
    ) -> Result<HttpRequest, RaasError>
    where
        B: Serialize + ?Sized,
    {
        let body =
            serde_json::to_string(body).map_err(|error| RaasError::encode(operation, error))?;
        Ok(self.request(HttpMethod::Post, path).with_json_body(body))
    }

    pub(crate) async fn send(&self, request: HttpRequest) -> Result<HttpResponse, RaasError> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.http_client.execute(request).await?;
        debug!(
            method = method.as_str(),
            url = %url,
            status = response.status,
            "response received"
        );
        Ok(response)
    }

    pub(crate) async fn get_json<T>(&self, path: &str, operation: &str) -> Result<T, RaasError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(self.request(HttpMethod::Get, path)).await?;
        ensure_success(&response, operation)?;
        decode_body(&response, operation)
    }

    pub(crate) async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        operation: &str,
    ) -> Result<T, RaasError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.json_request(path, body, operation)?;
        let response = self.send(request).await?;
        ensure_success(&response, operation)?;
        decode_body(&response, operation)
    }
}

impl Debug for RaasClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RaasClient")
            .field("config", &self.config)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}

pub(crate) fn decode_body<T>(response: &HttpResponse, operation: &str) -> Result<T, RaasError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(&response.body).map_err(|error| RaasError::decode(operation, error))
}

/// Percent-encodes a caller-supplied identifier for use as one path segment.
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
