//! OAuth token acquisition.
//!
//! Two grants are supported against the environment's token endpoint:
//! `client_credentials` for plain API clients and `password` for service
//! accounts. [`TokenClient::acquire_token_with_service_account`] tries the
//! service account first and falls back to client credentials, reporting the
//! path taken as a [`TokenAuthMode`].

use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::environment::Environment;
use crate::error::{RaasError, ValidationError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};

pub const TOKEN_SCOPE: &str = "raas.all";
pub const TOKEN_AUDIENCE: &str = "https://api.tangocard.com/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    ClientCredentials,
    Password,
}

impl GrantType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClientCredentials => "client_credentials",
            Self::Password => "password",
        }
    }
}

/// Form body for the token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
    pub audience: String,
    pub grant_type: GrantType,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl TokenRequest {
    pub fn client_credentials(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.to_owned(),
            client_secret: client_secret.to_owned(),
            scope: String::from(TOKEN_SCOPE),
            audience: String::from(TOKEN_AUDIENCE),
            grant_type: GrantType::ClientCredentials,
            username: None,
            password: None,
        }
    }

    pub fn service_account(
        client_id: &str,
        client_secret: &str,
        username: &str,
        password: &str,
    ) -> Self {
        Self {
            grant_type: GrantType::Password,
            username: Some(username.to_owned()),
            password: Some(password.to_owned()),
            ..Self::client_credentials(client_id, client_secret)
        }
    }

    /// Ordered form fields; username/password only appear for the password grant.
    pub fn form_fields(&self) -> Vec<(&str, &str)> {
        let mut fields = vec![
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        if let Some(username) = &self.username {
            fields.push(("username", username.as_str()));
        }
        if let Some(password) = &self.password {
            fields.push(("password", password.as_str()));
        }
        fields.push(("scope", self.scope.as_str()));
        fields.push(("audience", self.audience.as_str()));
        fields.push(("grant_type", self.grant_type.as_str()));
        fields
    }
}

impl Debug for TokenRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .field("audience", &self.audience)
            .field("grant_type", &self.grant_type)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    pub access_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub token_type: String,
}

impl Debug for TokenResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .field("scope", &self.scope)
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Which grant produced the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenAuthMode {
    ServiceAccount,
    ClientCredentials,
    ClientCredentialsFallback,
}

impl TokenAuthMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServiceAccount => "service_account",
            Self::ClientCredentials => "client_credentials",
            Self::ClientCredentialsFallback => "client_credentials_fallback",
        }
    }
}

impl Display for TokenAuthMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token endpoint client.
#[derive(Clone)]
pub struct TokenClient {
    http_client: Arc<dyn HttpClient>,
    endpoint: Option<String>,
    timeout_ms: u64,
}

impl Default for TokenClient {
    fn default() -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::default()))
    }
}

impl TokenClient {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            endpoint: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Overrides the environment's token URL (mock servers, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn token_url(&self, environment: Environment) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| environment.token_url())
    }

    /// Acquires a token with the `client_credentials` grant.
    ///
    /// # Errors
    ///
    /// - [`RaasError::Validation`] for a blank client id, secret or environment,
    ///   or an environment other than `production`/`sandbox`
    /// - [`RaasError::TokenRequest`] when the endpoint answers anything but 200
    /// - [`RaasError::Transport`] / [`RaasError::Decode`] otherwise
    #[instrument(skip_all, fields(environment = %environment))]
    pub async fn acquire_token(
        &self,
        client_id: &str,
        client_secret: &str,
        environment: &str,
    ) -> Result<TokenResponse, RaasError> {
        let environment = validate_credentials(client_id, client_secret, environment)?;
        self.request_token(
            &TokenRequest::client_credentials(client_id, client_secret),
            environment,
        )
        .await
    }

    /// Acquires a token, preferring the service-account `password` grant.
    ///
    /// With both `username` and `password` present the password grant is
    /// tried first; on any failure the client-credentials grant is used
    /// instead. Without them only the client-credentials grant is tried.
    #[instrument(skip_all, fields(environment = %environment))]
    pub async fn acquire_token_with_service_account(
        &self,
        client_id: &str,
        client_secret: &str,
        username: &str,
        password: &str,
        environment: &str,
    ) -> Result<(TokenResponse, TokenAuthMode), RaasError> {
        let environment = validate_credentials(client_id, client_secret, environment)?;
        let client_credentials = TokenRequest::client_credentials(client_id, client_secret);

        if is_blank(username) || is_blank(password) {
            debug!("service account credentials not provided; using client credentials");
            let token = self.request_token(&client_credentials, environment).await?;
            return Ok((token, TokenAuthMode::ClientCredentials));
        }

        let service_account =
            TokenRequest::service_account(client_id, client_secret, username, password);
        let primary = match self.request_token(&service_account, environment).await {
            Ok(token) => {
                info!(mode = %TokenAuthMode::ServiceAccount, "token acquired");
                return Ok((token, TokenAuthMode::ServiceAccount));
            }
            Err(error) => error,
        };

        warn!(error = %primary, "service account grant failed; falling back to client credentials");
        match self.request_token(&client_credentials, environment).await {
            Ok(token) => {
                info!(mode = %TokenAuthMode::ClientCredentialsFallback, "token acquired");
                Ok((token, TokenAuthMode::ClientCredentialsFallback))
            }
            Err(fallback) => Err(RaasError::TokenFallback {
                service_account: Box::new(primary),
                client_credentials: Box::new(fallback),
            }),
        }
    }

    async fn request_token(
        &self,
        request: &TokenRequest,
        environment: Environment,
    ) -> Result<TokenResponse, RaasError> {
        let url = self.token_url(environment);
        debug!(url = %url, grant_type = request.grant_type.as_str(), "requesting token");

        let http_request = HttpRequest::post(url)
            .with_header("accept", "application/json")
            .with_form_body(request.form_fields())
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(http_request).await?;

        if response.status != 200 {
            return Err(RaasError::TokenRequest {
                status: response.status,
                status_text: response.reason().to_owned(),
                body: response.body.trim().to_owned(),
            });
        }

        serde_json::from_str(&response.body).map_err(|error| RaasError::decode("token", error))
    }
}

/// Acquires a client-credentials token using the default reqwest transport.
pub async fn acquire_token(
    client_id: &str,
    client_secret: &str,
    environment: &str,
) -> Result<TokenResponse, RaasError> {
    TokenClient::default()
        .acquire_token(client_id, client_secret, environment)
        .await
}

/// Service-account token with client-credentials fallback, using the default
/// reqwest transport.
pub async fn acquire_token_with_service_account(
    client_id: &str,
    client_secret: &str,
    username: &str,
    password: &str,
    environment: &str,
) -> Result<(TokenResponse, TokenAuthMode), RaasError> {
    TokenClient::default()
        .acquire_token_with_service_account(
            client_id,
            client_secret,
            username,
            password,
            environment,
        )
        .await
}

fn validate_credentials(
    client_id: &str,
    client_secret: &str,
    environment: &str,
) -> Result<Environment, ValidationError> {
    if is_blank(client_id) {
        return Err(ValidationError::MissingField { field: "client_id" });
    }
    if is_blank(client_secret) {
        return Err(ValidationError::MissingField {
            field: "client_secret",
        });
    }
    Environment::parse(environment)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::{HttpError, HttpResponse};
    use crate::test_support::{form_value, RecordingHttpClient};

    const SERVICE_TOKEN: &str = r#"{"access_token":"service-account-token","scope":"raas.all","expires_in":86400,"token_type":"Bearer"}"#;
    const FALLBACK_TOKEN: &str = r#"{"access_token":"fallback-token","scope":"raas.all","expires_in":86400,"token_type":"Bearer"}"#;

    fn token_client(http: &Arc<RecordingHttpClient>) -> TokenClient {
        TokenClient::with_http_client(http.clone())
            .with_endpoint("https://auth.example.test/oauth/token")
    }

    fn grant_type(request: &HttpRequest) -> String {
        form_value(request, "grant_type").unwrap_or_default()
    }

    #[test]
    fn client_credentials_request_has_no_service_account_fields() {
        let request = TokenRequest::client_credentials("client-id", "client-secret");

        assert_eq!(request.grant_type, GrantType::ClientCredentials);
        assert_eq!(request.username, None);
        assert_eq!(request.password, None);
        assert!(request
            .form_fields()
            .iter()
            .all(|(name, _)| *name != "username" && *name != "password"));
    }

    #[test]
    fn service_account_request_uses_password_grant() {
        let request =
            TokenRequest::service_account("client-id", "client-secret", "svc-user", "svc-pass");

        assert_eq!(request.grant_type.as_str(), "password");
        assert_eq!(request.username.as_deref(), Some("svc-user"));
        assert_eq!(request.password.as_deref(), Some("svc-pass"));
        assert_eq!(request.client_id, "client-id");
        assert_eq!(request.scope, TOKEN_SCOPE);
        assert_eq!(request.audience, TOKEN_AUDIENCE);
    }

    #[test]
    fn debug_output_hides_secrets() {
        let request =
            TokenRequest::service_account("client-id", "client-secret", "svc-user", "svc-pass");
        let rendered = format!("{request:?}");
        assert!(!rendered.contains("client-secret"));
        assert!(!rendered.contains("svc-pass"));

        let response = TokenResponse {
            access_token: String::from("abc123"),
            ..TokenResponse::default()
        };
        assert!(!format!("{response:?}").contains("abc123"));
    }

    #[tokio::test]
    async fn invalid_inputs_fail_before_any_request() {
        let http = Arc::new(RecordingHttpClient::responding(200, FALLBACK_TOKEN));
        let client = token_client(&http);

        let cases = [
            ("", "secret", "sandbox", "client_id"),
            ("  ", "secret", "production", "client_id"),
            ("id", "", "sandbox", "client_secret"),
            ("id", "secret", "", "environment"),
        ];
        for (id, secret, environment, field) in cases {
            let error = client
                .acquire_token(id, secret, environment)
                .await
                .expect_err("validation must fail");
            assert!(
                matches!(error, RaasError::Validation(ValidationError::MissingField { field: f }) if f == field),
                "unexpected error for field {field}: {error}"
            );
        }

        let error = client
            .acquire_token_with_service_account("id", "secret", "user", "pass", "dev")
            .await
            .expect_err("invalid environment must fail");
        assert!(matches!(
            error,
            RaasError::Validation(ValidationError::InvalidEnvironment { .. })
        ));

        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn client_credentials_request_is_form_encoded() {
        let http = Arc::new(RecordingHttpClient::responding(200, FALLBACK_TOKEN));

        let token = token_client(&http)
            .acquire_token("client-id", "client-secret", "sandbox")
            .await
            .expect("token should be issued");
        assert_eq!(token.access_token, "fallback-token");
        assert_eq!(token.expires_in, 86_400);

        let requests = http.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(grant_type(&requests[0]), "client_credentials");
        assert_eq!(form_value(&requests[0], "scope").as_deref(), Some("raas.all"));
        assert_eq!(
            form_value(&requests[0], "audience").as_deref(),
            Some("https://api.tangocard.com/")
        );
    }

    #[tokio::test]
    async fn default_endpoint_follows_environment() {
        let http = Arc::new(RecordingHttpClient::responding(200, FALLBACK_TOKEN));
        let client = TokenClient::with_http_client(http.clone());

        client
            .acquire_token("client-id", "client-secret", "sandbox")
            .await
            .expect("sandbox token");
        client
            .acquire_token("client-id", "client-secret", "production")
            .await
            .expect("production token");

        let urls: Vec<String> = http.recorded_requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                String::from("https://sandbox-auth.tangocard.com/oauth/token"),
                String::from("https://auth.tangocard.com/oauth/token"),
            ]
        );
    }

    #[tokio::test]
    async fn non_200_status_is_a_token_request_error_even_with_json_body() {
        let http = Arc::new(RecordingHttpClient::responding(201, FALLBACK_TOKEN));

        let error = token_client(&http)
            .acquire_token("client-id", "client-secret", "sandbox")
            .await
            .expect_err("201 is not accepted");

        match error {
            RaasError::TokenRequest {
                status,
                status_text,
                ..
            } => {
                assert_eq!(status, 201);
                assert_eq!(status_text, "Created");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn blank_username_or_password_uses_plain_client_credentials() {
        for (username, password) in [("", "svc-pass"), ("svc-user", " ")] {
            let http = Arc::new(RecordingHttpClient::responding(200, FALLBACK_TOKEN));

            let (token, mode) = token_client(&http)
                .acquire_token_with_service_account(
                    "client-id",
                    "client-secret",
                    username,
                    password,
                    "sandbox",
                )
                .await
                .expect("client credentials token");

            assert_eq!(mode, TokenAuthMode::ClientCredentials);
            assert_eq!(token.access_token, "fallback-token");
            let requests = http.recorded_requests();
            assert_eq!(requests.len(), 1);
            assert_eq!(grant_type(&requests[0]), "client_credentials");
        }
    }

    #[tokio::test]
    async fn accepted_password_grant_skips_fallback() {
        let http = Arc::new(RecordingHttpClient::new(|request| {
            assert_eq!(form_value(request, "grant_type").as_deref(), Some("password"));
            Ok(HttpResponse::ok_json(SERVICE_TOKEN))
        }));

        let (token, mode) = token_client(&http)
            .acquire_token_with_service_account(
                "client-id",
                "client-secret",
                "svc-user",
                "svc-pass",
                "sandbox",
            )
            .await
            .expect("service account token");

        assert_eq!(mode, TokenAuthMode::ServiceAccount);
        assert_eq!(token.access_token, "service-account-token");
        let requests = http.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(form_value(&requests[0], "username").as_deref(), Some("svc-user"));
    }

    #[tokio::test]
    async fn rejected_password_grant_falls_back_to_client_credentials() {
        let http = Arc::new(RecordingHttpClient::new(|request| {
            match form_value(request, "grant_type").as_deref() {
                Some("password") => Ok(HttpResponse::new(
                    403,
                    r#"{"error":"unauthorized_client","error_description":"Grant type 'password' not allowed for the client."}"#,
                )),
                Some("client_credentials") => Ok(HttpResponse::ok_json(FALLBACK_TOKEN)),
                _ => Ok(HttpResponse::new(400, r#"{"error":"unsupported_grant_type"}"#)),
            }
        }));

        let (token, mode) = token_client(&http)
            .acquire_token_with_service_account(
                "client-id",
                "client-secret",
                "svc-user",
                "svc-pass",
                "sandbox",
            )
            .await
            .expect("fallback token");

        assert_eq!(mode, TokenAuthMode::ClientCredentialsFallback);
        assert_eq!(token.access_token, "fallback-token");
        let grants: Vec<String> = http.recorded_requests().iter().map(grant_type).collect();
        assert_eq!(grants, vec!["password", "client_credentials"]);
    }

    #[tokio::test]
    async fn both_grants_failing_reports_both_errors() {
        let http = Arc::new(RecordingHttpClient::new(|request| {
            match form_value(request, "grant_type").as_deref() {
                Some("password") => Ok(HttpResponse::new(403, "password grant not allowed")),
                _ => Err(HttpError::new("connection refused")),
            }
        }));

        let error = token_client(&http)
            .acquire_token_with_service_account(
                "client-id",
                "client-secret",
                "svc-user",
                "svc-pass",
                "sandbox",
            )
            .await
            .expect_err("both grants fail");

        match &error {
            RaasError::TokenFallback {
                service_account,
                client_credentials,
            } => {
                assert_eq!(service_account.status(), Some(403));
                assert!(matches!(**client_credentials, RaasError::Transport(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
        let text = error.to_string();
        assert!(text.contains("password grant not allowed"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn auth_modes_render_as_snake_case() {
        assert_eq!(TokenAuthMode::ServiceAccount.to_string(), "service_account");
        assert_eq!(
            serde_json::to_string(&TokenAuthMode::ClientCredentialsFallback).expect("serialize"),
            "\"client_credentials_fallback\""
        );
    }
}
