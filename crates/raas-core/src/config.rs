use crate::environment::Environment;
use crate::error::ValidationError;

/// Immutable settings shared by every call a [`crate::RaasClient`] makes.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    environment: Environment,
    token: String,
    account_identifier: String,
    send_email: bool,
    base_url: Option<String>,
}

impl ClientConfig {
    /// Builds a configuration from a bearer token and account.
    ///
    /// The environment is parsed leniently: anything other than `sandbox`
    /// targets production.
    pub fn new(
        token: &str,
        account_identifier: &str,
        send_email: bool,
        environment: &str,
    ) -> Result<Self, ValidationError> {
        if token.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "token" });
        }
        if account_identifier.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "account_identifier",
            });
        }

        Ok(Self {
            environment: Environment::parse_or_default(environment),
            token: token.to_owned(),
            account_identifier: account_identifier.to_owned(),
            send_email,
            base_url: None,
        })
    }

    /// Points the client at a different API root, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = Some(base_url.trim_end_matches('/').to_owned());
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn account_identifier(&self) -> &str {
        &self.account_identifier
    }

    pub fn send_email(&self) -> bool {
        self.send_email
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.api_url())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("environment", &self.environment)
            .field("token", &"<redacted>")
            .field("account_identifier", &self.account_identifier)
            .field("send_email", &self.send_email)
            .field("base_url", &self.base_url())
            .finish()
    }
}
