use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const PRODUCTION_API_URL: &str = "https://api.tangocard.com/raas/v2";
const SANDBOX_API_URL: &str = "https://integration-api.tangocard.com/raas/v2";
const PRODUCTION_TOKEN_URL: &str = "https://auth.tangocard.com/oauth/token";
const SANDBOX_TOKEN_URL: &str = "https://sandbox-auth.tangocard.com/oauth/token";

/// Vendor deployment a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    /// Strict parse: blank or unknown values are rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim() {
            "" => Err(ValidationError::MissingField {
                field: "environment",
            }),
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            other => Err(ValidationError::InvalidEnvironment {
                value: other.to_owned(),
            }),
        }
    }

    /// Lenient parse used at client construction: anything other than
    /// `sandbox` resolves to production.
    pub fn parse_or_default(input: &str) -> Self {
        Self::parse(input).unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Sandbox => "sandbox",
        }
    }

    /// Base URL for the JSON REST API.
    pub const fn api_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Sandbox => SANDBOX_API_URL,
        }
    }

    /// OAuth token endpoint.
    pub const fn token_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_TOKEN_URL,
            Self::Sandbox => SANDBOX_TOKEN_URL,
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
