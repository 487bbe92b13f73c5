use thiserror::Error;

use crate::domain::ApiFieldError;
use crate::http_client::{HttpError, HttpResponse};

/// Input validation errors raised before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("invalid environment '{value}', expected one of production, sandbox")]
    InvalidEnvironment { value: String },
}

/// Non-2xx response from a resource endpoint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{operation} failed with status {status} ({status_text}): {body}")]
pub struct StatusError {
    pub operation: String,
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// Top-level error type for client operations.
#[derive(Debug, Error)]
pub enum RaasError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] HttpError),

    #[error(transparent)]
    Status(#[from] StatusError),

    /// The OAuth endpoint keeps its own error shape, distinct from [`StatusError`].
    #[error("token request rejected: {status} {status_text}: {body}")]
    TokenRequest {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error(
        "service account token request failed ({service_account}); \
         client credentials fallback failed ({client_credentials})"
    )]
    TokenFallback {
        service_account: Box<RaasError>,
        client_credentials: Box<RaasError>,
    },

    #[error("API error (status {status}): {}", join_field_errors(.errors))]
    Api {
        status: u16,
        errors: Vec<ApiFieldError>,
    },

    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {operation} request: {source}")]
    Encode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RaasError {
    pub(crate) fn decode(operation: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            operation: operation.to_owned(),
            source,
        }
    }

    pub(crate) fn encode(operation: &str, source: serde_json::Error) -> Self {
        Self::Encode {
            operation: operation.to_owned(),
            source,
        }
    }

    /// HTTP status carried by the error, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(error) => Some(error.status),
            Self::TokenRequest { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Maps a non-2xx response into a [`StatusError`] labelled with `operation`.
pub fn ensure_success(response: &HttpResponse, operation: &str) -> Result<(), StatusError> {
    if response.is_success() {
        return Ok(());
    }

    Err(StatusError {
        operation: operation.to_owned(),
        status: response.status,
        status_text: response.reason().to_owned(),
        body: response.body.trim().to_owned(),
    })
}

fn join_field_errors(errors: &[ApiFieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
