use raas_core::RaasError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input rejected by the CLI before any client is built.
    #[error(transparent)]
    Validation(#[from] raas_core::ValidationError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to load environment file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error(transparent)]
    Raas(#[from] RaasError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Config(_) | Self::EnvFile(_) => 2,
            Self::Raas(error) => match error {
                RaasError::Validation(_) => 2,
                RaasError::Api { .. }
                | RaasError::Status(_)
                | RaasError::TokenRequest { .. }
                | RaasError::TokenFallback { .. } => 3,
                RaasError::Decode { .. } | RaasError::Encode { .. } => 4,
                RaasError::Transport(_) => 6,
            },
            Self::Serialization(_) => 4,
        }
    }
}
