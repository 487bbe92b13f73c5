use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::CredentialArgs;
use crate::error::CliError;

/// Overrides the `.env` location when set.
pub const ENV_FILE_VAR: &str = "RAAS_ENV_FILE";

pub fn env_file_override() -> Option<OsString> {
    std::env::var_os(ENV_FILE_VAR)
}

/// Loads `KEY=value` pairs into the process environment without overriding
/// variables that are already set.
///
/// An explicit path must exist; the default `.env` lookup is optional.
pub fn load_env_file(path: Option<&std::ffi::OsStr>) -> Result<Option<PathBuf>, CliError> {
    match path {
        Some(path) => {
            let path = Path::new(path);
            dotenvy::from_path(path)?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(path) => Ok(Some(path)),
            Err(error) if error.not_found() => Ok(None),
            Err(error) => Err(error.into()),
        },
    }
}

/// Credentials after blank values have been discarded.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub service_account_username: String,
    pub service_account_password: String,
    pub account_id: Option<String>,
    pub access_token: Option<String>,
}

impl Credentials {
    pub fn from_args(args: &CredentialArgs) -> Self {
        Self {
            client_id: args.client_id.clone().unwrap_or_default(),
            client_secret: args.client_secret.clone().unwrap_or_default(),
            service_account_username: args.service_account_username.clone().unwrap_or_default(),
            service_account_password: args.service_account_password.clone().unwrap_or_default(),
            account_id: non_blank(args.account_id.as_deref()),
            access_token: non_blank(args.access_token.as_deref()),
        }
    }

    pub fn require_account_id(&self) -> Result<&str, CliError> {
        self.account_id.as_deref().ok_or_else(|| {
            CliError::Config(String::from(
                "an account identifier is required (--account-id or RAAS_ACCOUNT_ID)",
            ))
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("service_account_username", &self.service_account_username)
            .field("account_id", &self.account_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
