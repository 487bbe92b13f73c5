use raas_core::{TokenAuthMode, TokenClient, TokenResponse};
use serde::Serialize;
use serde_json::Value;

use crate::cli::Cli;
use crate::config::Credentials;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct IssuedToken<'a> {
    access_token: &'a str,
    token_type: &'a str,
    expires_in: u64,
    scope: &'a str,
    mode: TokenAuthMode,
}

pub async fn run(
    cli: &Cli,
    credentials: &Credentials,
    client: &TokenClient,
) -> Result<Value, CliError> {
    let (token, mode) = acquire(cli, credentials, client).await?;
    let issued = IssuedToken {
        access_token: &token.access_token,
        token_type: &token.token_type,
        expires_in: token.expires_in,
        scope: &token.scope,
        mode,
    };
    Ok(serde_json::to_value(issued)?)
}

pub async fn acquire(
    cli: &Cli,
    credentials: &Credentials,
    client: &TokenClient,
) -> Result<(TokenResponse, TokenAuthMode), CliError> {
    let issued = client
        .acquire_token_with_service_account(
            &credentials.client_id,
            &credentials.client_secret,
            &credentials.service_account_username,
            &credentials.service_account_password,
            &cli.environment,
        )
        .await?;
    Ok(issued)
}
