mod account;
mod catalog;
mod customers;
mod exchange_rates;
mod line_items;
mod order;
mod token;

use raas_core::{Environment, RaasClient, TokenClient};
use serde_json::Value;
use tracing::info;

use crate::cli::{Cli, Command};
use crate::config::Credentials;
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    // Strict here: a mistyped environment must not fall through to production.
    Environment::parse(&cli.environment)?;
    let credentials = Credentials::from_args(&cli.credentials);

    match &cli.command {
        Command::Token => token::run(cli, &credentials, &token_client(cli)).await,
        Command::Account(args) => {
            account::run(args, &resource_client(cli, &credentials).await?).await
        }
        Command::Customers(args) => {
            customers::run(args, &resource_client(cli, &credentials).await?).await
        }
        Command::Catalog => catalog::run(&resource_client(cli, &credentials).await?).await,
        Command::ExchangeRates(args) => {
            exchange_rates::run(args, &resource_client(cli, &credentials).await?).await
        }
        Command::LineItems(args) => {
            line_items::run(args, &resource_client(cli, &credentials).await?).await
        }
        Command::Order(args) => {
            order::run(args, &resource_client(cli, &credentials).await?).await
        }
    }
}

fn token_client(cli: &Cli) -> TokenClient {
    TokenClient::default().with_timeout_ms(cli.timeout_ms)
}

/// Builds an authenticated client, acquiring a token unless one was supplied.
async fn resource_client(cli: &Cli, credentials: &Credentials) -> Result<RaasClient, CliError> {
    let account_id = credentials.require_account_id()?;
    let token = match &credentials.access_token {
        Some(token) => token.clone(),
        None => {
            let (token, mode) = token::acquire(cli, credentials, &token_client(cli)).await?;
            info!(mode = %mode, "access token acquired");
            token.access_token
        }
    };

    let client = RaasClient::new(&token, account_id, cli.send_email, &cli.environment)?;
    Ok(client.with_timeout_ms(cli.timeout_ms))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use raas_core::{RaasError, ValidationError};

    use super::*;

    #[tokio::test]
    async fn resource_commands_require_an_account() {
        let cli = Cli::try_parse_from(["raas", "catalog", "--account-id=", "--access-token", "tok"])
            .expect("arguments should parse");

        let error = run(&cli).await.expect_err("missing account must fail");

        assert!(matches!(error, CliError::Config(_)));
        assert_eq!(error.exit_code(), 2);
    }

    #[tokio::test]
    async fn mistyped_environment_is_rejected_with_a_preissued_token() {
        let cli = Cli::try_parse_from([
            "raas",
            "catalog",
            "--environment",
            "sandbx",
            "--account-id",
            "A-1",
            "--access-token",
            "tok",
        ])
        .expect("arguments should parse");

        let error = run(&cli).await.expect_err("unknown environment must fail");

        assert!(matches!(
            error,
            CliError::Validation(ValidationError::InvalidEnvironment { ref value })
                if value == "sandbx"
        ));
        assert_eq!(error.exit_code(), 2);
    }

    #[tokio::test]
    async fn token_command_validates_before_any_request() {
        let cli = Cli::try_parse_from(["raas", "token", "--client-id=", "--client-secret", "s"])
            .expect("arguments should parse");

        let error = run(&cli).await.expect_err("blank client id must fail");

        assert!(matches!(
            error,
            CliError::Raas(RaasError::Validation(ValidationError::MissingField {
                field: "client_id"
            }))
        ));
    }
}
