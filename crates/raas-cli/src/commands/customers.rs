use raas_core::RaasClient;
use serde_json::Value;

use crate::cli::{CustomersArgs, CustomersCommand};
use crate::error::CliError;

pub async fn run(args: &CustomersArgs, client: &RaasClient) -> Result<Value, CliError> {
    let value = match &args.command {
        CustomersCommand::List => serde_json::to_value(client.get_customers().await?)?,
        CustomersCommand::Get {
            customer_identifier,
        } => serde_json::to_value(client.get_customer(customer_identifier).await?)?,
        CustomersCommand::Accounts {
            customer_identifier,
        } => serde_json::to_value(client.get_customer_accounts(customer_identifier).await?)?,
        CustomersCommand::Create {
            customer_identifier,
            display_name,
        } => serde_json::to_value(
            client
                .create_customer(customer_identifier, display_name)
                .await?,
        )?,
        CustomersCommand::CreateAccount {
            customer_identifier,
            account_identifier,
            display_name,
            contact_email,
        } => serde_json::to_value(
            client
                .create_customer_account(
                    customer_identifier,
                    account_identifier,
                    display_name,
                    contact_email,
                )
                .await?,
        )?,
    };
    Ok(value)
}
