use raas_core::RaasClient;
use serde_json::Value;

use crate::cli::AccountArgs;
use crate::error::CliError;

pub async fn run(args: &AccountArgs, client: &RaasClient) -> Result<Value, CliError> {
    let account = match args.account_identifier.as_deref() {
        Some(account_identifier) => client.get_account_info(account_identifier).await?,
        None => client.get_own_account().await?,
    };
    Ok(serde_json::to_value(account)?)
}
