use raas_core::RaasClient;
use serde_json::Value;

use crate::cli::ExchangeRatesArgs;
use crate::error::CliError;

pub async fn run(args: &ExchangeRatesArgs, client: &RaasClient) -> Result<Value, CliError> {
    let rates = client
        .get_exchange_rates(&args.base_currency, &args.reward_currency)
        .await?;
    Ok(serde_json::to_value(rates)?)
}
