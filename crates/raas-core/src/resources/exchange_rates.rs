use tracing::instrument;

use crate::client::RaasClient;
use crate::domain::ExchangeRatesResponse;
use crate::error::RaasError;

impl RaasClient {
    /// `GET /exchangerates`, optionally filtered by base and reward currency.
    ///
    /// Blank filters are omitted from the query string.
    #[instrument(skip(self))]
    pub async fn get_exchange_rates(
        &self,
        base_currency: &str,
        reward_currency: &str,
    ) -> Result<ExchangeRatesResponse, RaasError> {
        let path = exchange_rates_path(base_currency, reward_currency);
        self.get_json(&path, "get exchange rates").await
    }
}

fn exchange_rates_path(base_currency: &str, reward_currency: &str) -> String {
    let query = [
        ("baseCurrency", base_currency.trim()),
        ("rewardCurrency", reward_currency.trim()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
    .collect::<Vec<_>>()
    .join("&");

    if query.is_empty() {
        String::from("/exchangerates")
    } else {
        format!("/exchangerates?{query}")
    }
}
