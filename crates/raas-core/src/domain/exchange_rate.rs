use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExchangeRatesResponse {
    pub disclaimer: String,
    pub exchange_rates: Vec<ExchangeRate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExchangeRate {
    pub last_modified_date: String,
    pub reward_currency: String,
    pub base_currency: String,
    pub base_fx: f64,
}
