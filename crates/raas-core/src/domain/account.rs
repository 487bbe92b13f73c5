use serde::{Deserialize, Serialize};

/// Account details as returned by `GET /accounts/{accountIdentifier}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    pub account_identifier: String,
    pub account_number: String,
    pub display_name: String,
    pub currency_code: String,
    pub current_balance: f64,
    pub created_at: String,
    pub status: String,
    pub contact_email: String,
}
