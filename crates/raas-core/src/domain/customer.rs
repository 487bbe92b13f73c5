use serde::{Deserialize, Serialize};

/// A customer (platform sub-tenant) and its accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub customer_identifier: String,
    pub display_name: String,
    pub status: String,
    pub created_at: String,
    #[serde(alias = "Accounts")]
    pub accounts: Vec<CustomerAccount>,
}

/// Account summary nested under a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerAccount {
    pub account_identifier: String,
    pub account_number: String,
    pub display_name: String,
    pub created_at: String,
    pub status: String,
}

/// Body of `POST /customers`; the endpoint echoes the same shape back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCustomerRequest {
    pub customer_identifier: String,
    pub display_name: String,
}

/// Body of `POST /customers/{customerIdentifier}/accounts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCustomerAccountRequest {
    pub account_identifier: String,
    pub display_name: String,
    pub contact_email: String,
}
