use tracing::instrument;

use crate::client::{path_segment, RaasClient};
use crate::domain::{
    CreateCustomerAccountRequest, CreateCustomerRequest, Customer, CustomerAccount,
};
use crate::error::RaasError;

impl RaasClient {
    /// `GET /customers`.
    #[instrument(skip(self))]
    pub async fn get_customers(&self) -> Result<Vec<Customer>, RaasError> {
        self.get_json("/customers", "get customers").await
    }

    /// `GET /customers/{customerIdentifier}`.
    #[instrument(skip(self))]
    pub async fn get_customer(&self, customer_identifier: &str) -> Result<Customer, RaasError> {
        let path = format!("/customers/{}", path_segment(customer_identifier));
        self.get_json(&path, "get customer").await
    }

    /// `GET /customers/{customerIdentifier}/accounts`.
    #[instrument(skip(self))]
    pub async fn get_customer_accounts(
        &self,
        customer_identifier: &str,
    ) -> Result<Vec<CustomerAccount>, RaasError> {
        let path = format!("/customers/{}/accounts", path_segment(customer_identifier));
        self.get_json(&path, "get customer accounts").await
    }

    /// `POST /customers`. The endpoint echoes the created identifiers.
    #[instrument(skip(self))]
    pub async fn create_customer(
        &self,
        customer_identifier: &str,
        display_name: &str,
    ) -> Result<CreateCustomerRequest, RaasError> {
        let body = CreateCustomerRequest {
            customer_identifier: customer_identifier.to_owned(),
            display_name: display_name.to_owned(),
        };
        self.post_json("/customers", &body, "create customer").await
    }

    /// `POST /customers/{customerIdentifier}/accounts`.
    #[instrument(skip(self, contact_email))]
    pub async fn create_customer_account(
        &self,
        customer_identifier: &str,
        account_identifier: &str,
        display_name: &str,
        contact_email: &str,
    ) -> Result<CreateCustomerAccountRequest, RaasError> {
        let path = format!("/customers/{}/accounts", path_segment(customer_identifier));
        let body = CreateCustomerAccountRequest {
            account_identifier: account_identifier.to_owned(),
            display_name: display_name.to_owned(),
            contact_email: contact_email.to_owned(),
        };
        self.post_json(&path, &body, "create customer account")
            .await
    }
}
