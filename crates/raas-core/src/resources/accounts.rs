use tracing::instrument;

use crate::client::{path_segment, RaasClient};
use crate::domain::Account;
use crate::error::RaasError;

impl RaasClient {
    /// `GET /accounts/{accountIdentifier}`.
    #[instrument(skip(self))]
    pub async fn get_account_info(&self, account_identifier: &str) -> Result<Account, RaasError> {
        let path = format!("/accounts/{}", path_segment(account_identifier));
        self.get_json(&path, "get account info").await
    }

    /// Details of the account this client was configured with.
    pub async fn get_own_account(&self) -> Result<Account, RaasError> {
        self.get_account_info(self.config().account_identifier())
            .await
    }
}
