use tracing::instrument;

use crate::client::RaasClient;
use crate::domain::Catalog;
use crate::error::RaasError;

impl RaasClient {
    /// `GET /catalogs?verbose=true`: every brand with its items.
    #[instrument(skip(self))]
    pub async fn get_catalog_items(&self) -> Result<Catalog, RaasError> {
        self.get_json("/catalogs?verbose=true", "get catalog items")
            .await
    }
}
