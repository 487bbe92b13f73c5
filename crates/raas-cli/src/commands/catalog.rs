use raas_core::RaasClient;
use serde_json::Value;

use crate::error::CliError;

pub async fn run(client: &RaasClient) -> Result<Value, CliError> {
    let catalog = client.get_catalog_items().await?;
    tracing::debug!(
        brands = catalog.brands.len(),
        items = catalog.item_count(),
        "catalog fetched"
    );
    Ok(serde_json::to_value(catalog)?)
}
