use raas_core::RaasClient;
use serde_json::Value;

use crate::cli::{LineItemsArgs, LineItemsCommand};
use crate::error::CliError;

pub async fn run(args: &LineItemsArgs, client: &RaasClient) -> Result<Value, CliError> {
    let value = match &args.command {
        LineItemsCommand::List => {
            let page = client.get_line_items().await?;
            if page.keyset_page.has_next_page() {
                tracing::warn!(
                    total = page.keyset_page.total_count,
                    returned = page.line_items.len(),
                    "only the first page of line items is shown"
                );
            }
            serde_json::to_value(page)?
        }
        LineItemsCommand::Get { line_item_id } => {
            serde_json::to_value(client.get_line_item(line_item_id).await?)?
        }
        LineItemsCommand::Resend { line_item_id } => {
            serde_json::to_value(client.resend_line_item(line_item_id).await?)?
        }
    };
    Ok(value)
}
