use tracing::instrument;

use crate::client::{decode_body, path_segment, RaasClient};
use crate::domain::{LineItem, LineItemsResponse, ResendResponse};
use crate::error::{ensure_success, RaasError};
use crate::http_client::HttpMethod;

impl RaasClient {
    /// `GET /lineItems`. Only the first page is fetched; the cursor keys in
    /// [`LineItemsResponse::keyset_page`] are not followed.
    #[instrument(skip(self))]
    pub async fn get_line_items(&self) -> Result<LineItemsResponse, RaasError> {
        self.get_json("/lineItems", "get line items").await
    }

    /// `GET /lineItems/{referenceLineItemID}`.
    #[instrument(skip(self))]
    pub async fn get_line_item(&self, line_item_id: &str) -> Result<LineItem, RaasError> {
        let path = format!("/lineItems/{}", path_segment(line_item_id));
        self.get_json(&path, "get line item").await
    }

    /// `POST /lineItems/{referenceLineItemID}/resends`.
    #[instrument(skip(self))]
    pub async fn resend_line_item(&self, line_item_id: &str) -> Result<ResendResponse, RaasError> {
        const OPERATION: &str = "resend line item";

        let path = format!("/lineItems/{}/resends", path_segment(line_item_id));
        let response = self.send(self.request(HttpMethod::Post, &path)).await?;
        ensure_success(&response, OPERATION)?;
        decode_body(&response, OPERATION)
    }
}
