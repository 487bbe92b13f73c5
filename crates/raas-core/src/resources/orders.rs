//! Order endpoints.
//!
//! Unlike the other resources, orders report failures as a structured
//! [`ApiErrorResponse`], sometimes even alongside a 2xx status, so every
//! order response is checked for field errors before the status.

use tracing::{info, instrument, warn};

use crate::client::{decode_body, path_segment, RaasClient};
use crate::domain::{ApiErrorResponse, OrderRequest, OrderResponse};
use crate::error::{ensure_success, RaasError, StatusError, ValidationError};
use crate::http_client::{HttpMethod, HttpResponse};
use crate::sanitize::sanitize_order;

const RESEND_SUCCESS: [u16; 3] = [200, 201, 204];

impl RaasClient {
    /// `POST /orders` with the pruned payload from [`sanitize_order`].
    ///
    /// The account identifier and legacy send-email default come from the
    /// client configuration.
    #[instrument(
        skip(self, request),
        fields(utid = %request.utid, customer = %request.customer_identifier)
    )]
    pub async fn create_order(&self, request: &OrderRequest) -> Result<OrderResponse, RaasError> {
        const OPERATION: &str = "create order";

        let payload = sanitize_order(
            request,
            self.config().account_identifier(),
            self.config().send_email(),
        )
        .map_err(|error| RaasError::encode(OPERATION, error))?;

        let response = self
            .send(self.json_request("/orders", &payload, OPERATION)?)
            .await?;
        let order = order_response(&response, OPERATION)?;
        info!(
            reference_order_id = %order.reference_order_id,
            status = %order.status,
            "order placed"
        );
        Ok(order)
    }

    /// `GET /orders/{referenceOrderID}`.
    #[instrument(skip(self))]
    pub async fn get_order(&self, reference_order_id: &str) -> Result<OrderResponse, RaasError> {
        let path = format!("/orders/{}", required_order_id(reference_order_id)?);
        let response = self.send(self.request(HttpMethod::Get, &path)).await?;
        order_response(&response, "get order")
    }

    /// `POST /orders/{referenceOrderID}/resends`.
    ///
    /// 200, 201 and 204 all count as success; any other status is an error
    /// labelled `resend order`.
    #[instrument(skip(self))]
    pub async fn resend_order(&self, reference_order_id: &str) -> Result<(), RaasError> {
        let path = format!("/orders/{}/resends", required_order_id(reference_order_id)?);
        let response = self.send(self.request(HttpMethod::Post, &path)).await?;

        if RESEND_SUCCESS.contains(&response.status) {
            info!(status = response.status, "order resend accepted");
            return Ok(());
        }

        warn!(status = response.status, "order resend rejected");
        Err(StatusError {
            operation: String::from("resend order"),
            status: response.status,
            status_text: response.reason().to_owned(),
            body: response.body.trim().to_owned(),
        }
        .into())
    }
}

fn required_order_id(reference_order_id: &str) -> Result<String, ValidationError> {
    if reference_order_id.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "reference_order_id",
        });
    }
    Ok(path_segment(reference_order_id))
}

fn order_response(response: &HttpResponse, operation: &str) -> Result<OrderResponse, RaasError> {
    let api_error = ApiErrorResponse::from_body(&response.body)
        .map_err(|error| RaasError::decode(operation, error))?;
    if let Some(api_error) = api_error {
        return Err(RaasError::Api {
            status: response.status,
            errors: api_error.errors,
        });
    }
    ensure_success(response, operation)?;
    decode_body(response, operation)
}
