//! Order payload pruning.
//!
//! The order endpoint treats an empty string or a zero amount differently from
//! an absent field, so the request body is built field by field instead of
//! serializing [`OrderRequest`] directly:
//!
//! | Field | Policy |
//! |-------|--------|
//! | `externalRefID`, `customerIdentifier`, `accountIdentifier`, `utid`, `emailSubject`, `message`, `etid`, `campaign`, `notes` | dropped when empty |
//! | `amount` | dropped when zero or non-finite |
//! | `deliveryMethod` | always sent, empty included |
//! | `sendEmail` | sent as `true` only when no delivery method is given and the client default is on |
//! | `sender` | always sent as-is |
//! | `recipient` | always sent; `address` dropped when `streetLine1` is empty |
//!
//! A legitimately zero `amount` is dropped as well. The vendor rejects
//! zero-value orders either way, so the behavior is kept.

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::domain::{OrderRequest, Person};

/// Builds the JSON object sent to `POST /orders`.
pub fn sanitize_order(
    request: &OrderRequest,
    account_identifier: &str,
    send_email: bool,
) -> Result<Map<String, Value>, serde_json::Error> {
    let legacy_send_email = request.delivery_method.is_empty() && send_email;

    let payload = PrunedObject::default()
        .text("externalRefID", &request.external_ref_id)
        .text("customerIdentifier", &request.customer_identifier)
        .text("accountIdentifier", account_identifier)
        .text("utid", &request.utid)
        .amount("amount", request.amount)
        .text("emailSubject", &request.email_subject)
        .text("message", &request.message)
        .text("etid", &request.etid)
        .text("campaign", &request.campaign)
        .text("notes", &request.notes)
        .always("deliveryMethod", Value::String(request.delivery_method.clone()))
        .flag("sendEmail", legacy_send_email)
        .nested("sender", &request.sender)?
        .nested("recipient", &prune_recipient(&request.recipient))?;

    Ok(payload.into_inner())
}

fn prune_recipient(recipient: &Person) -> Person {
    Person {
        address: recipient
            .address
            .clone()
            .filter(|address| !address.street_line1.is_empty()),
        ..recipient.clone()
    }
}

#[derive(Debug, Default)]
struct PrunedObject(Map<String, Value>);

impl PrunedObject {
    fn text(mut self, key: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.0.insert(key.to_owned(), Value::String(value.to_owned()));
        }
        self
    }

    fn amount(mut self, key: &str, value: f64) -> Self {
        if value != 0.0 {
            if let Some(number) = Number::from_f64(value) {
                self.0.insert(key.to_owned(), Value::Number(number));
            }
        }
        self
    }

    fn flag(mut self, key: &str, value: bool) -> Self {
        if value {
            self.0.insert(key.to_owned(), Value::Bool(true));
        }
        self
    }

    fn always(mut self, key: &str, value: Value) -> Self {
        self.0.insert(key.to_owned(), value);
        self
    }

    fn nested<T: Serialize>(mut self, key: &str, value: &T) -> Result<Self, serde_json::Error> {
        self.0.insert(key.to_owned(), serde_json::to_value(value)?);
        Ok(self)
    }

    fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
