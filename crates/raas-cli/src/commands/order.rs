use raas_core::{Address, OrderRequest, Person, RaasClient, Sender};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::cli::{CreateOrderArgs, OrderArgs, OrderCommand};
use crate::error::CliError;

pub async fn run(args: &OrderArgs, client: &RaasClient) -> Result<Value, CliError> {
    let value = match &args.command {
        OrderCommand::Create(args) => {
            let request = build_order(args);
            serde_json::to_value(client.create_order(&request).await?)?
        }
        OrderCommand::Get { reference_order_id } => {
            serde_json::to_value(client.get_order(reference_order_id).await?)?
        }
        OrderCommand::Resend { reference_order_id } => {
            client.resend_order(reference_order_id).await?;
            json!({ "referenceOrderID": reference_order_id, "resent": true })
        }
    };
    Ok(value)
}

fn build_order(args: &CreateOrderArgs) -> OrderRequest {
    let external_ref_id = args
        .external_ref_id
        .clone()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let address = Address {
        street_line1: args.street_line1.clone(),
        street_line2: args.street_line2.clone(),
        city: args.city.clone(),
        state_or_province: args.state_or_province.clone(),
        postal_code: args.postal_code.clone(),
        country: args.country.clone(),
    };

    let mut request = OrderRequest {
        external_ref_id,
        email_subject: args.email_subject.clone(),
        message: args.message.clone(),
        etid: args.etid.clone(),
        campaign: args.campaign.clone(),
        notes: args.notes.clone(),
        ..OrderRequest::new(&args.customer, &args.utid, args.amount)
    }
    .with_sender(Sender {
        first_name: args.sender_first_name.clone(),
        last_name: args.sender_last_name.clone(),
        email: args.sender_email.clone(),
    })
    .with_recipient(Person {
        first_name: args.recipient_first_name.clone(),
        last_name: args.recipient_last_name.clone(),
        email: args.recipient_email.clone(),
        address: (address != Address::default()).then_some(address),
    });

    if let Some(method) = args.delivery_method {
        request = request.with_delivery_method(method);
    }
    request
}
