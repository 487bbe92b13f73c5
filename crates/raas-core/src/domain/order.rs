use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Reward delivery channel accepted by the order endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeliveryMethod {
    None,
    Email,
    Phone,
    Address,
    Embedded,
}

impl DeliveryMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Address => "ADDRESS",
            Self::Embedded => "EMBEDDED",
        }
    }
}

impl Display for DeliveryMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" => Ok(Self::None),
            "EMAIL" => Ok(Self::Email),
            "PHONE" => Ok(Self::Phone),
            "ADDRESS" => Ok(Self::Address),
            "EMBEDDED" => Ok(Self::Embedded),
            other => Err(format!(
                "invalid delivery method '{other}', expected one of NONE, EMAIL, PHONE, ADDRESS, EMBEDDED"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sender {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street_line1: String,
    pub street_line2: String,
    pub city: String,
    pub state_or_province: String,
    pub postal_code: String,
    pub country: String,
}

/// Order recipient; the postal address is only needed for physical delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Caller-facing order description.
///
/// The account identifier and the legacy `sendEmail` flag come from the
/// client configuration; the payload actually sent is produced by
/// [`crate::sanitize::sanitize_order`].
///
/// `delivery_method` holds the raw wire value so an explicit empty string can
/// be sent; use [`OrderRequest::with_delivery_method`] for the typed setter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderRequest {
    pub external_ref_id: String,
    pub customer_identifier: String,
    pub utid: String,
    pub amount: f64,
    pub email_subject: String,
    pub message: String,
    pub etid: String,
    pub campaign: String,
    pub notes: String,
    pub delivery_method: String,
    pub sender: Sender,
    pub recipient: Person,
}

impl OrderRequest {
    pub fn new(
        customer_identifier: impl Into<String>,
        utid: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            customer_identifier: customer_identifier.into(),
            utid: utid.into(),
            amount,
            ..Self::default()
        }
    }

    pub fn with_delivery_method(mut self, method: DeliveryMethod) -> Self {
        self.delivery_method = method.as_str().to_owned();
        self
    }

    pub fn with_recipient(mut self, recipient: Person) -> Self {
        self.recipient = recipient;
        self
    }

    pub fn with_sender(mut self, sender: Sender) -> Self {
        self.sender = sender;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Amount {
    pub value: f64,
    pub currency_code: String,
    pub exchange_rate: f64,
    pub fee: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reward {
    pub credentials: BTreeMap<String, String>,
    pub credential_list: Vec<Credential>,
    pub redemption_instructions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credential {
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub credential_type: String,
}

/// Order as returned by `POST /orders` and `GET /orders/{referenceOrderID}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderResponse {
    #[serde(rename = "referenceOrderID")]
    pub reference_order_id: String,
    #[serde(rename = "externalRefID")]
    pub external_ref_id: String,
    pub customer_identifier: String,
    pub account_identifier: String,
    pub amount_charged: Amount,
    pub denomination: Amount,
    pub utid: String,
    pub reward_name: String,
    pub reward: Reward,
    pub sender: Person,
    pub recipient: Person,
    pub email_subject: String,
    pub message: String,
    pub send_email: bool,
    pub delivery_method: String,
    pub status: String,
    pub campaign: String,
    pub created_at: String,
    pub redemption_instructions: String,
}

/// Structured vendor error, reported by the order endpoints with either a
/// failure status or, occasionally, a 2xx status.
///
/// Decoding is lenient: `null` strings read as empty, an unparseable
/// `timestamp` reads as `None` and a textual `httpCode` is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiErrorResponse {
    #[serde(
        serialize_with = "time::serde::rfc3339::option::serialize",
        deserialize_with = "lenient_timestamp"
    )]
    pub timestamp: Option<OffsetDateTime>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub request_id: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub path: String,
    #[serde(deserialize_with = "lenient_status")]
    pub http_code: u16,
    #[serde(deserialize_with = "scalar_as_string")]
    pub http_phrase: String,
    pub errors: Vec<ApiFieldError>,
}

impl ApiErrorResponse {
    /// Extracts the structured error when the body carries field errors.
    ///
    /// Returns `Ok(None)` for bodies that are not JSON objects or whose
    /// `errors` is absent, `null` or empty. A present but undecodable
    /// `errors` is an error, never `None`.
    pub fn from_body(body: &str) -> Result<Option<Self>, serde_json::Error> {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return Ok(None);
        };
        let carries_errors = match value.get("errors") {
            None | Some(Value::Null) => false,
            Some(Value::Array(errors)) => !errors.is_empty(),
            Some(_) => true,
        };
        if !carries_errors {
            return Ok(None);
        }
        serde_json::from_value::<Self>(value).map(Some)
    }
}

/// Field-level validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiFieldError {
    #[serde(deserialize_with = "scalar_as_string")]
    pub path: String,
    #[serde(
        rename = "i18nKey",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "scalar_as_string"
    )]
    pub i18n_key: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub message: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub invalid_value: String,
    #[serde(deserialize_with = "scalar_as_string")]
    pub constraint: String,
}

impl Display for ApiFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (invalid value '{}', constraint '{}')",
            self.path, self.message, self.invalid_value, self.constraint
        )
    }
}

// The vendor echoes rejected values with their original JSON type and sends
// `null` for absent strings.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(value) => value,
        other => other.to_string(),
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => OffsetDateTime::parse(&value, &Rfc3339).ok(),
        _ => None,
    })
}

fn lenient_status<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_u64()
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or_default(),
        Value::String(value) => value.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}
