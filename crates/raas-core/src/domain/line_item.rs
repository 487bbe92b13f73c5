use serde::{Deserialize, Serialize};

use super::order::{Amount, Person, Sender};

/// One page of line items. Cursor keys are exposed but never followed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItemsResponse {
    pub keyset_page: KeysetPage,
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeysetPage {
    pub next_page_keys: Vec<String>,
    pub previous_page_keys: Vec<String>,
    pub result_count: u64,
    pub total_count: u64,
}

impl KeysetPage {
    pub fn has_next_page(&self) -> bool {
        !self.next_page_keys.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    #[serde(rename = "referenceLineItemID")]
    pub reference_line_item_id: String,
    #[serde(rename = "referenceOrderID")]
    pub reference_order_id: String,
    pub order_source: String,
    pub status: String,
    pub order_status: String,
    pub email_status: String,
    pub line_number: u32,
    pub reward_name: String,
    pub amount_issued: Amount,
    pub date_issued: String,
    pub expiration_date: String,
    pub account_number: String,
    pub account_identifier: String,
    pub etid: String,
    pub utid: String,
    pub customer_identifier: String,
    pub recipient: Person,
    pub sender: Sender,
}

/// Acknowledgement returned by the resend endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResendResponse {
    pub id: String,
    pub legacy_id: String,
    pub created_at: String,
    pub email: String,
}
