use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Verbose catalog listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub catalog_name: String,
    pub brands: Vec<Brand>,
}

impl Catalog {
    /// Total number of reward items across all brands.
    pub fn item_count(&self) -> usize {
        self.brands.iter().map(|brand| brand.items.len()).sum()
    }

    /// Finds an item by UTID.
    pub fn find_item(&self, utid: &str) -> Option<(&Brand, &Item)> {
        self.brands.iter().find_map(|brand| {
            brand
                .items
                .iter()
                .find(|item| item.utid == utid)
                .map(|item| (brand, item))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    pub brand_key: String,
    pub brand_name: String,
    pub disclaimer: String,
    pub description: String,
    pub short_description: String,
    pub terms: String,
    pub created_date: String,
    pub last_update_date: String,
    pub brand_requirements: BrandRequirements,
    pub image_urls: BTreeMap<String, String>,
    pub status: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandRequirements {
    pub display_instructions: String,
    pub terms_and_conditions_instructions: String,
    pub disclaimer_instructions: String,
    pub always_show_disclaimer: bool,
}

/// A single reward item, identified by its UTID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub utid: String,
    pub reward_name: String,
    pub currency_code: String,
    pub status: String,
    pub value_type: String,
    pub reward_type: String,
    pub is_whole_amount_value_required: bool,
    pub exchange_rate_rule: String,
    pub min_value: f64,
    pub max_value: f64,
    pub face_value: f64,
    pub fee: Fee,
    pub created_date: String,
    pub last_update_date: String,
    pub countries: Vec<String>,
    pub credential_types: Vec<String>,
    pub redemption_instructions: String,
    pub item_availability: ItemAvailability,
    pub fulfillment_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fee {
    #[serde(rename = "type")]
    pub fee_type: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemAvailability {
    pub item_availability_status: String,
    pub note: String,
    pub resolution_date: String,
    pub status_page_url: String,
    pub last_modified_date: String,
}
