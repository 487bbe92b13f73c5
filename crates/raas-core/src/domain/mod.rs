//! # Domain Models
//!
//! Wire shapes for the RaaS API. Every type here is a plain data transfer
//! object: camelCase JSON, absent fields decode to their defaults, and values
//! are never mutated after decoding.
//!
//! | Type | Endpoint family |
//! |------|-----------------|
//! | [`Account`] | `/accounts` |
//! | [`Customer`], [`CustomerAccount`] | `/customers` |
//! | [`Catalog`], [`Brand`], [`Item`] | `/catalogs` |
//! | [`ExchangeRatesResponse`] | `/exchangerates` |
//! | [`OrderRequest`], [`OrderResponse`] | `/orders` |
//! | [`LineItemsResponse`], [`LineItem`] | `/lineItems` |
//! | [`ApiErrorResponse`] | structured vendor errors |

mod account;
mod catalog;
mod customer;
mod exchange_rate;
mod line_item;
mod order;

pub use account::Account;
pub use catalog::{Brand, BrandRequirements, Catalog, Fee, Item, ItemAvailability};
pub use customer::{
    CreateCustomerAccountRequest, CreateCustomerRequest, Customer, CustomerAccount,
};
pub use exchange_rate::{ExchangeRate, ExchangeRatesResponse};
pub use line_item::{KeysetPage, LineItem, LineItemsResponse, ResendResponse};
pub use order::{
    Address, Amount, ApiErrorResponse, ApiFieldError, Credential, DeliveryMethod, OrderRequest,
    OrderResponse, Person, Reward, Sender,
};
