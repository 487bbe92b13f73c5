//! # RaaS Core
//!
//! Typed async client for the Tango Card "Rewards as a Service" API.
//!
//! ## Overview
//!
//! - **OAuth token acquisition** with `client_credentials` and service-account
//!   `password` grants, including a fallback between the two
//! - **Resource calls** for accounts, customers, catalog, exchange rates,
//!   orders and line items, one method per endpoint on [`RaasClient`]
//! - **Order payload pruning** so empty optional fields never reach the vendor
//! - **Uniform error reporting** for non-2xx responses
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `RaasClient` construction and request plumbing |
//! | [`config`] | Immutable client configuration |
//! | [`domain`] | Wire DTOs |
//! | [`environment`] | Production / sandbox host selection |
//! | [`error`] | Error types and the status normalizer |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`resources`] | Endpoint methods |
//! | [`sanitize`] | Order payload pruning |
//! | [`token`] | OAuth token acquisition |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use raas_core::{acquire_token, OrderRequest, RaasClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let token = acquire_token("client-id", "client-secret", "sandbox").await?;
//!     let client = RaasClient::new(&token.access_token, "A-1", false, "sandbox")?;
//!
//!     let catalog = client.get_catalog_items().await?;
//!     println!("{} items available", catalog.item_count());
//!
//!     let order = client
//!         .create_order(&OrderRequest::new("C-1", "U561593", 5.0))
//!         .await?;
//!     println!("placed {}", order.reference_order_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`RaasError`]. Order endpoints surface the
//! vendor's field-level errors as [`RaasError::Api`]; other endpoints report
//! failures through [`StatusError`]:
//!
//! ```rust
//! use raas_core::RaasError;
//!
//! fn describe(error: &RaasError) -> String {
//!     match error {
//!         RaasError::Api { errors, .. } => format!("{} field errors", errors.len()),
//!         RaasError::Status(status) => format!("{} returned {}", status.operation, status.status),
//!         other => other.to_string(),
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod environment;
pub mod error;
pub mod http_client;
pub mod resources;
pub mod sanitize;
pub mod token;

#[cfg(test)]
mod test_support;

pub use client::RaasClient;

pub use config::ClientConfig;

pub use domain::{
    Account, Address, Amount, ApiErrorResponse, ApiFieldError, Brand, BrandRequirements, Catalog,
    CreateCustomerAccountRequest, CreateCustomerRequest, Credential, Customer, CustomerAccount,
    DeliveryMethod, ExchangeRate, ExchangeRatesResponse, Fee, Item, ItemAvailability, KeysetPage,
    LineItem, LineItemsResponse, OrderRequest, OrderResponse, Person, ResendResponse, Reward,
    Sender,
};

pub use environment::Environment;

pub use error::{ensure_success, RaasError, StatusError, ValidationError};

pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
    DEFAULT_TIMEOUT_MS,
};

pub use sanitize::sanitize_order;

pub use token::{
    acquire_token, acquire_token_with_service_account, GrantType, TokenAuthMode, TokenClient,
    TokenRequest, TokenResponse,
};
