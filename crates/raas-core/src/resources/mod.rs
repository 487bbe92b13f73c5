//! # Resource Endpoints
//!
//! One async method per vendor endpoint, implemented on [`crate::RaasClient`]
//! and grouped by endpoint family. Every call issues exactly one HTTP
//! exchange: no retries, no pagination traversal, no caching.
//!
//! | Module | Operations |
//! |--------|------------|
//! | `accounts` | `get_account_info`, `get_own_account` |
//! | `customers` | `get_customers`, `get_customer`, `get_customer_accounts`, `create_customer`, `create_customer_account` |
//! | `catalog` | `get_catalog_items` |
//! | `exchange_rates` | `get_exchange_rates` |
//! | `line_items` | `get_line_items`, `get_line_item`, `resend_line_item` |
//! | `orders` | `create_order`, `get_order`, `resend_order` |

mod accounts;
mod catalog;
mod customers;
mod exchange_rates;
mod line_items;
mod orders;
