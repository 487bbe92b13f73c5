//! CLI argument definitions for `raas`.
//!
//! Credentials are taken from flags or, more commonly, from `RAAS_*`
//! environment variables (a `.env` file in the working directory is loaded
//! first). When `RAAS_ACCESS_TOKEN` is set no token request is made.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `token` | Acquire an OAuth access token |
//! | `account` | Show an account (the configured one by default) |
//! | `customers` | List, inspect and create customers and their accounts |
//! | `catalog` | List the verbose reward catalog |
//! | `exchange-rates` | Show currency exchange rates |
//! | `line-items` | List, inspect and resend line items |
//! | `order` | Place, inspect and resend orders |
//!
//! # Examples
//!
//! ```bash
//! raas token --pretty
//! raas catalog --environment sandbox
//! raas order create --customer C-1 --utid U561593 --amount 5 \
//!     --delivery-method email --recipient-email someone@example.com
//! ```

use clap::{Args, Parser, Subcommand};
use raas_core::{DeliveryMethod, DEFAULT_TIMEOUT_MS};

/// Command-line client for the RaaS rewards API.
#[derive(Debug, Parser)]
#[command(
    name = "raas",
    author,
    version,
    about = "Command-line client for the RaaS rewards API"
)]
pub struct Cli {
    /// Target environment: production or sandbox.
    #[arg(long, global = true, env = "RAAS_ENVIRONMENT", default_value = "sandbox")]
    pub environment: String,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Ask the vendor to email rewards when an order names no delivery method.
    #[arg(long, global = true, env = "RAAS_SEND_EMAIL", default_value_t = false)]
    pub send_email: bool,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Authentication inputs, normally supplied through the environment.
#[derive(Debug, Clone, Default, Args)]
pub struct CredentialArgs {
    /// OAuth client id.
    #[arg(long, global = true, env = "RAAS_CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// OAuth client secret.
    #[arg(long, global = true, env = "RAAS_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Service account username; enables the password grant.
    #[arg(
        long,
        global = true,
        env = "RAAS_SERVICE_ACCOUNT_USERNAME",
        hide_env_values = true
    )]
    pub service_account_username: Option<String>,

    /// Service account password.
    #[arg(
        long,
        global = true,
        env = "RAAS_SERVICE_ACCOUNT_PASSWORD",
        hide_env_values = true
    )]
    pub service_account_password: Option<String>,

    /// Account identifier orders are charged to.
    #[arg(long, global = true, env = "RAAS_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// Pre-issued bearer token; skips token acquisition.
    #[arg(long, global = true, env = "RAAS_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Acquire an access token and print it with the grant that issued it.
    Token,

    /// Show account details.
    ///
    /// Defaults to the configured account (RAAS_ACCOUNT_ID).
    Account(AccountArgs),

    /// Customer management.
    Customers(CustomersArgs),

    /// List every brand and reward item (verbose catalog).
    Catalog,

    /// Show exchange rates, optionally filtered by currency.
    ExchangeRates(ExchangeRatesArgs),

    /// Line item inspection and resends.
    LineItems(LineItemsArgs),

    /// Order placement, lookup and resends.
    Order(OrderArgs),
}

#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Account identifier to look up instead of the configured one.
    pub account_identifier: Option<String>,
}

#[derive(Debug, Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomersCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List all customers.
    List,

    /// Show one customer.
    Get { customer_identifier: String },

    /// List a customer's accounts.
    Accounts { customer_identifier: String },

    /// Create a customer.
    Create {
        customer_identifier: String,
        #[arg(long)]
        display_name: String,
    },

    /// Create an account under a customer.
    CreateAccount {
        customer_identifier: String,
        account_identifier: String,
        #[arg(long)]
        display_name: String,
        #[arg(long)]
        contact_email: String,
    },
}

#[derive(Debug, Args)]
pub struct ExchangeRatesArgs {
    /// Base currency filter (e.g. USD).
    #[arg(long, default_value = "")]
    pub base_currency: String,

    /// Reward currency filter (e.g. EUR).
    #[arg(long, default_value = "")]
    pub reward_currency: String,
}

#[derive(Debug, Args)]
pub struct LineItemsArgs {
    #[command(subcommand)]
    pub command: LineItemsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LineItemsCommand {
    /// List the first page of line items.
    List,

    /// Show one line item.
    Get { line_item_id: String },

    /// Resend a line item's reward email.
    Resend { line_item_id: String },
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    #[command(subcommand)]
    pub command: OrderCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// Place an order.
    Create(Box<CreateOrderArgs>),

    /// Show an order by reference id.
    Get { reference_order_id: String },

    /// Resend an order's reward email.
    Resend { reference_order_id: String },
}

/// Arguments for `order create`.
#[derive(Debug, Args)]
pub struct CreateOrderArgs {
    /// Customer identifier the order belongs to.
    #[arg(long)]
    pub customer: String,

    /// Catalog item UTID.
    #[arg(long)]
    pub utid: String,

    /// Face value in the item's currency.
    #[arg(long)]
    pub amount: f64,

    /// Idempotency reference; a random UUID when omitted.
    #[arg(long)]
    pub external_ref_id: Option<String>,

    /// NONE, EMAIL, PHONE, ADDRESS or EMBEDDED (case-insensitive).
    #[arg(long, value_parser = parse_delivery_method)]
    pub delivery_method: Option<DeliveryMethod>,

    #[arg(long, default_value = "")]
    pub email_subject: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Email template id.
    #[arg(long, default_value = "")]
    pub etid: String,

    #[arg(long, default_value = "")]
    pub campaign: String,

    #[arg(long, default_value = "")]
    pub notes: String,

    #[arg(long, default_value = "")]
    pub sender_first_name: String,

    #[arg(long, default_value = "")]
    pub sender_last_name: String,

    #[arg(long, default_value = "")]
    pub sender_email: String,

    #[arg(long, default_value = "")]
    pub recipient_first_name: String,

    #[arg(long, default_value = "")]
    pub recipient_last_name: String,

    #[arg(long, default_value = "")]
    pub recipient_email: String,

    /// First street line; the address is only sent when this is set.
    #[arg(long, default_value = "")]
    pub street_line1: String,

    #[arg(long, default_value = "")]
    pub street_line2: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub state_or_province: String,

    #[arg(long, default_value = "")]
    pub postal_code: String,

    #[arg(long, default_value = "")]
    pub country: String,
}

fn parse_delivery_method(value: &str) -> Result<DeliveryMethod, String> {
    value.parse()
}
