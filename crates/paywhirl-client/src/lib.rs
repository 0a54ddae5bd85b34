//! PayWhirl Client SDK.
//!
//! This crate exposes the PayWhirl subscription billing API as async method
//! calls. Every request is authenticated with the account's API key and
//! secret and returns the JSON body the API sent.
//!
//! # Example
//!
//! ```no_run
//! use paywhirl_client::{ApiClient, Params};
//!
//! # async fn example() -> Result<(), paywhirl_client::ClientError> {
//! let client = ApiClient::new("your-api-key", "your-api-secret")?;
//!
//! let customer = client.get_customer(42_u64).await?;
//! println!("Customer email: {}", customer["email"]);
//!
//! let subscription = client
//!     .subscribe_customer(42_u64, 7_u64, Some("2025-01-01".into()))
//!     .await?;
//! println!("Subscription: {subscription}");
//!
//! // Typed view of a response
//! let plans = client.get_plans(Params::new()).await?;
//! let plans: Vec<paywhirl_client::types::Plan> = ApiClient::decode(plans)?;
//! println!("{} plans", plans.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod params;
mod resources;

pub use client::ApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
pub use error::{ClientError, Result};
pub use params::{flatten, to_params, ParamEncoding, Params};

/// Identifiers and typed response shapes.
pub use paywhirl_core as types;
