//! Identifier types for PayWhirl resources.
//!
//! PayWhirl identifies every resource with a positive integer. Each resource
//! gets its own newtype so a plan id cannot be passed where a customer id is
//! expected.
//!
//! # Macro-based ID Types
//!
//! The `numeric_id_type!` macro generates the newtype and its trait
//! implementations so every identifier serializes, parses, and displays the
//! same way.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Macro to define a numeric identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `u64` with implementations for:
/// - `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize` (as a JSON number)
/// - `Deserialize` (from a JSON number or a numeric string)
/// - `FromStr`, `Display`, `Debug`
/// - `From<u64>`, `From<Self> for u64`
///
/// # Example
///
/// ```ignore
/// numeric_id_type!(WidgetId, "A widget identifier.");
/// let id = WidgetId::from(42);
/// let parsed: WidgetId = "42".parse().unwrap();
/// assert_eq!(id, parsed);
/// ```
macro_rules! numeric_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new identifier from its numeric value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Return the numeric value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| IdError::InvalidNumber(s.to_string()))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = RawId::deserialize(deserializer)?;
                raw.into_u64().map(Self).map_err(serde::de::Error::custom)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

/// Wire form of an identifier: PayWhirl sends most ids as numbers but some
/// endpoints return them as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn into_u64(self) -> Result<u64, IdError> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| IdError::InvalidNumber(s)),
        }
    }
}

numeric_id_type!(CustomerId, "A customer identifier.");
numeric_id_type!(PlanId, "A subscription plan identifier.");
numeric_id_type!(SubscriptionId, "A subscription identifier.");
numeric_id_type!(InvoiceId, "An invoice identifier.");
numeric_id_type!(GatewayId, "A payment gateway identifier.");
numeric_id_type!(ChargeId, "A one-off charge identifier.");
numeric_id_type!(CardId, "A stored payment card identifier.");
numeric_id_type!(PromoId, "A promo code identifier.");
numeric_id_type!(EmailTemplateId, "An email template identifier.");
numeric_id_type!(ShippingRuleId, "A shipping rule identifier.");
numeric_id_type!(TaxRuleId, "A tax rule identifier.");
numeric_id_type!(QuestionId, "A profile question identifier.");
numeric_id_type!(AnswerId, "A profile answer identifier.");

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a non-negative integer.
    #[error("invalid numeric identifier: {0:?}")]
    InvalidNumber(String),
}
