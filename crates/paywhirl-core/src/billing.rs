//! Invoice, charge, card, gateway, and promo shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::{CardId, ChargeId, CustomerId, GatewayId, InvoiceId, PromoId, SubscriptionId};
use crate::lenient;

/// An invoice, paid or upcoming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID.
    pub id: InvoiceId,
    /// The billed customer.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// The subscription that produced the invoice, if any.
    #[serde(default)]
    pub subscription_id: Option<SubscriptionId>,
    /// Invoice status as reported by the API.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    /// Whether the invoice has been paid.
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub paid: Option<bool>,
    /// Amount due.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub amount_due: Option<f64>,
    /// Subtotal before tax and shipping.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub subtotal: Option<f64>,
    /// Due date.
    #[serde(default)]
    pub due_date: Option<Value>,
    /// Currency code.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub currency: Option<String>,
    /// Line items, kept as sent.
    #[serde(default, deserialize_with = "lenient::vec_or_null")]
    pub items: Vec<Value>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A one-off charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Charge ID.
    pub id: ChargeId,
    /// The charged customer.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// Amount charged.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub amount: Option<f64>,
    /// Description shown on the invoice.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A stored payment card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Card ID.
    pub id: CardId,
    /// The card owner.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// Card brand (`Visa`, `MasterCard`, ...).
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub brand: Option<String>,
    /// Last four digits.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub last4: Option<String>,
    /// Expiry month.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub exp_month: Option<i64>,
    /// Expiry year.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub exp_year: Option<i64>,
    /// The gateway holding the card.
    #[serde(default)]
    pub gateway_id: Option<GatewayId>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A configured payment gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
    /// Gateway ID.
    pub id: GatewayId,
    /// Display name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    /// Gateway type (`Stripe`, `Braintree`, ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Whether the gateway runs in test mode.
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub test_mode: Option<bool>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A promo code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promo {
    /// Promo ID.
    pub id: PromoId,
    /// The code customers enter.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub code: Option<String>,
    /// Display name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
