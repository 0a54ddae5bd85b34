//! Core types for the PayWhirl client.
//!
//! This crate provides the types shared by the client and its callers:
//!
//! - **Identifiers**: `CustomerId`, `PlanId`, `SubscriptionId`, and one per resource
//! - **Trial ends**: `TrialEnd`
//! - **Response shapes**: `Customer`, `Plan`, `Subscription`, `Invoice`, ...
//!
//! The response shapes are optional. The PayWhirl API owns its schema, so every
//! shape keeps unknown fields in an `extra` map and the client always offers
//! the raw JSON as well.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod billing;
pub mod customer;
pub mod ids;
mod lenient;
pub mod plan;
pub mod trial;

pub use account::{Account, EmailTemplate, MultiAuthToken, ShippingRule, TaxRule};
pub use billing::{Card, Charge, Gateway, Invoice, Promo};
pub use customer::{Answer, Customer, Question};
pub use ids::{
    AnswerId, CardId, ChargeId, CustomerId, EmailTemplateId, GatewayId, IdError, InvoiceId,
    PlanId, PromoId, QuestionId, ShippingRuleId, SubscriptionId, TaxRuleId,
};
pub use plan::{Plan, Subscription};
pub use trial::TrialEnd;
