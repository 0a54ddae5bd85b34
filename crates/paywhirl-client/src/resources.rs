//! Resource methods: one per PayWhirl endpoint.
//!
//! Each method maps an action to a path and parameter set and hands it to
//! [`ApiClient::get`] or [`ApiClient::post`]. Responses are returned as the
//! raw JSON the API sent; use [`ApiClient::decode`] with a type from
//! `paywhirl_core` for a typed view.

use serde_json::Value;

use paywhirl_core::{
    CardId, ChargeId, CustomerId, EmailTemplateId, GatewayId, InvoiceId, PlanId, PromoId,
    ShippingRuleId, SubscriptionId, TaxRuleId, TrialEnd,
};

use crate::client::ApiClient;
use crate::error::Result;
use crate::params::Params;

impl ApiClient {
    // ========================================================================
    // Customers
    // ========================================================================

    /// List customers, optionally filtered.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_customers(&self, filter: Params) -> Result<Value> {
        self.get("customers", filter).await
    }

    /// Get a customer.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_customer(&self, id: impl Into<CustomerId>) -> Result<Value> {
        let id: CustomerId = id.into();
        self.get(&format!("customer/{id}"), Params::new()).await
    }

    /// Create a customer.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn create_customer(&self, fields: Params) -> Result<Value> {
        self.post("create/customer", fields).await
    }

    /// Update a customer. `fields` must include the customer `id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn update_customer(&self, fields: Params) -> Result<Value> {
        self.post("update/customer", fields).await
    }

    /// Update a customer's answer to a profile question.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn update_answer(&self, fields: Params) -> Result<Value> {
        self.post("update/answer", fields).await
    }

    /// List profile questions.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_questions(&self, filter: Params) -> Result<Value> {
        self.get("questions", filter).await
    }

    /// List answers to profile questions.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_answers(&self, filter: Params) -> Result<Value> {
        self.get("answers", filter).await
    }

    // ========================================================================
    // Plans
    // ========================================================================

    /// List plans.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_plans(&self, filter: Params) -> Result<Value> {
        self.get("plans", filter).await
    }

    /// Get a plan.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_plan(&self, id: impl Into<PlanId>) -> Result<Value> {
        let id: PlanId = id.into();
        self.get(&format!("plan/{id}"), Params::new()).await
    }

    /// Create a plan.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn create_plan(&self, fields: Params) -> Result<Value> {
        self.post("create/plan", fields).await
    }

    /// Update a plan. `fields` must include the plan `id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn update_plan(&self, fields: Params) -> Result<Value> {
        self.post("update/plan", fields).await
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// List a customer's subscriptions.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_subscriptions(&self, customer_id: impl Into<CustomerId>) -> Result<Value> {
        let customer_id: CustomerId = customer_id.into();
        self.get(&format!("subscriptions/{customer_id}"), Params::new()).await
    }

    /// Get a subscription.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_subscription(&self, id: impl Into<SubscriptionId>) -> Result<Value> {
        let id: SubscriptionId = id.into();
        self.get(&format!("subscription/{id}"), Params::new()).await
    }

    /// List active subscribers.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_subscribers(&self, filter: Params) -> Result<Value> {
        self.get("subscribers", filter).await
    }

    /// Subscribe a customer to a plan.
    ///
    /// `trial_end` is only sent when given.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn subscribe_customer(
        &self,
        customer_id: impl Into<CustomerId>,
        plan_id: impl Into<PlanId>,
        trial_end: Option<TrialEnd>,
    ) -> Result<Value> {
        let customer_id: CustomerId = customer_id.into();
        let plan_id: PlanId = plan_id.into();

        let mut params = Params::new();
        params.insert("customer_id".into(), Value::from(customer_id.get()));
        params.insert("plan_id".into(), Value::from(plan_id.get()));
        if let Some(trial_end) = trial_end {
            params.insert("trial_end".into(), serde_json::to_value(trial_end)?);
        }

        self.post("subscribe/customer", params).await
    }

    /// Move a subscription to another plan.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn update_subscription(
        &self,
        subscription_id: impl Into<SubscriptionId>,
        plan_id: impl Into<PlanId>,
    ) -> Result<Value> {
        let subscription_id: SubscriptionId = subscription_id.into();
        let plan_id: PlanId = plan_id.into();

        let mut params = Params::new();
        params.insert("subscription_id".into(), Value::from(subscription_id.get()));
        params.insert("plan_id".into(), Value::from(plan_id.get()));

        self.post("update/subscription", params).await
    }

    /// Cancel a subscription.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn unsubscribe_customer(
        &self,
        subscription_id: impl Into<SubscriptionId>,
    ) -> Result<Value> {
        let subscription_id: SubscriptionId = subscription_id.into();

        let mut params = Params::new();
        params.insert("subscription_id".into(), Value::from(subscription_id.get()));

        self.post("unsubscribe/customer", params).await
    }

    // ========================================================================
    // Invoices and charges
    // ========================================================================

    /// Get an invoice.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_invoice(&self, id: impl Into<InvoiceId>) -> Result<Value> {
        let id: InvoiceId = id.into();
        self.get(&format!("invoice/{id}"), Params::new()).await
    }

    /// List a customer's upcoming invoices.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_invoices(&self, customer_id: impl Into<CustomerId>) -> Result<Value> {
        let customer_id: CustomerId = customer_id.into();
        self.get(&format!("invoices/{customer_id}"), Params::new()).await
    }

    /// Create an invoice with a single charge.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn create_charge(&self, fields: Params) -> Result<Value> {
        self.post("create/charge", fields).await
    }

    /// Get a charge.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_charge(&self, id: impl Into<ChargeId>) -> Result<Value> {
        let id: ChargeId = id.into();
        self.get(&format!("charge/{id}"), Params::new()).await
    }

    // ========================================================================
    // Gateways and cards
    // ========================================================================

    /// List payment gateways.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_gateways(&self) -> Result<Value> {
        self.get("gateways", Params::new()).await
    }

    /// Get a payment gateway.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_gateway(&self, id: impl Into<GatewayId>) -> Result<Value> {
        let id: GatewayId = id.into();
        self.get(&format!("gateway/{id}"), Params::new()).await
    }

    /// Get a card.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_card(&self, id: impl Into<CardId>) -> Result<Value> {
        let id: CardId = id.into();
        self.get(&format!("card/{id}"), Params::new()).await
    }

    /// List a customer's cards.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_cards(&self, customer_id: impl Into<CustomerId>) -> Result<Value> {
        let customer_id: CustomerId = customer_id.into();
        self.get(&format!("cards/{customer_id}"), Params::new()).await
    }

    /// Create a card.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn create_card(&self, fields: Params) -> Result<Value> {
        self.post("create/card", fields).await
    }

    /// Delete a card.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn delete_card(&self, id: impl Into<CardId>) -> Result<Value> {
        let id: CardId = id.into();

        let mut params = Params::new();
        params.insert("id".into(), Value::from(id.get()));

        self.post("delete/card", params).await
    }

    // ========================================================================
    // Promos, templates, and rules
    // ========================================================================

    /// Get a promo code.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_promo(&self, id: impl Into<PromoId>) -> Result<Value> {
        let id: PromoId = id.into();
        self.get(&format!("promo/{id}"), Params::new()).await
    }

    /// Get an email template.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_email_template(&self, id: impl Into<EmailTemplateId>) -> Result<Value> {
        let id: EmailTemplateId = id.into();
        self.get(&format!("email/{id}"), Params::new()).await
    }

    /// Get a shipping rule.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_shipping_rule(&self, id: impl Into<ShippingRuleId>) -> Result<Value> {
        let id: ShippingRuleId = id.into();
        self.get(&format!("shipping/{id}"), Params::new()).await
    }

    /// Get a tax rule.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_tax_rule(&self, id: impl Into<TaxRuleId>) -> Result<Value> {
        let id: TaxRuleId = id.into();
        self.get(&format!("tax/{id}"), Params::new()).await
    }

    // ========================================================================
    // Account
    // ========================================================================

    /// Get the authenticated account.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_account(&self) -> Result<Value> {
        self.get("account", Params::new()).await
    }

    /// Get the authenticated account's stats.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_stats(&self) -> Result<Value> {
        self.get("stats", Params::new()).await
    }

    /// Request a multi-auth token for a customer-facing session.
    ///
    /// # Errors
    ///
    /// Propagates any [`ClientError`](crate::ClientError) from the request.
    pub async fn get_multi_auth_token(&self, options: Params) -> Result<Value> {
        self.post("multiauth", options).await
    }
}

