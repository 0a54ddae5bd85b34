//! Plan and subscription shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::{CustomerId, PlanId, SubscriptionId};
use crate::lenient;

/// A subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan ID.
    pub id: PlanId,
    /// Plan name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    /// Description shown to customers.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub description: Option<String>,
    /// Amount billed each interval.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub billing_amount: Option<f64>,
    /// Interval unit (`day`, `week`, `month`, `year`).
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub billing_interval: Option<String>,
    /// Number of interval units between bills.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub billing_frequency: Option<i64>,
    /// One-time setup fee.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub setup_fee: Option<f64>,
    /// Length of the trial in days.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub trial_days: Option<i64>,
    /// Number of installments, zero for open-ended plans.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub installments: Option<i64>,
    /// Currency code.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub currency: Option<String>,
    /// Whether the plan accepts new subscribers.
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub enabled: Option<bool>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A customer's subscription to a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    pub id: SubscriptionId,
    /// The subscribed customer.
    #[serde(default)]
    pub customer_id: Option<CustomerId>,
    /// The plan subscribed to.
    #[serde(default)]
    pub plan_id: Option<PlanId>,
    /// Quantity of the plan.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub quantity: Option<i64>,
    /// Start of the current billing period.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub current_period_start: Option<String>,
    /// End of the current billing period.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub current_period_end: Option<String>,
    /// End of the trial, if any.
    #[serde(default)]
    pub trial_end: Option<Value>,
    /// Remaining installments.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub installments_left: Option<i64>,
    /// Whether the subscription ends with the current period.
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub cancel_at_period_end: Option<bool>,
    /// The plan, when the API embeds it.
    #[serde(default, deserialize_with = "lenient::opt_object")]
    pub plan: Option<Plan>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_accepts_string_amounts() {
        let plan: Plan = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Monthly Box",
            "billing_amount": "29.00",
            "billing_interval": "month",
            "billing_frequency": "1",
            "enabled": 1
        }))
        .unwrap();

        assert_eq!(plan.id, PlanId::new(7));
        assert_eq!(plan.billing_amount, Some(29.0));
        assert_eq!(plan.billing_frequency, Some(1));
        assert_eq!(plan.enabled, Some(true));
    }

    #[test]
    fn subscription_embeds_plan() {
        let sub: Subscription = serde_json::from_value(serde_json::json!({
            "id": 100,
            "customer_id": 42,
            "plan_id": 7,
            "plan": { "id": 7, "name": "Monthly Box" },
            "status": "active"
        }))
        .unwrap();

        assert_eq!(sub.customer_id, Some(CustomerId::new(42)));
        assert_eq!(sub.plan.as_ref().map(|p| p.id), Some(PlanId::new(7)));
        assert_eq!(sub.extra["status"], "active");
    }

    #[test]
    fn subscription_empty_plan_is_none() {
        let sub: Subscription =
            serde_json::from_value(serde_json::json!({ "id": 5, "plan": [] })).unwrap();
        assert!(sub.plan.is_none());

        let sub: Subscription =
            serde_json::from_value(serde_json::json!({ "id": 5, "plan": null })).unwrap();
        assert!(sub.plan.is_none());
    }
}
