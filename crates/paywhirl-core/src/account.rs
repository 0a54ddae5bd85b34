//! Account-level shapes: account info, email templates, shipping and tax
//! rules, and multi-auth tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::{EmailTemplateId, ShippingRuleId, TaxRuleId};
use crate::lenient;

/// The authenticated PayWhirl account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub id: Option<i64>,
    /// Company name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub company_name: Option<String>,
    /// Contact email.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub email: Option<String>,
    /// Default currency.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub currency: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An email template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Template ID.
    pub id: EmailTemplateId,
    /// Template name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    /// Subject line.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub subject: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A shipping rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingRule {
    /// Rule ID.
    pub id: ShippingRuleId,
    /// Rule name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    /// Flat price charged.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A tax rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRule {
    /// Rule ID.
    pub id: TaxRuleId,
    /// Rule name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    /// Tax rate in percent.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub rate: Option<f64>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A multi-auth token for a customer-facing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiAuthToken {
    /// The token value.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub token: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_tolerates_sparse_body() {
        let account: Account = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(account.id.is_none());
        assert!(account.extra.is_empty());
    }

    #[test]
    fn tax_rule_parses_string_rate() {
        let rule: TaxRule =
            serde_json::from_value(serde_json::json!({ "id": 9, "rate": "8.25" })).unwrap();
        assert_eq!(rule.id, TaxRuleId::new(9));
        assert_eq!(rule.rate, Some(8.25));
    }

    #[test]
    fn email_template_decodes() {
        let template: EmailTemplate = serde_json::from_value(serde_json::json!({
            "id": 18,
            "name": "Welcome",
            "subject": "Thanks for subscribing",
            "body": "<p>Hi</p>"
        }))
        .unwrap();

        assert_eq!(template.id, EmailTemplateId::new(18));
        assert_eq!(template.subject.as_deref(), Some("Thanks for subscribing"));
        assert_eq!(template.extra["body"], "<p>Hi</p>");
    }

    #[test]
    fn shipping_rule_parses_string_price() {
        let rule: ShippingRule = serde_json::from_value(serde_json::json!({
            "id": "19",
            "name": "Flat rate",
            "price": "4.50"
        }))
        .unwrap();

        assert_eq!(rule.id, ShippingRuleId::new(19));
        assert_eq!(rule.price, Some(4.5));
    }

    #[test]
    fn multi_auth_token_keeps_extra_fields() {
        let token: MultiAuthToken = serde_json::from_value(serde_json::json!({
            "token": "mat_abc123",
            "expires_in": 3600
        }))
        .unwrap();

        assert_eq!(token.token.as_deref(), Some("mat_abc123"));
        assert_eq!(token.extra["expires_in"], 3600);
    }
}
