//! Invoice View Model
//!
//! Wire DTO for `GET /api/invoices/{id}` plus the normalized view model the
//! page renders from. Normalization is the single place optional-field
//! defaulting happens; every label method downstream can assume a fully
//! populated value.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::format_money;

/// Status the backend reports for a freshly created, still payable invoice.
pub const STATUS_CREATED: &str = "CREATED";

/// Fallback status text when the backend omits the field.
pub const STATUS_UNKNOWN: &str = "UNKNOWN";

/// Placeholder for absent display values.
const EM_DASH: &str = "\u{2014}";

/// Nested money object some backend versions emit instead of the flat
/// `amount`/`currency` pair.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Money {
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
}

/// Invoice as returned by the backend. Every field is optional; use
/// [`Invoice::from_wire`] before rendering anything.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub money: Option<Money>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_payable: Option<bool>,
}

/// Fully resolved invoice state for one render cycle.
///
/// `PartialEq` matters here: rendering twice from equal `Invoice` values must
/// produce identical output, and the label methods are pure, so equality of
/// the model is equality of the rendered page.
#[derive(Clone, Debug, PartialEq)]
pub struct Invoice {
    pub amount: Decimal,
    pub currency: String,
    pub description: Option<String>,
    /// Raw status text, `"UNKNOWN"` when the backend omitted it.
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether the pay button should be live. Explicit `isPayable` from the
    /// backend wins; otherwise inferred from `status == "CREATED"`.
    pub payable: bool,
}

impl Invoice {
    /// Resolve the wire DTO's optional fields into a renderable invoice.
    ///
    /// Field-wise precedence: flat `amount`/`currency` over the nested
    /// `money` object, then defaults (`0`, `"USD"`).
    pub fn from_wire(wire: InvoiceResponse) -> Self {
        let money = wire.money.unwrap_or_default();
        let amount = wire.amount.or(money.amount).unwrap_or(Decimal::ZERO);
        let currency = wire
            .currency
            .or(money.currency)
            .unwrap_or_else(|| "USD".to_string());
        let status = wire
            .status
            .unwrap_or_else(|| STATUS_UNKNOWN.to_string());
        let payable = wire.is_payable.unwrap_or(status == STATUS_CREATED);

        Self {
            amount,
            currency,
            description: wire.description.filter(|d| !d.is_empty()),
            status,
            created_at: wire.created_at,
            expires_at: wire.expires_at,
            payable,
        }
    }

    /// Formatted amount for the amount slot.
    pub fn amount_label(&self) -> String {
        format_money(self.amount, &self.currency)
    }

    /// Description, or an em-dash placeholder when absent.
    pub fn description_label(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| EM_DASH.to_string())
    }

    /// Creation time, or an em-dash placeholder when absent.
    pub fn created_label(&self) -> String {
        self.created_at
            .map_or_else(|| EM_DASH.to_string(), format_timestamp)
    }

    /// `"Expires: <time>"` when an expiry is set, empty otherwise.
    pub fn expires_label(&self) -> String {
        self.expires_at
            .map_or_else(String::new, |at| format!("Expires: {}", format_timestamp(at)))
    }
}

/// Human-readable timestamp, e.g. `Jan 15, 2026, 10:30 UTC`.
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%b %-d, %Y, %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wire(json: &str) -> InvoiceResponse {
        serde_json::from_str(json).expect("invoice JSON")
    }

    #[test]
    fn test_flat_fields_win_over_nested_money() {
        let inv = Invoice::from_wire(wire(
            r#"{"amount": 500, "money": {"amount": 900, "currency": "EUR"}}"#,
        ));
        assert_eq!(inv.amount, dec!(500));
        // currency was only present in the nested object, so it is taken
        // from there even though the amount was not
        assert_eq!(inv.currency, "EUR");
    }

    #[test]
    fn test_nested_money_is_resolved() {
        let inv = Invoice::from_wire(wire(r#"{"money": {"amount": 250, "currency": "ZAR"}}"#));
        assert_eq!(inv.amount, dec!(250));
        assert_eq!(inv.currency, "ZAR");
    }

    #[test]
    fn test_defaults_when_everything_is_absent() {
        let inv = Invoice::from_wire(wire("{}"));
        assert_eq!(inv.amount, Decimal::ZERO);
        assert_eq!(inv.currency, "USD");
        assert_eq!(inv.status, "UNKNOWN");
        assert!(!inv.payable);
        assert_eq!(inv.amount_label(), "$0.00");
    }

    #[test]
    fn test_payability_inferred_from_created_status() {
        let inv = Invoice::from_wire(wire(r#"{"status": "CREATED"}"#));
        assert!(inv.payable);

        let inv = Invoice::from_wire(wire(r#"{"status": "SUCCEEDED"}"#));
        assert!(!inv.payable);
    }

    #[test]
    fn test_explicit_is_payable_overrides_status() {
        let inv = Invoice::from_wire(wire(r#"{"status": "CREATED", "isPayable": false}"#));
        assert!(!inv.payable);

        let inv = Invoice::from_wire(wire(r#"{"status": "EXPIRED", "isPayable": true}"#));
        assert!(inv.payable);
    }

    #[test]
    fn test_description_placeholder() {
        let inv = Invoice::from_wire(wire(r#"{"description": "Order #1"}"#));
        assert_eq!(inv.description_label(), "Order #1");

        let inv = Invoice::from_wire(wire(r#"{"description": ""}"#));
        assert_eq!(inv.description_label(), "\u{2014}");

        let inv = Invoice::from_wire(wire("{}"));
        assert_eq!(inv.description_label(), "\u{2014}");
    }

    #[test]
    fn test_timestamp_labels() {
        let inv = Invoice::from_wire(wire(
            r#"{"createdAt": "2026-01-15T10:30:00Z", "expiresAt": "2026-01-16T10:30:00Z"}"#,
        ));
        assert_eq!(inv.created_label(), "Jan 15, 2026, 10:30 UTC");
        assert_eq!(inv.expires_label(), "Expires: Jan 16, 2026, 10:30 UTC");

        let inv = Invoice::from_wire(wire("{}"));
        assert_eq!(inv.created_label(), "\u{2014}");
        assert_eq!(inv.expires_label(), "");
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let json = r#"{"status": "CREATED", "amount": 500, "currency": "USD", "description": "Order #1"}"#;
        let first = Invoice::from_wire(wire(json));
        let second = Invoice::from_wire(wire(json));
        assert_eq!(first, second);
        assert_eq!(first.amount_label(), "$500.00");
        assert_eq!(first.amount_label(), second.amount_label());
    }

    #[test]
    fn test_scenario_created_invoice() {
        let inv = Invoice::from_wire(wire(
            r#"{"status": "CREATED", "amount": 500, "currency": "USD", "description": "Order #1"}"#,
        ));
        assert_eq!(inv.amount_label(), "$500.00");
        assert_eq!(inv.description_label(), "Order #1");
        assert!(inv.payable);
    }
}
