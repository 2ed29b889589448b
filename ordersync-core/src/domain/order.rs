//! Order domain model
//!
//! Represents the two record shapes served by the order API: the summary
//! returned by the collection endpoint and the detail returned per order.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Orders with a total strictly above this amount are considered high-value
pub const HIGH_VALUE_THRESHOLD: f64 = 1000.0;

/// Placeholder rendered for attributes the API omitted
const MISSING: &str = "None";

/// An order as listed by the collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Opaque order identifier; only required for orders that get fetched
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,

    /// Order amount; absent or null is treated as zero
    #[serde(default)]
    pub total: Option<Number>,

    /// Any other attributes, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderSummary {
    /// Creates a summary with no additional attributes
    pub fn new(id: impl Into<String>, total: Option<Number>) -> Self {
        Self {
            id: Some(id.into()),
            total,
            extra: Map::new(),
        }
    }

    /// The order amount, with a missing total counting as zero
    pub fn amount(&self) -> f64 {
        self.total.as_ref().and_then(Number::as_f64).unwrap_or(0.0)
    }

    /// Whether the amount strictly exceeds `threshold`
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.amount() > threshold
    }
}

/// Per-order detail returned by `GET /orders/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    /// Fulfilment status, opaque to this system
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub total: Option<Number>,

    /// Any other attributes, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderDetail {
    /// Status as printed in report lines
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or(MISSING)
    }

    /// Total as printed in report lines, keeping the API's number formatting
    pub fn total_label(&self) -> String {
        self.total
            .as_ref()
            .map_or_else(|| MISSING.to_string(), Number::to_string)
    }
}

/// Accepts string, numeric and null identifiers
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_keeps_unknown_fields() {
        let summary: OrderSummary = serde_json::from_value(json!({
            "id": "A-1",
            "total": 1500,
            "customer": "acme",
        }))
        .unwrap();

        assert_eq!(summary.id.as_deref(), Some("A-1"));
        assert_eq!(summary.amount(), 1500.0);
        assert_eq!(summary.extra.get("customer"), Some(&json!("acme")));
    }

    #[test]
    fn test_summary_numeric_id() {
        let summary: OrderSummary =
            serde_json::from_value(json!({ "id": 42, "total": 10 })).unwrap();
        assert_eq!(summary.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_collection_tolerates_records_without_id() {
        let orders: Vec<OrderSummary> =
            serde_json::from_str(r#"[{"total":5},{"id":null,"total":7},{"id":"B","total":1500}]"#)
                .unwrap();

        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].id, None);
        assert_eq!(orders[1].id, None);
        assert_eq!(orders[2].id.as_deref(), Some("B"));
    }

    #[test]
    fn test_missing_or_null_total_counts_as_zero() {
        let missing: OrderSummary = serde_json::from_value(json!({ "id": "A" })).unwrap();
        let null: OrderSummary =
            serde_json::from_value(json!({ "id": "B", "total": null })).unwrap();

        assert_eq!(missing.amount(), 0.0);
        assert_eq!(null.amount(), 0.0);
        assert!(!missing.exceeds(HIGH_VALUE_THRESHOLD));
    }

    #[test]
    fn test_non_numeric_total_is_rejected() {
        let result = serde_json::from_value::<OrderSummary>(json!({ "id": "A", "total": "big" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_exceeds_is_strict() {
        let at = OrderSummary::new("A", Some(1000.into()));
        let above = OrderSummary::new("B", Some(Number::from_f64(1000.01).unwrap()));

        assert!(!at.exceeds(HIGH_VALUE_THRESHOLD));
        assert!(above.exceeds(HIGH_VALUE_THRESHOLD));
    }

    #[test]
    fn test_detail_labels() {
        let detail: OrderDetail =
            serde_json::from_value(json!({ "status": "shipped", "total": 1500 })).unwrap();
        assert_eq!(detail.status_label(), "shipped");
        assert_eq!(detail.total_label(), "1500");

        let empty: OrderDetail = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.status_label(), "None");
        assert_eq!(empty.total_label(), "None");
    }
}
