//! Value filter
//!
//! Keeps only the orders worth a detail fetch.

use ordersync_core::domain::order::{HIGH_VALUE_THRESHOLD, OrderSummary};

/// Retains orders whose total strictly exceeds a threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueFilter {
    threshold: f64,
}

impl ValueFilter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the high-value orders in their original order
    ///
    /// Orders without a total count as zero and are dropped.
    pub fn apply(&self, orders: Vec<OrderSummary>) -> Vec<OrderSummary> {
        orders
            .into_iter()
            .filter(|order| order.exceeds(self.threshold))
            .collect()
    }
}

impl Default for ValueFilter {
    fn default() -> Self {
        Self::new(HIGH_VALUE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::scripted::summary;

    fn ids(orders: &[OrderSummary]) -> Vec<&str> {
        orders.iter().filter_map(|o| o.id.as_deref()).collect()
    }

    #[test]
    fn test_keeps_only_totals_above_threshold() {
        let orders = vec![
            summary("A", Some(500.0)),
            summary("B", Some(1500.0)),
            summary("C", Some(1000.0)),
            summary("D", None),
            summary("E", Some(1000.5)),
        ];

        let kept = ValueFilter::default().apply(orders);
        assert_eq!(ids(&kept), ["B", "E"]);
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        let orders = vec![
            summary("Z", Some(2000.0)),
            summary("A", Some(3000.0)),
            summary("Z", Some(2000.0)),
        ];

        let kept = ValueFilter::default().apply(orders);
        assert_eq!(ids(&kept), ["Z", "A", "Z"]);
    }

    #[test]
    fn test_is_idempotent() {
        let filter = ValueFilter::default();
        let once = filter.apply(vec![
            summary("A", Some(10.0)),
            summary("B", Some(1001.0)),
            summary("C", Some(5000.0)),
        ]);
        let twice = filter.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(ValueFilter::default().apply(Vec::new()).is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let filter = ValueFilter::new(0.0);
        let kept = filter.apply(vec![summary("A", Some(0.5)), summary("B", None)]);
        assert_eq!(ids(&kept), ["A"]);
        assert_eq!(filter.threshold(), 0.0);
    }
}
