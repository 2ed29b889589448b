//! Scripted repository for tests
//!
//! Serves a fixed order collection and per-order details, fails detail
//! fetches a configured number of times, and records every call with the
//! (virtual) time it was made.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use ordersync_client::{ClientError, Result};
use ordersync_core::domain::order::{OrderDetail, OrderSummary};
use serde_json::json;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::OrderRepository;

/// A call made against the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Orders,
    Detail(String),
}

#[derive(Default)]
pub struct ScriptedRepository {
    orders: Vec<OrderSummary>,
    fail_orders: bool,
    details: HashMap<String, OrderDetail>,
    failures: HashMap<String, u32>,
    cancel_after: Option<(usize, CancellationToken)>,
    calls: Mutex<Vec<(Call, Instant)>>,
}

/// Builds an order summary; `None` omits the total
pub fn summary(id: &str, total: Option<f64>) -> OrderSummary {
    let value = match total {
        Some(total) => json!({ "id": id, "total": total }),
        None => json!({ "id": id }),
    };
    serde_json::from_value(value).unwrap()
}

/// Builds an order detail
pub fn detail(status: &str, total: i64) -> OrderDetail {
    serde_json::from_value(json!({ "status": status, "total": total })).unwrap()
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(mut self, orders: Vec<OrderSummary>) -> Self {
        self.orders = orders;
        self
    }

    pub fn with_detail(mut self, id: &str, detail: OrderDetail) -> Self {
        self.details.insert(id.to_string(), detail);
        self
    }

    /// Makes the first `times` detail fetches for `id` fail with a 503
    pub fn failing(mut self, id: &str, times: u32) -> Self {
        self.failures.insert(id.to_string(), times);
        self
    }

    /// Makes every collection fetch fail with a 500
    pub fn failing_orders(mut self) -> Self {
        self.fail_orders = true;
        self
    }

    /// Cancels `token` once the collection has been fetched `cycles` times
    pub fn cancel_after(mut self, cycles: usize, token: CancellationToken) -> Self {
        self.cancel_after = Some((cycles, token));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn detail_calls(&self, id: &str) -> usize {
        self.detail_times(id).len()
    }

    pub fn detail_times(&self, id: &str) -> Vec<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == Call::Detail(id.to_string()))
            .map(|(_, at)| *at)
            .collect()
    }

    pub fn order_times(&self) -> Vec<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == Call::Orders)
            .map(|(_, at)| *at)
            .collect()
    }

    fn record(&self, call: Call) -> usize {
        let mut calls = self.calls.lock().unwrap();
        calls.push((call.clone(), Instant::now()));
        calls.iter().filter(|(c, _)| *c == call).count()
    }
}

#[async_trait]
impl OrderRepository for ScriptedRepository {
    async fn fetch_orders(&self) -> Result<Vec<OrderSummary>> {
        let cycle = self.record(Call::Orders);

        if let Some((cycles, token)) = &self.cancel_after {
            if cycle >= *cycles {
                token.cancel();
            }
        }

        if self.fail_orders {
            return Err(ClientError::api_error(500, "orders unavailable"));
        }
        Ok(self.orders.clone())
    }

    async fn fetch_order_detail(&self, order_id: &str) -> Result<OrderDetail> {
        let attempt = self.record(Call::Detail(order_id.to_string()));

        let failures = self.failures.get(order_id).copied().unwrap_or(0);
        if attempt as u64 <= failures as u64 {
            return Err(ClientError::api_error(503, "unavailable"));
        }

        self.details
            .get(order_id)
            .cloned()
            .ok_or_else(|| ClientError::api_error(404, "not found"))
    }
}
