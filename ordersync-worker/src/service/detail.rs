//! Detail fetch service
//!
//! Fetches the detail record of a single order, retrying failed attempts
//! according to a [`RetryPolicy`]. Each failure is reported before the delay
//! that follows it, including the last one.

use std::sync::Arc;

use ordersync_core::domain::order::OrderDetail;
use tracing::{debug, error};

use crate::error::{Result, SyncError};
use crate::repository::OrderRepository;
use crate::service::report::{ReportEvent, ReportSink};
use crate::service::retry::RetryPolicy;

/// Fetches order details with bounded retries
pub struct DetailFetcher {
    repository: Arc<dyn OrderRepository>,
    sink: Arc<dyn ReportSink>,
    policy: RetryPolicy,
}

impl DetailFetcher {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        sink: Arc<dyn ReportSink>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            repository,
            sink,
            policy,
        }
    }

    /// Fetches the detail for `order_id`
    ///
    /// Returns on the first successful attempt. After `max_attempts` failures
    /// returns [`SyncError::RetriesExhausted`] carrying the last error.
    pub async fn fetch(&self, order_id: &str) -> Result<OrderDetail> {
        if order_id.is_empty() {
            return Err(SyncError::InvalidOrderId);
        }

        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.repository.fetch_order_detail(order_id).await {
                Ok(detail) => {
                    if attempt > 1 {
                        debug!(order_id, attempt, "detail fetched after retries");
                    }
                    return Ok(detail);
                }
                Err(e) => {
                    self.sink.report(ReportEvent::Retry {
                        order_id: order_id.to_string(),
                        attempt,
                        error: e.to_string(),
                    });

                    let delay = self.policy.delay_after(attempt);
                    debug!(order_id, attempt, ?delay, error = %e, "detail fetch failed");
                    tokio::time::sleep(delay).await;

                    if attempt >= self.policy.max_attempts {
                        error!(order_id, attempts = attempt, "giving up on order detail");
                        return Err(SyncError::RetriesExhausted {
                            order_id: order_id.to_string(),
                            attempts: attempt,
                            source: e,
                        });
                    }
                }
            }
        }
    }
}
