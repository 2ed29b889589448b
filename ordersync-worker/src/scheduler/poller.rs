//! Order poller
//!
//! Drives the sync loop: fetch every order, keep the high-value ones, fetch
//! each of their details in turn, report them, then sleep before the next
//! cycle. Cycles run one after another and any error ends the loop.

use std::sync::Arc;

use tokio::time::{self, Duration};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, SyncError};
use crate::repository::OrderRepository;
use crate::service::{DetailFetcher, ReportEvent, ReportSink, ValueFilter};

/// Counts from one completed cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleStats {
    /// Orders returned by the collection endpoint
    pub fetched: usize,

    /// Orders that passed the value filter and were fetched in detail
    pub processed: usize,
}

/// Poller that repeatedly syncs high-value orders
pub struct OrderPoller {
    repository: Arc<dyn OrderRepository>,
    sink: Arc<dyn ReportSink>,
    filter: ValueFilter,
    details: DetailFetcher,
    poll_interval: Duration,
}

impl OrderPoller {
    /// Creates a new order poller
    pub fn new(
        config: &Config,
        repository: Arc<dyn OrderRepository>,
        sink: Arc<dyn ReportSink>,
    ) -> Self {
        let details = DetailFetcher::new(Arc::clone(&repository), Arc::clone(&sink), config.retry);

        Self {
            repository,
            sink,
            filter: ValueFilter::new(config.threshold),
            details,
            poll_interval: config.poll_interval,
        }
    }

    /// Runs cycles until `cancel` fires or a cycle fails
    ///
    /// Cancellation is observed between cycles and interrupts the pause; a
    /// cycle that has started always runs to completion or failure.
    pub async fn run(&self, cancel: CancellationToken) -> Result<()> {
        info!(
            "Starting order poller (interval: {:?}, threshold: {})",
            self.poll_interval,
            self.filter.threshold()
        );

        let mut cycle: u64 = 0;

        while !cancel.is_cancelled() {
            cycle += 1;

            let stats = self.run_cycle().await?;
            debug!(
                cycle,
                fetched = stats.fetched,
                processed = stats.processed,
                "cycle complete"
            );

            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = time::sleep(self.poll_interval) => {}
            }
        }

        info!("Order poller stopped after {} cycle(s)", cycle);
        Ok(())
    }

    /// Performs a single cycle
    pub async fn run_cycle(&self) -> Result<CycleStats> {
        let orders = self.repository.fetch_orders().await?;
        let fetched = orders.len();

        let high_value = self.filter.apply(orders);
        debug!("{} of {} order(s) above threshold", high_value.len(), fetched);

        for order in &high_value {
            let order_id = order.id.as_deref().ok_or(SyncError::MissingOrderId)?;
            let detail = self.details.fetch(order_id).await?;

            self.sink.report(ReportEvent::Order {
                order_id: order_id.to_string(),
                status: detail.status_label().to_string(),
                total: detail.total_label(),
            });
        }

        Ok(CycleStats {
            fetched,
            processed: high_value.len(),
        })
    }
}
