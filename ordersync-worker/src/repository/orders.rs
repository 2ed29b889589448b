//! Orders repository
//!
//! Handles the two calls the sync loop makes against the order API:
//! - Listing every order
//! - Fetching the detail of one order

use async_trait::async_trait;
use ordersync_client::{OrderApiClient, Result};
use ordersync_core::domain::order::{OrderDetail, OrderSummary};

/// Repository trait for order reads
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetches the full order collection in one call
    async fn fetch_orders(&self) -> Result<Vec<OrderSummary>>;

    /// Fetches the detail record for one order; a single attempt
    ///
    /// # Arguments
    /// * `order_id` - The order identifier
    async fn fetch_order_detail(&self, order_id: &str) -> Result<OrderDetail>;
}

#[async_trait]
impl OrderRepository for OrderApiClient {
    async fn fetch_orders(&self) -> Result<Vec<OrderSummary>> {
        self.list_orders().await
    }

    async fn fetch_order_detail(&self, order_id: &str) -> Result<OrderDetail> {
        self.get_order(order_id).await
    }
}
