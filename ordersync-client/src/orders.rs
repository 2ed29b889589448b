//! Order endpoints

use crate::OrderApiClient;
use crate::error::{ClientError, Result};
use ordersync_core::domain::order::{OrderDetail, OrderSummary};
use reqwest::Url;
use tracing::debug;

impl OrderApiClient {
    /// List every order the API currently holds
    ///
    /// Issues a single `GET /orders`; the API is not paginated and the
    /// response is returned in the order the API produced it.
    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>> {
        let url = format!("{}/orders", self.base_url);
        debug!(%url, "listing orders");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get the detail record for one order
    ///
    /// # Arguments
    /// * `order_id` - The order identifier, sent as a single path segment
    pub async fn get_order(&self, order_id: &str) -> Result<OrderDetail> {
        let url = self.order_url(order_id)?;
        debug!(%url, "fetching order detail");
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// Builds `<base>/orders/{id}` with the id percent-encoded
    fn order_url(&self, order_id: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/orders", self.base_url))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .push(order_id);

        Ok(url)
    }
}
