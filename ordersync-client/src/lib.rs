//! Order Sync HTTP Client
//!
//! A small, type-safe HTTP client for the remote order-management API.
//!
//! # Example
//!
//! ```no_run
//! use ordersync_client::OrderApiClient;
//!
//! #[tokio::main]
//! async fn main() -> ordersync_client::Result<()> {
//!     let client = OrderApiClient::new("https://api.example.com");
//!
//!     for order in client.list_orders().await? {
//!         println!("{:?} {}", order.id, order.amount());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod orders;

pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// HTTP client for the order API
///
/// Holds one `reqwest::Client`, so every request made through a single
/// instance shares the same connection pool.
#[derive(Debug, Clone)]
pub struct OrderApiClient {
    /// Base URL of the API (e.g., "https://api.example.com")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl OrderApiClient {
    /// Create a new client for the API at `base_url`
    ///
    /// # Example
    /// ```
    /// use ordersync_client::OrderApiClient;
    ///
    /// let client = OrderApiClient::new("https://api.example.com");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use ordersync_client::OrderApiClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = OrderApiClient::with_client("https://api.example.com", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the status code and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        // Reading the body can still fail on the wire; only decoding is a parse error
        let body = response.bytes().await?;

        serde_json::from_slice(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OrderApiClient::new("https://api.example.com");
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = OrderApiClient::new("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = OrderApiClient::with_client(DEFAULT_BASE_URL, http_client);
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
