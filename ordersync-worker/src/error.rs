//! Worker error types
//!
//! Every variant is fatal to the polling loop; none are recovered locally.

use ordersync_client::ClientError;
use thiserror::Error;

/// Result type alias for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that end a sync cycle
#[derive(Debug, Error)]
pub enum SyncError {
    /// A single API call failed (collection fetch is never retried)
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Detail fetch was asked for an empty order id
    #[error("order id must not be empty")]
    InvalidOrderId,

    /// An order above the threshold came without an id
    #[error("high-value order has no id")]
    MissingOrderId,

    /// Every permitted detail fetch attempt failed
    #[error("exhausted retries for order {order_id} after {attempts} attempts")]
    RetriesExhausted {
        order_id: String,
        attempts: u32,
        #[source]
        source: ClientError,
    },
}
