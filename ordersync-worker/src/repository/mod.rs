//! Repository layer
//!
//! Repositories abstract communication with the order API behind a trait so
//! the sync loop can be driven by the HTTP client in production and by a
//! scripted source in tests.

mod orders;

#[cfg(test)]
pub mod scripted;

pub use orders::OrderRepository;
