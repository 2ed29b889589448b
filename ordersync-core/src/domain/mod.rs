//! Core domain types
//!
//! These types mirror the records served by the remote order-management API.
//! They are decoded by the client and consumed by the worker within a single
//! polling cycle.

pub mod order;
