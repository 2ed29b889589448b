//! Scheduler layer for the worker
//!
//! This layer owns the polling loop: it decides when a sync cycle runs and
//! stops the loop on error or on an external stop signal.

pub mod poller;

pub use poller::OrderPoller;
